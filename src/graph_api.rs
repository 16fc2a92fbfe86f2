// Graph API client interface - the transport collaborator every operations
// adapter delegates to. Implementations own authentication, pagination
// mechanics, and payload decoding.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::GraphResult;
use crate::models::PagedList;

/// Size variants for binary image resources served from an object's
/// "picture" edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Small,
    Normal,
    Large,
    Square,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Small => "small",
            ImageType::Normal => "normal",
            ImageType::Large => "large",
            ImageType::Square => "square",
        }
    }
}

impl Default for ImageType {
    fn default() -> Self {
        ImageType::Normal
    }
}

/// Low-level Graph API capabilities consumed by the operation adapters.
///
/// The deserialization target replaces the object/connection type argument:
/// callers name the shape they expect and the client decodes into it.
/// Adapters stay generic over an implementation so they can be unit-tested
/// against a stand-in.
#[async_trait]
pub trait GraphApi: Send + Sync {
    /// Fetch a single object by id, decoded as `T`.
    async fn fetch_object<T>(&self, object_id: &str) -> GraphResult<T>
    where
        T: DeserializeOwned + Send;

    /// Fetch a binary image resource from the named edge of an object.
    async fn fetch_image(
        &self,
        object_id: &str,
        edge: &str,
        image_type: ImageType,
    ) -> GraphResult<Vec<u8>>;

    /// Fetch a paginated connection, optionally restricted to a field
    /// projection. An empty `fields` slice requests the server default.
    async fn fetch_connections<T>(
        &self,
        object_id: &str,
        edge: &str,
        fields: &[&str],
    ) -> GraphResult<PagedList<T>>
    where
        T: DeserializeOwned + Send;

    /// Fetch a paginated connection (or a non-id endpoint such as "search",
    /// addressed with an empty edge) using an arbitrary query-parameter set.
    /// Parameters are an unordered unique-key set; wire ordering is owned by
    /// the implementation.
    async fn fetch_connections_with_params<T>(
        &self,
        object_id: &str,
        edge: &str,
        params: HashMap<String, String>,
    ) -> GraphResult<PagedList<T>>
    where
        T: DeserializeOwned + Send;
}
