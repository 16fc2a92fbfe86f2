// Typed adapter for the group operations of a Facebook-style Graph API.
// Transport, authentication, and pagination mechanics live behind the
// GraphApi trait; this crate supplies the typed facade on top of it.

// Graph client collaborator interface
pub mod graph_api;

// Data model - serde shapes for objects and connections
pub mod models;

// Group operations adapter
pub mod groups;

// Common utilities
pub mod error;

// Re-exports for convenience
pub use error::{GraphError, GraphResult};
pub use graph_api::{GraphApi, ImageType};
pub use groups::GroupOperations;
pub use models::{
    FacebookProfile, Group, GroupMemberReference, GroupMembership, GroupPrivacy, PagedList,
    PagingParameters, Reference,
};
