// Group operations - typed facade over the group portion of the Graph API.
// Every method is a single stateless delegation to the graph client; the
// only logic here is parameter assembly and the local authorization guard.

use std::sync::Arc;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph_api::{GraphApi, ImageType};
use crate::models::{
    FacebookProfile, Group, GroupMemberReference, GroupMembership, PagedList, PagingParameters,
};

/// Field projection requested for group search results.
const GROUP_SEARCH_FIELDS: &str = "owner,name,description,privacy,icon,updated_time,email,version";

/// Field projection for the full-profile form of the members connection.
const FULL_PROFILE_FIELDS: [&str; 27] = [
    "id",
    "username",
    "name",
    "first_name",
    "last_name",
    "gender",
    "locale",
    "education",
    "work",
    "email",
    "third_party_id",
    "link",
    "timezone",
    "updated_time",
    "verified",
    "about",
    "bio",
    "birthday",
    "location",
    "hometown",
    "interested_in",
    "religion",
    "political",
    "quotes",
    "relationship_status",
    "significant_other",
    "website",
];

const DEFAULT_SEARCH_OFFSET: u32 = 0;
const DEFAULT_SEARCH_LIMIT: u32 = 25;

/// Adapter for group lookup, images, membership lists, and search.
///
/// Holds only the graph client and the authorized-for-user flag, both fixed
/// at construction, so one instance can be shared freely across tasks.
pub struct GroupOperations<G> {
    graph: Arc<G>,
    authorized_for_user: bool,
}

impl<G: GraphApi> GroupOperations<G> {
    pub fn new(graph: Arc<G>, authorized_for_user: bool) -> Self {
        Self {
            graph,
            authorized_for_user,
        }
    }

    /// Fetch a single group by id.
    pub async fn get_group(&self, group_id: &str) -> GraphResult<Group> {
        debug!(group_id, "fetching group");
        self.graph.fetch_object(group_id).await
    }

    /// Fetch a group's picture at the normal size.
    pub async fn get_group_image(&self, group_id: &str) -> GraphResult<Vec<u8>> {
        self.get_group_image_sized(group_id, ImageType::Normal).await
    }

    /// Fetch a group's picture at the given size.
    pub async fn get_group_image_sized(
        &self,
        group_id: &str,
        image_type: ImageType,
    ) -> GraphResult<Vec<u8>> {
        debug!(group_id, image_type = image_type.as_str(), "fetching group image");
        self.graph.fetch_image(group_id, "picture", image_type).await
    }

    /// List a group's members in reference form. Requires a user context.
    pub async fn get_members(
        &self,
        group_id: &str,
    ) -> GraphResult<PagedList<GroupMemberReference>> {
        self.require_authorization()?;
        debug!(group_id, "fetching group members");
        self.graph.fetch_connections(group_id, "members", &[]).await
    }

    /// List a group's members as full profiles. Requires a user context.
    pub async fn get_member_profiles(
        &self,
        group_id: &str,
    ) -> GraphResult<PagedList<FacebookProfile>> {
        self.require_authorization()?;
        debug!(group_id, "fetching group member profiles");
        self.graph
            .fetch_connections(group_id, "members", &FULL_PROFILE_FIELDS)
            .await
    }

    /// List the current user's group memberships.
    pub async fn get_memberships(&self) -> GraphResult<PagedList<GroupMembership>> {
        self.get_memberships_for("me").await
    }

    /// List the given user's group memberships. Requires a user context.
    pub async fn get_memberships_for(
        &self,
        user_id: &str,
    ) -> GraphResult<PagedList<GroupMembership>> {
        self.require_authorization()?;
        debug!(user_id, "fetching group memberships");
        self.graph.fetch_connections(user_id, "groups", &[]).await
    }

    /// Search groups by text query with default paging.
    pub async fn search(&self, query: &str) -> GraphResult<PagedList<Group>> {
        self.search_with_paging(query, DEFAULT_SEARCH_OFFSET, DEFAULT_SEARCH_LIMIT)
            .await
    }

    /// Search groups by text query within an offset/limit window.
    pub async fn search_with_paging(
        &self,
        query: &str,
        offset: u32,
        limit: u32,
    ) -> GraphResult<PagedList<Group>> {
        self.search_with_parameters(query, &PagingParameters::with_offset_limit(offset, limit))
            .await
    }

    /// Search groups by text query with an arbitrary paging window.
    pub async fn search_with_parameters(
        &self,
        query: &str,
        paging: &PagingParameters,
    ) -> GraphResult<PagedList<Group>> {
        debug!(query, "searching groups");
        let mut params = paging.to_query_params();
        params.insert("q".to_string(), query.to_string());
        params.insert("type".to_string(), "group".to_string());
        params.insert("fields".to_string(), GROUP_SEARCH_FIELDS.to_string());
        self.graph
            .fetch_connections_with_params("search", "", params)
            .await
    }

    fn require_authorization(&self) -> GraphResult<()> {
        if !self.authorized_for_user {
            return Err(GraphError::AuthorizationRequired(
                "operation requires a user access token".to_string(),
            ));
        }
        Ok(())
    }
}
