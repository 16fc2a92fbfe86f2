use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal id/name projection of a related object, used wherever the API
/// embeds a reference rather than a full object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupPrivacy {
    Open,
    Closed,
    Secret,
}

/// A group object as returned by the Graph API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(default)]
    pub owner: Option<Reference>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub privacy: Option<GroupPrivacy>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub updated_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub version: Option<i32>,
}

/// Minimal identity of a group member, as served by the "members"
/// connection without a field projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMemberReference {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub administrator: bool,
}

/// A user's membership record in a group, as served by the user's "groups"
/// connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub bookmark_order: Option<i32>,
    #[serde(default)]
    pub administrator: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_decodes_from_api_payload() {
        let group: Group = serde_json::from_str(
            r#"{
                "id": "195466193802264",
                "owner": {"id": "100001387295207", "name": "Art Names"},
                "name": "Test Group Everybody",
                "privacy": "OPEN",
                "icon": "https://static.example.com/rsrc.php/v1/yh/r/IPw3LB5BsPK.png",
                "updated_time": "2011-03-30T19:24:59Z",
                "email": "195466193802264@groups.example.com"
            }"#,
        )
        .unwrap();

        assert_eq!(group.id, "195466193802264");
        assert_eq!(group.privacy, Some(GroupPrivacy::Open));
        assert_eq!(group.owner.unwrap().name.as_deref(), Some("Art Names"));
        assert!(group.description.is_none());
        assert!(group.version.is_none());
    }

    #[test]
    fn member_reference_administrator_defaults_to_false() {
        let member: GroupMemberReference =
            serde_json::from_str(r#"{"id": "100001387295207", "name": "Art Names"}"#).unwrap();
        assert!(!member.administrator);

        let admin: GroupMemberReference = serde_json::from_str(
            r#"{"id": "738140579", "name": "Craig Walls", "administrator": true}"#,
        )
        .unwrap();
        assert!(admin.administrator);
    }

    #[test]
    fn membership_decodes_bookmark_order() {
        let membership: GroupMembership = serde_json::from_str(
            r#"{"id": "148012545269887", "name": "test group", "version": 1, "bookmark_order": 999, "administrator": true}"#,
        )
        .unwrap();
        assert_eq!(membership.bookmark_order, Some(999));
        assert!(membership.administrator);
    }
}
