use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::group::Reference;

/// One school entry in a profile's education history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationExperience {
    #[serde(default)]
    pub school: Option<Reference>,
    #[serde(default)]
    pub year: Option<Reference>,
    #[serde(default, rename = "type")]
    pub education_type: Option<String>,
}

/// One employer entry in a profile's work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub employer: Option<Reference>,
    #[serde(default)]
    pub position: Option<Reference>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Full profile projection of a user. Every field except `id` is optional:
/// the API omits anything the access token cannot see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookProfile {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub education: Option<Vec<EducationExperience>>,
    #[serde(default)]
    pub work: Option<Vec<WorkEntry>>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub third_party_id: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub timezone: Option<f64>,
    #[serde(default)]
    pub updated_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub location: Option<Reference>,
    #[serde(default)]
    pub hometown: Option<Reference>,
    #[serde(default)]
    pub interested_in: Option<Vec<String>>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub political: Option<String>,
    #[serde(default)]
    pub quotes: Option<String>,
    #[serde(default)]
    pub relationship_status: Option<String>,
    #[serde(default)]
    pub significant_other: Option<Reference>,
    #[serde(default)]
    pub website: Option<String>,
}
