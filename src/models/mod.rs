pub mod group;
pub mod paging;
pub mod profile;

pub use group::{Group, GroupMemberReference, GroupMembership, GroupPrivacy, Reference};
pub use paging::{PagedList, PagingParameters};
pub use profile::{EducationExperience, FacebookProfile, WorkEntry};
