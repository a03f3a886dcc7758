//! User-directory services.
//!
//! Thin pass-through services over the repository contracts. The query
//! kernel does the interesting work; these own the per-entity wiring
//! (model names, search fields, default sorts) and the small invariants
//! around user mutation.

pub mod user_admin;
pub mod user_profile;

pub use user_admin::{USER_MODEL, USER_SEARCH_FIELDS, UserAdminService};
pub use user_profile::UserProfileService;
