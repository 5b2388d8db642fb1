mod create_case;
mod create_new_user;
mod delete_case;
mod derive_case_slug;
mod error;
mod follow_case;
mod metrics;
mod nearby_cases;
mod tracked_changes;
mod update_case;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_case::*, create_new_user::*, delete_case::*, derive_case_slug::*, error::Error,
    follow_case::*, metrics::*, nearby_cases::*, tracked_changes::*, update_case::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::Error as RepoError, repositories::*};
}
