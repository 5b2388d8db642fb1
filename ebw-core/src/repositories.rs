// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CaseRepo {
    fn create_case(&self, case: &Case) -> Result<()>;
    fn update_case(&self, case: &Case) -> Result<()>;
    fn delete_case(&self, id: &Id) -> Result<()>;

    fn get_case(&self, id: &Id) -> Result<Case>;
    fn try_get_case(&self, id: &Id) -> Result<Option<Case>> {
        match self.get_case(id) {
            Ok(case) => Ok(Some(case)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_cases(&self) -> Result<Vec<Case>>;
    fn count_cases(&self) -> Result<usize>;

    fn is_slug_taken(&self, slug: &str, excluded_case_id: Option<&Id>) -> Result<bool>;

    // Rolling-window counts for the engagement metrics.
    // `since` is inclusive, `until` is exclusive.
    fn count_cases_created_between(&self, since: Timestamp, until: Timestamp) -> Result<usize>;
    fn count_cases_dated_between(&self, since: Timestamp, until: Timestamp) -> Result<usize>;
    fn count_cases_updated_since(&self, since: Timestamp) -> Result<usize>;
}

pub trait CaseRevisionRepo {
    fn create_case_revision(&self, revision: &CaseRevision) -> Result<()>;

    // Chronological, oldest first
    fn revisions_of_case(&self, case_id: &Id) -> Result<Vec<CaseRevision>>;
    fn latest_revision_of_case(&self, case_id: &Id) -> Result<Option<CaseRevision>> {
        Ok(self.revisions_of_case(case_id)?.pop())
    }

    // `since` is inclusive, `until` is exclusive.
    fn count_update_revisions_between(&self, since: Timestamp, until: Timestamp) -> Result<usize>;
}

pub trait FollowRepo {
    // Implementations must reject duplicate (follower, followable) pairs
    // with `Error::AlreadyExists` and adjust the denormalized follows
    // counter atomically together with the row.
    fn create_follow(&self, follow: &Follow) -> Result<()>;
    fn delete_follow(&self, follower: &Id, followable: &Followable) -> Result<()>;
    fn delete_follows_of(&self, followable: &Followable) -> Result<usize>;

    // The denormalized counter
    fn follows_count(&self, followable: &Followable) -> Result<u64>;
    // The live row count
    fn count_follows(&self, followable: &Followable) -> Result<u64>;

    fn follower_ids_of(&self, followable: &Followable) -> Result<Vec<Id>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait StateRepo {
    fn create_state(&self, state: &State) -> Result<()>;

    fn get_state(&self, id: &Id) -> Result<State>;
}

pub trait SubjectRepo {
    fn create_subject(&self, subject: &Subject) -> Result<()>;

    fn get_subjects(&self, ids: &[&Id]) -> Result<Vec<Subject>>;
}
