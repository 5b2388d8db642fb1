use ebw_core::{entities::*, repositories::*};

use super::{read_only_violation, Result};
use crate::DbReadOnly;

impl CaseRepo for DbReadOnly<'_> {
    fn create_case(&self, _case: &Case) -> Result<()> {
        Err(read_only_violation())
    }
    fn update_case(&self, _case: &Case) -> Result<()> {
        Err(read_only_violation())
    }
    fn delete_case(&self, _id: &Id) -> Result<()> {
        Err(read_only_violation())
    }

    fn get_case(&self, id: &Id) -> Result<Case> {
        self.inner().get_case(id)
    }
    fn all_cases(&self) -> Result<Vec<Case>> {
        self.inner().all_cases()
    }
    fn count_cases(&self) -> Result<usize> {
        self.inner().count_cases()
    }

    fn is_slug_taken(&self, slug: &str, excluded_case_id: Option<&Id>) -> Result<bool> {
        self.inner().is_slug_taken(slug, excluded_case_id)
    }

    fn count_cases_created_between(&self, since: Timestamp, until: Timestamp) -> Result<usize> {
        self.inner().count_cases_created_between(since, until)
    }
    fn count_cases_dated_between(&self, since: Timestamp, until: Timestamp) -> Result<usize> {
        self.inner().count_cases_dated_between(since, until)
    }
    fn count_cases_updated_since(&self, since: Timestamp) -> Result<usize> {
        self.inner().count_cases_updated_since(since)
    }
}

impl CaseRevisionRepo for DbReadOnly<'_> {
    fn create_case_revision(&self, _revision: &CaseRevision) -> Result<()> {
        Err(read_only_violation())
    }

    fn revisions_of_case(&self, case_id: &Id) -> Result<Vec<CaseRevision>> {
        self.inner().revisions_of_case(case_id)
    }

    fn count_update_revisions_between(&self, since: Timestamp, until: Timestamp) -> Result<usize> {
        self.inner().count_update_revisions_between(since, until)
    }
}

impl FollowRepo for DbReadOnly<'_> {
    fn create_follow(&self, _follow: &Follow) -> Result<()> {
        Err(read_only_violation())
    }
    fn delete_follow(&self, _follower: &Id, _followable: &Followable) -> Result<()> {
        Err(read_only_violation())
    }
    fn delete_follows_of(&self, _followable: &Followable) -> Result<usize> {
        Err(read_only_violation())
    }

    fn follows_count(&self, followable: &Followable) -> Result<u64> {
        self.inner().follows_count(followable)
    }
    fn count_follows(&self, followable: &Followable) -> Result<u64> {
        self.inner().count_follows(followable)
    }

    fn follower_ids_of(&self, followable: &Followable) -> Result<Vec<Id>> {
        self.inner().follower_ids_of(followable)
    }
}

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<()> {
        Err(read_only_violation())
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        self.inner().get_user(id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        self.inner().try_get_user_by_email(email)
    }
    fn count_users(&self) -> Result<usize> {
        self.inner().count_users()
    }
}

impl StateRepo for DbReadOnly<'_> {
    fn create_state(&self, _state: &State) -> Result<()> {
        Err(read_only_violation())
    }

    fn get_state(&self, id: &Id) -> Result<State> {
        self.inner().get_state(id)
    }
}

impl SubjectRepo for DbReadOnly<'_> {
    fn create_subject(&self, _subject: &Subject) -> Result<()> {
        Err(read_only_violation())
    }

    fn get_subjects(&self, ids: &[&Id]) -> Result<Vec<Subject>> {
        self.inner().get_subjects(ids)
    }
}
