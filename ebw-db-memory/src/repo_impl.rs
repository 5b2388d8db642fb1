use ebw_core::{entities::*, repositories::*};

use crate::MemoryConnection;

type Result<T> = std::result::Result<T, Error>;

impl CaseRepo for MemoryConnection {
    fn create_case(&self, case: &Case) -> Result<()> {
        self.storage.borrow_mut().create_case(case)
    }
    fn update_case(&self, case: &Case) -> Result<()> {
        self.storage.borrow_mut().update_case(case)
    }
    fn delete_case(&self, id: &Id) -> Result<()> {
        self.storage.borrow_mut().delete_case(id)
    }

    fn get_case(&self, id: &Id) -> Result<Case> {
        self.storage.borrow().get_case(id)
    }
    fn all_cases(&self) -> Result<Vec<Case>> {
        self.storage.borrow().all_cases()
    }
    fn count_cases(&self) -> Result<usize> {
        self.storage.borrow().count_cases()
    }

    fn is_slug_taken(&self, slug: &str, excluded_case_id: Option<&Id>) -> Result<bool> {
        self.storage.borrow().is_slug_taken(slug, excluded_case_id)
    }

    fn count_cases_created_between(&self, since: Timestamp, until: Timestamp) -> Result<usize> {
        self.storage
            .borrow()
            .count_cases_created_between(since, until)
    }
    fn count_cases_dated_between(&self, since: Timestamp, until: Timestamp) -> Result<usize> {
        self.storage
            .borrow()
            .count_cases_dated_between(since, until)
    }
    fn count_cases_updated_since(&self, since: Timestamp) -> Result<usize> {
        self.storage.borrow().count_cases_updated_since(since)
    }
}

impl CaseRevisionRepo for MemoryConnection {
    fn create_case_revision(&self, revision: &CaseRevision) -> Result<()> {
        self.storage.borrow_mut().create_case_revision(revision)
    }

    fn revisions_of_case(&self, case_id: &Id) -> Result<Vec<CaseRevision>> {
        self.storage.borrow().revisions_of_case(case_id)
    }

    fn count_update_revisions_between(&self, since: Timestamp, until: Timestamp) -> Result<usize> {
        self.storage
            .borrow()
            .count_update_revisions_between(since, until)
    }
}

impl FollowRepo for MemoryConnection {
    fn create_follow(&self, follow: &Follow) -> Result<()> {
        self.storage.borrow_mut().create_follow(follow)
    }
    fn delete_follow(&self, follower: &Id, followable: &Followable) -> Result<()> {
        self.storage.borrow_mut().delete_follow(follower, followable)
    }
    fn delete_follows_of(&self, followable: &Followable) -> Result<usize> {
        self.storage.borrow_mut().delete_follows_of(followable)
    }

    fn follows_count(&self, followable: &Followable) -> Result<u64> {
        self.storage.borrow().follows_count(followable)
    }
    fn count_follows(&self, followable: &Followable) -> Result<u64> {
        self.storage.borrow().count_follows(followable)
    }

    fn follower_ids_of(&self, followable: &Followable) -> Result<Vec<Id>> {
        self.storage.borrow().follower_ids_of(followable)
    }
}

impl UserRepo for MemoryConnection {
    fn create_user(&self, user: &User) -> Result<()> {
        self.storage.borrow_mut().create_user(user)
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        self.storage.borrow().get_user(id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        self.storage.borrow().try_get_user_by_email(email)
    }
    fn count_users(&self) -> Result<usize> {
        self.storage.borrow().count_users()
    }
}

impl StateRepo for MemoryConnection {
    fn create_state(&self, state: &State) -> Result<()> {
        self.storage.borrow_mut().create_state(state)
    }

    fn get_state(&self, id: &Id) -> Result<State> {
        self.storage.borrow().get_state(id)
    }
}

impl SubjectRepo for MemoryConnection {
    fn create_subject(&self, subject: &Subject) -> Result<()> {
        self.storage.borrow_mut().create_subject(subject)
    }

    fn get_subjects(&self, ids: &[&Id]) -> Result<Vec<Subject>> {
        self.storage.borrow().get_subjects(ids)
    }
}
