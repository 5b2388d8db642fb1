use std::{cell::RefCell, collections::HashMap};

use super::{NewCase, UpdateCase};
use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub cases: RefCell<Vec<Case>>,
    pub revisions: RefCell<Vec<CaseRevision>>,
    pub follows: RefCell<Vec<Follow>>,
    pub follows_counts: RefCell<HashMap<Followable, u64>>,
    pub users: RefCell<Vec<User>>,
    pub states: RefCell<Vec<State>>,
    pub subjects: RefCell<Vec<Subject>>,
}

impl MockDb {
    pub fn add_default_state(&self) {
        self.states.borrow_mut().push(State {
            id: "state-ny".into(),
            name: "New York".into(),
            abbreviation: "NY".into(),
        });
    }

    pub fn push_update_revision(&self, case_id: &str, at: Timestamp) {
        self.revisions.borrow_mut().push(CaseRevision {
            id: Id::new(),
            case_id: case_id.into(),
            event: RevisionEvent::Updated,
            changes: vec![],
            created: Activity { at, by: None },
            comment: None,
        });
    }
}

pub fn default_new_case(db: &MockDb) -> NewCase {
    if db.subjects.borrow().is_empty() {
        db.subjects.borrow_mut().push(Subject {
            id: "subject-1".into(),
            name: "Excessive force".into(),
        });
    }
    NewCase {
        title: "The Title".into(),
        overview: "What happened, at length".into(),
        summary: "What happened, briefly".into(),
        date: Some(Timestamp::now()),
        street: Some("1 State St".into()),
        city: Some("Albany".into()),
        zip: Some("12207".into()),
        state_id: "state-ny".into(),
        subject_ids: vec!["subject-1".into()],
        litigation: None,
        community_action: None,
        avatar_url: None,
        video_url: None,
    }
}

pub fn update_from_case(case: &Case) -> UpdateCase {
    UpdateCase {
        title: case.title.clone(),
        overview: case.overview.clone(),
        summary: case.summary.clone(),
        date: Some(case.date),
        street: case.location.address.street.clone(),
        city: case.location.address.city.clone(),
        zip: case.location.address.zip.clone(),
        state_id: case.state_id.clone(),
        subject_ids: case.subject_ids.clone(),
        litigation: case.litigation.clone(),
        community_action: case.community_action.clone(),
        avatar_url: case.avatar_url.clone(),
        video_url: case.video_url.clone(),
    }
}

impl CaseRepo for MockDb {
    fn create_case(&self, case: &Case) -> RepoResult<()> {
        if self.cases.borrow().iter().any(|c| c.id == case.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.cases.borrow_mut().push(case.clone());
        Ok(())
    }

    fn update_case(&self, case: &Case) -> RepoResult<()> {
        for stored in self.cases.borrow_mut().iter_mut() {
            if stored.id == case.id {
                *stored = case.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_case(&self, id: &Id) -> RepoResult<()> {
        let mut cases = self.cases.borrow_mut();
        let len_before = cases.len();
        cases.retain(|c| &c.id != id);
        if cases.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn get_case(&self, id: &Id) -> RepoResult<Case> {
        self.cases
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_cases(&self) -> RepoResult<Vec<Case>> {
        Ok(self.cases.borrow().clone())
    }

    fn count_cases(&self) -> RepoResult<usize> {
        Ok(self.cases.borrow().len())
    }

    fn is_slug_taken(&self, slug: &str, excluded_case_id: Option<&Id>) -> RepoResult<bool> {
        Ok(self
            .cases
            .borrow()
            .iter()
            .any(|c| c.slug == slug && Some(&c.id) != excluded_case_id))
    }

    fn count_cases_created_between(&self, since: Timestamp, until: Timestamp) -> RepoResult<usize> {
        Ok(self
            .cases
            .borrow()
            .iter()
            .filter(|c| c.created_at >= since && c.created_at < until)
            .count())
    }

    fn count_cases_dated_between(&self, since: Timestamp, until: Timestamp) -> RepoResult<usize> {
        Ok(self
            .cases
            .borrow()
            .iter()
            .filter(|c| c.date >= since && c.date < until)
            .count())
    }

    fn count_cases_updated_since(&self, since: Timestamp) -> RepoResult<usize> {
        Ok(self
            .cases
            .borrow()
            .iter()
            .filter(|c| c.updated_at >= since)
            .count())
    }
}

impl CaseRevisionRepo for MockDb {
    fn create_case_revision(&self, revision: &CaseRevision) -> RepoResult<()> {
        if self.revisions.borrow().iter().any(|r| r.id == revision.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.revisions.borrow_mut().push(revision.clone());
        Ok(())
    }

    fn revisions_of_case(&self, case_id: &Id) -> RepoResult<Vec<CaseRevision>> {
        let mut revisions: Vec<_> = self
            .revisions
            .borrow()
            .iter()
            .filter(|r| &r.case_id == case_id)
            .cloned()
            .collect();
        revisions.sort_by_key(|r| r.created.at);
        Ok(revisions)
    }

    fn count_update_revisions_between(
        &self,
        since: Timestamp,
        until: Timestamp,
    ) -> RepoResult<usize> {
        Ok(self
            .revisions
            .borrow()
            .iter()
            .filter(|r| {
                r.event == RevisionEvent::Updated && r.created.at >= since && r.created.at < until
            })
            .count())
    }
}

impl FollowRepo for MockDb {
    fn create_follow(&self, follow: &Follow) -> RepoResult<()> {
        if self
            .follows
            .borrow()
            .iter()
            .any(|f| f.follower == follow.follower && f.followable == follow.followable)
        {
            return Err(RepoError::AlreadyExists);
        }
        self.follows.borrow_mut().push(follow.clone());
        *self
            .follows_counts
            .borrow_mut()
            .entry(follow.followable.clone())
            .or_insert(0) += 1;
        Ok(())
    }

    fn delete_follow(&self, follower: &Id, followable: &Followable) -> RepoResult<()> {
        let mut follows = self.follows.borrow_mut();
        let len_before = follows.len();
        follows.retain(|f| !(&f.follower == follower && &f.followable == followable));
        if follows.len() == len_before {
            return Err(RepoError::NotFound);
        }
        if let Some(count) = self.follows_counts.borrow_mut().get_mut(followable) {
            *count = count.saturating_sub(1);
        }
        Ok(())
    }

    fn delete_follows_of(&self, followable: &Followable) -> RepoResult<usize> {
        let mut follows = self.follows.borrow_mut();
        let len_before = follows.len();
        follows.retain(|f| &f.followable != followable);
        self.follows_counts.borrow_mut().remove(followable);
        Ok(len_before - follows.len())
    }

    fn follows_count(&self, followable: &Followable) -> RepoResult<u64> {
        Ok(self
            .follows_counts
            .borrow()
            .get(followable)
            .copied()
            .unwrap_or(0))
    }

    fn count_follows(&self, followable: &Followable) -> RepoResult<u64> {
        Ok(self
            .follows
            .borrow()
            .iter()
            .filter(|f| &f.followable == followable)
            .count() as u64)
    }

    fn follower_ids_of(&self, followable: &Followable) -> RepoResult<Vec<Id>> {
        Ok(self
            .follows
            .borrow()
            .iter()
            .filter(|f| &f.followable == followable)
            .map(|f| f.follower.clone())
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self
            .users
            .borrow()
            .iter()
            .any(|u| u.id == user.id || u.email == user.email)
        {
            return Err(RepoError::AlreadyExists);
        }
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn get_user(&self, id: &Id) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl StateRepo for MockDb {
    fn create_state(&self, state: &State) -> RepoResult<()> {
        if self.states.borrow().iter().any(|s| s.id == state.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.states.borrow_mut().push(state.clone());
        Ok(())
    }

    fn get_state(&self, id: &Id) -> RepoResult<State> {
        self.states
            .borrow()
            .iter()
            .find(|s| &s.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl SubjectRepo for MockDb {
    fn create_subject(&self, subject: &Subject) -> RepoResult<()> {
        if self.subjects.borrow().iter().any(|s| s.id == subject.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.subjects.borrow_mut().push(subject.clone());
        Ok(())
    }

    fn get_subjects(&self, ids: &[&Id]) -> RepoResult<Vec<Subject>> {
        Ok(self
            .subjects
            .borrow()
            .iter()
            .filter(|s| ids.contains(&&s.id))
            .cloned()
            .collect())
    }
}
