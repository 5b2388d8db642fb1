use std::collections::{BTreeMap, HashMap};

use ebw_core::{entities::*, repositories::Error};

type Result<T> = std::result::Result<T, Error>;

/// The actual data, kept in plain collections.
///
/// Reads take `&self`, writes `&mut self`. Trait plumbing and interior
/// mutability live in the connection wrappers, not here.
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryStorage {
    cases: BTreeMap<Id, Case>,
    revisions: Vec<CaseRevision>,
    follows: Vec<Follow>,
    follows_counts: HashMap<Followable, u64>,
    users: BTreeMap<Id, User>,
    states: BTreeMap<Id, State>,
    subjects: BTreeMap<Id, Subject>,
}

impl MemoryStorage {
    pub fn create_case(&mut self, case: &Case) -> Result<()> {
        if self.cases.contains_key(&case.id) {
            return Err(Error::AlreadyExists);
        }
        self.cases.insert(case.id.clone(), case.clone());
        Ok(())
    }

    pub fn update_case(&mut self, case: &Case) -> Result<()> {
        let stored = self.cases.get_mut(&case.id).ok_or(Error::NotFound)?;
        *stored = case.clone();
        Ok(())
    }

    pub fn delete_case(&mut self, id: &Id) -> Result<()> {
        self.cases.remove(id).map(|_| ()).ok_or(Error::NotFound)
    }

    pub fn get_case(&self, id: &Id) -> Result<Case> {
        self.cases.get(id).cloned().ok_or(Error::NotFound)
    }

    pub fn all_cases(&self) -> Result<Vec<Case>> {
        Ok(self.cases.values().cloned().collect())
    }

    pub fn count_cases(&self) -> Result<usize> {
        Ok(self.cases.len())
    }

    pub fn is_slug_taken(&self, slug: &str, excluded_case_id: Option<&Id>) -> Result<bool> {
        Ok(self
            .cases
            .values()
            .any(|c| c.slug == slug && Some(&c.id) != excluded_case_id))
    }

    pub fn count_cases_created_between(&self, since: Timestamp, until: Timestamp) -> Result<usize> {
        Ok(self
            .cases
            .values()
            .filter(|c| c.created_at >= since && c.created_at < until)
            .count())
    }

    pub fn count_cases_dated_between(&self, since: Timestamp, until: Timestamp) -> Result<usize> {
        Ok(self
            .cases
            .values()
            .filter(|c| c.date >= since && c.date < until)
            .count())
    }

    pub fn count_cases_updated_since(&self, since: Timestamp) -> Result<usize> {
        Ok(self
            .cases
            .values()
            .filter(|c| c.updated_at >= since)
            .count())
    }

    pub fn create_case_revision(&mut self, revision: &CaseRevision) -> Result<()> {
        if self.revisions.iter().any(|r| r.id == revision.id) {
            return Err(Error::AlreadyExists);
        }
        self.revisions.push(revision.clone());
        Ok(())
    }

    pub fn revisions_of_case(&self, case_id: &Id) -> Result<Vec<CaseRevision>> {
        let mut revisions: Vec<_> = self
            .revisions
            .iter()
            .filter(|r| &r.case_id == case_id)
            .cloned()
            .collect();
        revisions.sort_by_key(|r| r.created.at);
        Ok(revisions)
    }

    pub fn count_update_revisions_between(
        &self,
        since: Timestamp,
        until: Timestamp,
    ) -> Result<usize> {
        Ok(self
            .revisions
            .iter()
            .filter(|r| {
                r.event == RevisionEvent::Updated && r.created.at >= since && r.created.at < until
            })
            .count())
    }

    pub fn create_follow(&mut self, follow: &Follow) -> Result<()> {
        if self
            .follows
            .iter()
            .any(|f| f.follower == follow.follower && f.followable == follow.followable)
        {
            return Err(Error::AlreadyExists);
        }
        self.follows.push(follow.clone());
        *self
            .follows_counts
            .entry(follow.followable.clone())
            .or_insert(0) += 1;
        Ok(())
    }

    pub fn delete_follow(&mut self, follower: &Id, followable: &Followable) -> Result<()> {
        let len_before = self.follows.len();
        self.follows
            .retain(|f| !(&f.follower == follower && &f.followable == followable));
        if self.follows.len() == len_before {
            return Err(Error::NotFound);
        }
        if let Some(count) = self.follows_counts.get_mut(followable) {
            *count = count.saturating_sub(1);
        }
        Ok(())
    }

    pub fn delete_follows_of(&mut self, followable: &Followable) -> Result<usize> {
        let len_before = self.follows.len();
        self.follows.retain(|f| &f.followable != followable);
        self.follows_counts.remove(followable);
        Ok(len_before - self.follows.len())
    }

    pub fn follows_count(&self, followable: &Followable) -> Result<u64> {
        Ok(self.follows_counts.get(followable).copied().unwrap_or(0))
    }

    pub fn count_follows(&self, followable: &Followable) -> Result<u64> {
        Ok(self
            .follows
            .iter()
            .filter(|f| &f.followable == followable)
            .count() as u64)
    }

    pub fn follower_ids_of(&self, followable: &Followable) -> Result<Vec<Id>> {
        Ok(self
            .follows
            .iter()
            .filter(|f| &f.followable == followable)
            .map(|f| f.follower.clone())
            .collect())
    }

    pub fn create_user(&mut self, user: &User) -> Result<()> {
        if self.users.contains_key(&user.id)
            || self.users.values().any(|u| u.email == user.email)
        {
            return Err(Error::AlreadyExists);
        }
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    pub fn get_user(&self, id: &Id) -> Result<User> {
        self.users.get(id).cloned().ok_or(Error::NotFound)
    }

    pub fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        Ok(self.users.values().find(|u| &u.email == email).cloned())
    }

    pub fn count_users(&self) -> Result<usize> {
        Ok(self.users.len())
    }

    pub fn create_state(&mut self, state: &State) -> Result<()> {
        if self.states.contains_key(&state.id) {
            return Err(Error::AlreadyExists);
        }
        self.states.insert(state.id.clone(), state.clone());
        Ok(())
    }

    pub fn get_state(&self, id: &Id) -> Result<State> {
        self.states.get(id).cloned().ok_or(Error::NotFound)
    }

    pub fn create_subject(&mut self, subject: &Subject) -> Result<()> {
        if self.subjects.contains_key(&subject.id) {
            return Err(Error::AlreadyExists);
        }
        self.subjects.insert(subject.id.clone(), subject.clone());
        Ok(())
    }

    pub fn get_subjects(&self, ids: &[&Id]) -> Result<Vec<Subject>> {
        Ok(self
            .subjects
            .values()
            .filter(|s| ids.contains(&&s.id))
            .cloned()
            .collect())
    }
}
