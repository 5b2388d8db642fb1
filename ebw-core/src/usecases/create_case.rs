use super::{
    derive_case_slug::derive_case_slug,
    prelude::*,
    tracked_changes::{full_snapshot, revision_comment},
};
use crate::util::validate::{mandatory_case_fields, CaseInvalidation, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewCase {
    pub title            : String,
    pub overview         : String,
    pub summary          : String,
    pub date             : Option<Timestamp>,
    pub street           : Option<String>,
    pub city             : Option<String>,
    pub zip              : Option<String>,
    pub state_id         : Id,
    pub subject_ids      : Vec<Id>,
    pub litigation       : Option<String>,
    pub community_action : Option<String>,
    pub avatar_url       : Option<String>,
    pub video_url        : Option<String>,
}

impl Validate for NewCase {
    type Invalidation = CaseInvalidation;

    fn validate(&self) -> std::result::Result<(), Self::Invalidation> {
        if self.date.is_none() {
            return Err(CaseInvalidation::Date);
        }
        mandatory_case_fields(
            &self.title,
            &self.overview,
            &self.summary,
            &self.state_id,
            &self.subject_ids,
        )
    }
}

/// A validated case that is ready to be stored.
#[derive(Debug, Clone)]
pub struct Storable {
    case: Case,
    created_by: Option<Id>,
}

/// Checks that the referenced state and subjects exist and returns the
/// state. Callers run this before consulting the geocoder, so that an
/// invalid payload never reaches an external service.
pub fn resolve_case_refs<R>(repo: &R, state_id: &Id, subject_ids: &[Id]) -> Result<State>
where
    R: StateRepo + SubjectRepo,
{
    let state = repo.get_state(state_id).map_err(|err| match err {
        RepoError::NotFound => Error::StateRef,
        err => Error::Repo(err),
    })?;
    let ids: Vec<_> = subject_ids.iter().collect();
    if repo.get_subjects(&ids)?.len() != subject_ids.len() {
        return Err(Error::SubjectRef);
    }
    Ok(state)
}

pub fn prepare_new_case<R>(
    repo: &R,
    new_case: NewCase,
    pos: Option<MapPoint>,
    created_by: Option<&Id>,
) -> Result<Storable>
where
    R: CaseRepo + StateRepo + SubjectRepo,
{
    new_case.validate()?;
    let NewCase {
        title,
        overview,
        summary,
        date,
        street,
        city,
        zip,
        state_id,
        subject_ids,
        litigation,
        community_action,
        avatar_url,
        video_url,
    } = new_case;
    let date = date.ok_or(Error::Date)?;
    let state = resolve_case_refs(repo, &state_id, &subject_ids)?;
    let slug = derive_case_slug(repo, &title, city.as_deref(), None)?;
    let now = Timestamp::now();
    let case = Case {
        id: Id::new(),
        slug,
        title,
        overview,
        summary,
        date,
        location: Location {
            pos,
            address: Address {
                street,
                zip,
                city,
                state: Some(state.name),
            },
        },
        state_id,
        subject_ids,
        litigation,
        community_action,
        avatar_url,
        video_url,
        created_at: now,
        updated_at: now,
    };
    Ok(Storable {
        case,
        created_by: created_by.cloned(),
    })
}

/// Writes the case together with its initial revision. Both writes
/// belong into the same transaction.
pub fn store_new_case<R>(repo: &R, storable: Storable) -> Result<(Case, CaseRevision)>
where
    R: CaseRepo + CaseRevisionRepo,
{
    let Storable { case, created_by } = storable;
    repo.create_case(&case)?;
    let revision = CaseRevision {
        id: Id::new(),
        case_id: case.id.clone(),
        event: RevisionEvent::Created,
        changes: full_snapshot(&case),
        created: Activity {
            at: case.created_at,
            by: created_by,
        },
        comment: revision_comment(&case.summary),
    };
    repo.create_case_revision(&revision)?;
    Ok((case, revision))
}
