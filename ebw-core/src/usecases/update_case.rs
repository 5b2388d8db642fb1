use super::{
    create_case::resolve_case_refs,
    derive_case_slug::derive_case_slug,
    prelude::*,
    tracked_changes::{changed_fields, revision_comment},
};
use crate::util::validate::{mandatory_case_fields, CaseInvalidation, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdateCase {
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

impl UpdateCase {
    /// Whether applying this update would touch any of the fields the
    /// geocoder depends on. Callers use this to decide if the address
    /// has to be resolved again.
    pub fn changes_address_of(&self, case: &Case) -> bool {
        let address = &case.location.address;
        self.street != address.street
            || self.city != address.city
            || self.zip != address.zip
            || self.state_id != case.state_id
    }
}

impl Validate for UpdateCase {
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

/// A validated update together with its tracked-field diff,
/// ready to be stored.
#[derive(Debug, Clone)]
pub struct StorableUpdate {
    case: Case,
    changes: Vec<FieldChange>,
    updated_by: Option<Id>,
}

/// Computes the updated case against a freshly-read prior state.
/// Must run inside the same transaction that stores the result so
/// that no concurrent writer can invalidate the diff.
pub fn prepare_updated_case<R>(
    repo: &R,
    id: &Id,
    update: UpdateCase,
    pos: Option<MapPoint>,
    updated_by: Option<&Id>,
) -> Result<StorableUpdate>
where
    R: CaseRepo + StateRepo + SubjectRepo,
{
    update.validate()?;
    let prev = repo.get_case(id)?;
    let UpdateCase {
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
    } = update;
    let date = date.ok_or(Error::Date)?;
    let state = resolve_case_refs(repo, &state_id, &subject_ids)?;
    // The slug is regenerated only when the title changed.
    let slug = if title != prev.title {
        derive_case_slug(repo, &title, city.as_deref(), Some(id))?
    } else {
        prev.slug.clone()
    };
    let next = Case {
        id: prev.id.clone(),
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
        created_at: prev.created_at,
        updated_at: prev.updated_at,
    };
    let changes = changed_fields(&prev, &next);
    Ok(StorableUpdate {
        case: next,
        changes,
        updated_by: updated_by.cloned(),
    })
}

/// Writes the updated case and, if any tracked field changed, exactly
/// one `Updated` revision. Both writes belong into the same transaction.
pub fn store_updated_case<R>(repo: &R, storable: StorableUpdate) -> Result<(Case, Option<CaseRevision>)>
where
    R: CaseRepo + CaseRevisionRepo,
{
    let StorableUpdate {
        mut case,
        changes,
        updated_by,
    } = storable;
    if changes.is_empty() {
        // Untracked fields (summary, coordinates) still persist, but
        // the update neither bumps `updated_at` nor yields a revision.
        repo.update_case(&case)?;
        return Ok((case, None));
    }
    case.updated_at = Timestamp::now();
    repo.update_case(&case)?;
    let revision = CaseRevision {
        id: Id::new(),
        case_id: case.id.clone(),
        event: RevisionEvent::Updated,
        changes,
        created: Activity {
            at: case.updated_at,
            by: updated_by,
        },
        comment: revision_comment(&case.summary),
    };
    repo.create_case_revision(&revision)?;
    Ok((case, Some(revision)))
}
