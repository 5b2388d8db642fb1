use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseInvalidation {
    #[error("Missing title")]
    Title,
    #[error("Missing overview")]
    Overview,
    #[error("Missing summary")]
    Summary,
    #[error("Missing date")]
    Date,
    #[error("Missing state reference")]
    StateRef,
    #[error("No subjects associated")]
    Subjects,
}

pub trait Validate {
    type Invalidation;
    fn validate(&self) -> Result<(), Self::Invalidation>;
}

// Shared by the stored entity and the incoming case payloads, which
// must be rejectable before any boundary collaborator is consulted.
pub(crate) fn mandatory_case_fields(
    title: &str,
    overview: &str,
    summary: &str,
    state_id: &Id,
    subject_ids: &[Id],
) -> Result<(), CaseInvalidation> {
    if title.trim().is_empty() {
        return Err(CaseInvalidation::Title);
    }
    if overview.trim().is_empty() {
        return Err(CaseInvalidation::Overview);
    }
    if summary.trim().is_empty() {
        return Err(CaseInvalidation::Summary);
    }
    if !state_id.is_valid() {
        return Err(CaseInvalidation::StateRef);
    }
    if subject_ids.is_empty() {
        return Err(CaseInvalidation::Subjects);
    }
    Ok(())
}

impl Validate for Case {
    type Invalidation = CaseInvalidation;

    fn validate(&self) -> Result<(), Self::Invalidation> {
        mandatory_case_fields(
            &self.title,
            &self.overview,
            &self.summary,
            &self.state_id,
            &self.subject_ids,
        )
    }
}
