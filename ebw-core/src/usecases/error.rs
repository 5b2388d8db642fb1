use thiserror::Error;

use crate::{repositories, util::validate::CaseInvalidation};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The overview is invalid")]
    Overview,
    #[error("The summary is invalid")]
    Summary,
    #[error("The date is missing")]
    Date,
    #[error("Invalid or unknown state reference")]
    StateRef,
    #[error("A case needs at least one subject")]
    Subjects,
    #[error("Unknown subject reference")]
    SubjectRef,
    #[error("Invalid email address")]
    Email,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The case is already being followed")]
    AlreadyFollowing,
    #[error("The case is not being followed")]
    NotFollowing,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<CaseInvalidation> for Error {
    fn from(err: CaseInvalidation) -> Self {
        match err {
            CaseInvalidation::Title => Self::Title,
            CaseInvalidation::Overview => Self::Overview,
            CaseInvalidation::Summary => Self::Summary,
            CaseInvalidation::Date => Self::Date,
            CaseInvalidation::StateRef => Self::StateRef,
            CaseInvalidation::Subjects => Self::Subjects,
        }
    }
}

impl From<ebw_entities::email::EmailAddressParseError> for Error {
    fn from(_: ebw_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}
