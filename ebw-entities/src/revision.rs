use std::fmt;

use crate::{activity::*, id::*};

/// What kind of mutation produced a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionEvent {
    Created,
    Updated,
}

/// The case attributes whose changes are recorded in revisions.
///
/// The summary is deliberately absent. It never triggers a revision by
/// content but supplies the free-text comment of every revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedField {
    Title,
    Overview,
    Date,
    Street,
    City,
    Zip,
    StateRef,
    Slug,
    AvatarUrl,
    VideoUrl,
    Litigation,
    CommunityAction,
}

impl TrackedField {
    pub const fn as_str(self) -> &'static str {
        use TrackedField as F;
        match self {
            F::Title => "title",
            F::Overview => "overview",
            F::Date => "date",
            F::Street => "street",
            F::City => "city",
            F::Zip => "zip",
            F::StateRef => "state_ref",
            F::Slug => "slug",
            F::AvatarUrl => "avatar_url",
            F::VideoUrl => "video_url",
            F::Litigation => "litigation",
            F::CommunityAction => "community_action",
        }
    }
}

impl fmt::Display for TrackedField {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// One entry of a revision's field snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: TrackedField,
    pub previous: Option<String>,
    pub current: Option<String>,
}

/// Immutable audit-log snapshot of a case mutation.
///
/// Owned by the case, append-only, totally ordered per case
/// by `created.at`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRevision {
    pub id: Id,
    pub case_id: Id,
    pub event: RevisionEvent,
    pub changes: Vec<FieldChange>,
    pub created: Activity,
    pub comment: Option<String>,
}
