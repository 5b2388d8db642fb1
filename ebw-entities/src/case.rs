use crate::{geo::*, id::*, location::*, time::*};

/// A published misconduct-case report.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub id: Id,
    pub slug: String,
    pub title: String,
    pub overview: String,
    pub summary: String,
    // When the reported incident occurred, as opposed to
    // `created_at` which is when the report was published.
    pub date: Timestamp,
    pub location: Location,
    pub state_id: Id,
    pub subject_ids: Vec<Id>,
    pub litigation: Option<String>,
    pub community_action: Option<String>,
    pub avatar_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Case {
    pub fn pos(&self) -> Option<MapPoint> {
        self.location.pos
    }
}
