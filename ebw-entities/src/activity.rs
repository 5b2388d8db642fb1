use crate::{id::*, time::*};

/// When something happened and who did it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub at: Timestamp,
    pub by: Option<Id>,
}

impl Activity {
    pub fn now(by: Option<Id>) -> Self {
        Self {
            at: Timestamp::now(),
            by,
        }
    }
}
