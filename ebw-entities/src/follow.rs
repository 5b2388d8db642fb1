use crate::{id::*, time::*};

/// The entities a user can follow, referenced by (kind, id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Followable {
    Case(Id),
    User(Id),
}

impl Followable {
    pub const fn id(&self) -> &Id {
        match self {
            Self::Case(id) | Self::User(id) => id,
        }
    }
}

/// A user's subscription to notifications about a followable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub id: Id,
    pub follower: Id,
    pub followable: Followable,
    pub created_at: Timestamp,
}
