use crate::id::*;

/// A person a case report is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: Id,
    pub name: String,
}
