use crate::id::*;

/// Geographic reference entity, externally owned and read-only
/// from a case's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: Id,
    pub name: String,
    pub abbreviation: String,
}
