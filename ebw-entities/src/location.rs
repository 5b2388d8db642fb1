use crate::{address::*, geo::*};

/// Where a case took place. The position is only present
/// after the address has been geocoded successfully.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub pos: Option<MapPoint>,
    pub address: Address,
}
