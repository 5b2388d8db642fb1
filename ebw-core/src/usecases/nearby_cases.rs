use std::cmp::Ordering;

use super::prelude::*;

/// Default search radius for the map view.
pub const DEFAULT_NEARBY_RADIUS: Distance = Distance::from_kilometers(50.0);

/// Other geocoded cases within `radius`, closest first.
///
/// Resilient by design: a missing case or missing coordinates yield an
/// empty list instead of an error.
pub fn nearby_cases<R>(repo: &R, case_id: &Id, radius: Distance) -> Result<Vec<(Case, Distance)>>
where
    R: CaseRepo,
{
    let Some(case) = repo.try_get_case(case_id)? else {
        return Ok(vec![]);
    };
    let Some(center) = case.pos() else {
        return Ok(vec![]);
    };
    let mut nearby: Vec<_> = repo
        .all_cases()?
        .into_iter()
        .filter(|other| other.id != case.id)
        .filter_map(|other| {
            let pos = other.pos()?;
            let distance = center.distance(&pos);
            (distance <= radius).then_some((other, distance))
        })
        .collect();
    nearby.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(nearby)
}
