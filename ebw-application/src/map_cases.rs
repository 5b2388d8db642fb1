use super::*;

/// All cases that carry coordinates, for the map view.
/// Cases whose address never resolved are left out.
pub fn cases_on_map(connections: &db::Connections) -> Result<Vec<Case>> {
    Ok(connections
        .shared()
        .all_cases()?
        .into_iter()
        .filter(|case| case.pos().is_some())
        .collect())
}
