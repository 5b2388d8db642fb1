use super::*;

/// Other geocoded cases around the given one, closest first.
pub fn nearby_cases(
    connections: &db::Connections,
    case_id: &Id,
    radius: Option<Distance>,
) -> Result<Vec<(Case, Distance)>> {
    let radius = radius.unwrap_or(usecases::DEFAULT_NEARBY_RADIUS);
    Ok(usecases::nearby_cases(
        &connections.shared(),
        case_id,
        radius,
    )?)
}
