use super::*;

pub use usecases::EngagementMetrics;

/// Dashboard metrics over the rolling 30-day windows ending now.
pub fn case_metrics(connections: &db::Connections) -> Result<EngagementMetrics> {
    Ok(usecases::engagement_metrics(
        &connections.shared(),
        Timestamp::now(),
    )?)
}
