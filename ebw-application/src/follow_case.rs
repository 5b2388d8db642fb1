use super::*;

pub fn follow_case(
    connections: &db::Connections,
    follower: &Id,
    case_id: &Id,
) -> Result<Follow> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::follow_case(conn, follower, case_id))?)
}

pub fn unfollow_case(connections: &db::Connections, follower: &Id, case_id: &Id) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::unfollow_case(conn, follower, case_id))?)
}

pub fn case_followers_count(connections: &db::Connections, case_id: &Id) -> Result<u64> {
    Ok(connections
        .shared()
        .follows_count(&Followable::Case(case_id.clone()))?)
}
