use super::prelude::*;
use crate::error::BError;

#[test]
fn follow_and_unfollow_keep_the_counter_in_sync() {
    let fixture = BackendFixture::new();
    let follower_a = fixture.create_user("a@example.org", "A");
    let follower_b = fixture.create_user("b@example.org", "B");
    let case = fixture.create_case(None);

    flows::follow_case(&fixture.db_connections, &follower_a, &case.id).unwrap();
    flows::follow_case(&fixture.db_connections, &follower_b, &case.id).unwrap();
    assert_eq!(
        flows::case_followers_count(&fixture.db_connections, &case.id).unwrap(),
        2
    );

    flows::unfollow_case(&fixture.db_connections, &follower_a, &case.id).unwrap();
    assert_eq!(
        flows::case_followers_count(&fixture.db_connections, &case.id).unwrap(),
        1
    );

    let db = fixture.db_connections.shared();
    let followable = Followable::Case(case.id.clone());
    assert_eq!(
        db.follows_count(&followable).unwrap(),
        db.count_follows(&followable).unwrap()
    );
}

#[test]
fn duplicate_follow_is_rejected_and_changes_nothing() {
    let fixture = BackendFixture::new();
    let follower = fixture.create_user("a@example.org", "A");
    let case = fixture.create_case(None);

    flows::follow_case(&fixture.db_connections, &follower, &case.id).unwrap();
    let result = flows::follow_case(&fixture.db_connections, &follower, &case.id);
    assert!(matches!(
        result,
        Err(AppError::Business(BError::Parameter(
            usecases::Error::AlreadyFollowing
        )))
    ));
    assert_eq!(
        flows::case_followers_count(&fixture.db_connections, &case.id).unwrap(),
        1
    );
}

#[test]
fn following_requires_an_existing_user() {
    let fixture = BackendFixture::new();
    let case = fixture.create_case(None);
    let result = flows::follow_case(&fixture.db_connections, &Id::from("ghost"), &case.id);
    assert!(matches!(
        result,
        Err(AppError::Business(BError::Parameter(
            usecases::Error::UserDoesNotExist
        )))
    ));
}

#[test]
fn unfollow_without_follow_is_rejected() {
    let fixture = BackendFixture::new();
    let follower = fixture.create_user("a@example.org", "A");
    let case = fixture.create_case(None);
    let result = flows::unfollow_case(&fixture.db_connections, &follower, &case.id);
    assert!(matches!(
        result,
        Err(AppError::Business(BError::Parameter(
            usecases::Error::NotFollowing
        )))
    ));
}
