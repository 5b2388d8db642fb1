use super::prelude::*;
use crate::error::BError;

#[test]
fn registration_sends_a_welcome_mail() {
    let fixture = BackendFixture::new();
    let user_id = fixture.create_user("new@example.org", "Jo Newcomer");

    let registered = fixture.notify.registered.lock().unwrap();
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].id, user_id);
    assert_eq!(registered[0].display_name, "Jo Newcomer");
}

#[test]
fn duplicate_email_is_rejected_without_a_welcome_mail() {
    let fixture = BackendFixture::new();
    fixture.create_user("new@example.org", "First");

    let result = flows::register_user(
        &fixture.db_connections,
        &fixture.notify,
        usecases::NewUser {
            email: "new@example.org".into(),
            display_name: "Second".into(),
        },
    );

    assert!(matches!(
        result,
        Err(AppError::Business(BError::Parameter(
            usecases::Error::UserExists
        )))
    ));
    assert_eq!(fixture.notify.registered.lock().unwrap().len(), 1);
    assert_eq!(fixture.db_connections.shared().count_users().unwrap(), 1);
}
