use super::*;

use ebw_core::gateways::notify::NotificationGateway;

pub fn register_user(
    connections: &db::Connections,
    notify: &dyn NotificationGateway,
    new_user: usecases::NewUser,
) -> Result<User> {
    let user = connections
        .exclusive()
        .transaction(|conn| usecases::create_new_user(conn, new_user))?;

    // The welcome mail goes out after the commit. A failed dispatch
    // must not undo the registration.
    notify.user_registered(&user);

    Ok(user)
}
