use super::*;

use ebw_core::gateways::notify::NotificationGateway;

pub fn delete_case(
    connections: &db::Connections,
    notify: &dyn NotificationGateway,
    id: &Id,
) -> Result<()> {
    // Farewell mails go out before the rows disappear, while the
    // followers are still on record.
    let (case, email_addresses) = {
        let db = connections.shared();
        let case = db.get_case(id)?;
        let email_addresses: Vec<_> =
            usecases::followers(&db, &Followable::Case(case.id.clone()))?
                .into_iter()
                .map(|user| user.email)
                .collect();
        (case, email_addresses)
    };
    notify.case_removed(&email_addresses, &case);

    connections.exclusive().transaction(|conn| {
        usecases::delete_case(conn, id).map_err(|err| {
            warn!("Failed to delete case {}: {}", id, err);
            err
        })
    })?;
    Ok(())
}
