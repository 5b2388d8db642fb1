use super::*;

use ebw_core::{
    gateways::{geocode::GeoCodingGateway, notify::NotificationGateway},
    util::validate::Validate,
};

pub fn create_case(
    connections: &db::Connections,
    geocoder: &dyn GeoCodingGateway,
    notify: &dyn NotificationGateway,
    new_case: usecases::NewCase,
    created_by: Option<&Id>,
) -> Result<Case> {
    // Invalid payloads are rejected before the geocoder is consulted.
    new_case.validate().map_err(usecases::Error::from)?;
    let pos = resolve_new_case_position(connections, geocoder, &new_case)?;

    let (case, _revision) = connections.exclusive().transaction(|conn| {
        let storable = usecases::prepare_new_case(conn, new_case, pos, created_by)?;
        usecases::store_new_case(conn, storable).map_err(|err| {
            warn!("Failed to store newly created case: {}", err);
            err
        })
    })?;

    // Send subscription e-mails outside of the transaction. A failed
    // dispatch must not undo the mutation.
    if let Err(err) = notify_case_added(connections, notify, &case, created_by) {
        error!(
            "Failed to send notifications for newly created case {}: {}",
            case.id, err
        );
    }

    Ok(case)
}

fn resolve_new_case_position(
    connections: &db::Connections,
    geocoder: &dyn GeoCodingGateway,
    new_case: &usecases::NewCase,
) -> Result<Option<MapPoint>> {
    let state = usecases::resolve_case_refs(
        &connections.shared(),
        &new_case.state_id,
        &new_case.subject_ids,
    )?;
    let address = Address {
        street: new_case.street.clone(),
        zip: new_case.zip.clone(),
        city: new_case.city.clone(),
        state: Some(state.name),
    };
    Ok(geocoder
        .resolve_address_lat_lng(&address)
        .and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng)))
}

/// New cases are announced to the followers of their author.
fn notify_case_added(
    connections: &db::Connections,
    notify: &dyn NotificationGateway,
    case: &Case,
    created_by: Option<&Id>,
) -> Result<()> {
    let Some(creator) = created_by else {
        return Ok(());
    };
    let email_addresses: Vec<_> = {
        let db = connections.shared();
        usecases::followers(&db, &Followable::User(creator.clone()))?
            .into_iter()
            .map(|user| user.email)
            .collect()
    };
    notify.case_added(&email_addresses, case);
    Ok(())
}
