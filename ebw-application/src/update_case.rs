use super::*;

use ebw_core::{
    gateways::{
        geocode::GeoCodingGateway,
        notify::{NotificationGateway, UpdateAttribution},
    },
    util::validate::Validate,
};

pub fn update_case(
    connections: &db::Connections,
    geocoder: &dyn GeoCodingGateway,
    notify: &dyn NotificationGateway,
    id: &Id,
    update: usecases::UpdateCase,
    updated_by: Option<&Id>,
) -> Result<Case> {
    // Invalid payloads are rejected before the geocoder is consulted.
    update.validate().map_err(usecases::Error::from)?;

    // Coordinates are only re-resolved when the update touches the
    // address. Unrelated edits keep the previous position.
    let pos = {
        let db = connections.shared();
        let prev = db.get_case(id)?;
        let state = usecases::resolve_case_refs(&db, &update.state_id, &update.subject_ids)?;
        if update.changes_address_of(&prev) {
            let address = Address {
                street: update.street.clone(),
                zip: update.zip.clone(),
                city: update.city.clone(),
                state: Some(state.name),
            };
            geocoder
                .resolve_address_lat_lng(&address)
                .and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng))
        } else {
            prev.pos()
        }
    };

    let (case, revision) = connections.exclusive().transaction(|conn| {
        let storable = usecases::prepare_updated_case(conn, id, update, pos, updated_by)?;
        usecases::store_updated_case(conn, storable).map_err(|err| {
            warn!("Failed to store updated case: {}", err);
            err
        })
    })?;

    // Only edits that produced a revision are worth a notification.
    if revision.is_some() {
        if let Err(err) = notify_case_updated(connections, notify, &case) {
            error!(
                "Failed to send notifications for updated case {}: {}",
                case.id, err
            );
        }
    }

    Ok(case)
}

fn notify_case_updated(
    connections: &db::Connections,
    notify: &dyn NotificationGateway,
    case: &Case,
) -> Result<()> {
    let (email_addresses, attribution) = {
        let db = connections.shared();
        let email_addresses: Vec<_> =
            usecases::followers(&db, &Followable::Case(case.id.clone()))?
                .into_iter()
                .map(|user| user.email)
                .collect();
        let attribution = match db.latest_revision_of_case(&case.id)? {
            Some(revision) => UpdateAttribution {
                editor: revision
                    .created
                    .by
                    .and_then(|editor_id| db.get_user(&editor_id).ok())
                    .map(|user| user.display_name),
                comment: revision.comment,
            },
            None => UpdateAttribution::default(),
        };
        (email_addresses, attribution)
    };
    notify.case_updated(&email_addresses, case, &attribution);
    Ok(())
}
