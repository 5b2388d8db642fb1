use crate::entities::*;

const ALL_TRACKED_FIELDS: [TrackedField; 12] = [
    TrackedField::Title,
    TrackedField::Overview,
    TrackedField::Date,
    TrackedField::Street,
    TrackedField::City,
    TrackedField::Zip,
    TrackedField::StateRef,
    TrackedField::Slug,
    TrackedField::AvatarUrl,
    TrackedField::VideoUrl,
    TrackedField::Litigation,
    TrackedField::CommunityAction,
];

fn tracked_value(case: &Case, field: TrackedField) -> Option<String> {
    use TrackedField as F;
    match field {
        F::Title => Some(case.title.clone()),
        F::Overview => Some(case.overview.clone()),
        F::Date => Some(case.date.to_string()),
        F::Street => case.location.address.street.clone(),
        F::City => case.location.address.city.clone(),
        F::Zip => case.location.address.zip.clone(),
        F::StateRef => Some(case.state_id.to_string()),
        F::Slug => Some(case.slug.clone()),
        F::AvatarUrl => case.avatar_url.clone(),
        F::VideoUrl => case.video_url.clone(),
        F::Litigation => case.litigation.clone(),
        F::CommunityAction => case.community_action.clone(),
    }
}

/// Full-field snapshot recorded with the `Created` revision.
pub fn full_snapshot(case: &Case) -> Vec<FieldChange> {
    ALL_TRACKED_FIELDS
        .into_iter()
        .map(|field| FieldChange {
            field,
            previous: None,
            current: tracked_value(case, field),
        })
        .collect()
}

/// Field-level diff between the stored state and the updated candidate.
/// An empty result means the update must not produce a revision.
pub fn changed_fields(previous: &Case, current: &Case) -> Vec<FieldChange> {
    ALL_TRACKED_FIELDS
        .into_iter()
        .filter_map(|field| {
            let previous = tracked_value(previous, field);
            let current = tracked_value(current, field);
            if previous == current {
                return None;
            }
            Some(FieldChange {
                field,
                previous,
                current,
            })
        })
        .collect()
}

/// Every revision's comment is the case's summary at save time.
pub(crate) fn revision_comment(summary: &str) -> Option<String> {
    let trimmed = summary.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
