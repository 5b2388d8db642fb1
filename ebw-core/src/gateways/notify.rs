use ebw_entities::{case::Case, email::EmailAddress, user::User};

/// Kinds of outbound notifications, used to configure which events
/// actually produce mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    CaseAdded,
    CaseUpdated,
    CaseRemoved,
    UserRegistered,
}

/// Attribution of the latest revision, shown in update notifications.
#[derive(Debug, Clone, Default)]
pub struct UpdateAttribution {
    pub editor: Option<String>,
    pub comment: Option<String>,
}

/// Outbound notifications triggered by case mutations.
///
/// Implementations deliver fire-and-forget: a failed delivery to one
/// recipient must neither block the remaining recipients nor surface
/// back into the mutation that triggered the fan-out.
pub trait NotificationGateway {
    fn case_added(&self, email_addresses: &[EmailAddress], case: &Case);
    fn case_updated(
        &self,
        email_addresses: &[EmailAddress],
        case: &Case,
        attribution: &UpdateAttribution,
    );
    fn case_removed(&self, email_addresses: &[EmailAddress], case: &Case);
    fn user_registered(&self, user: &User);
}
