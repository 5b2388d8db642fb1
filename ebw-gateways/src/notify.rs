use std::{collections::HashSet, sync::Arc};

use ebw_core::{
    entities::*,
    gateways::{
        email::EmailGateway,
        notify::{NotificationGateway, NotificationType, UpdateAttribution},
    },
};

use crate::user_communication;

/// Fans case events out as e-mails through the configured gateway.
/// Events whose kind is not in `notify_on` are silently dropped.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    notify_on: HashSet<NotificationType>,
}

impl Notify {
    pub fn new<G>(gw: G, notify_on: HashSet<NotificationType>) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
            notify_on,
        }
    }

    fn skip(&self, kind: NotificationType) -> bool {
        !self.notify_on.contains(&kind)
    }
}

impl NotificationGateway for Notify {
    fn case_added(&self, email_addresses: &[EmailAddress], case: &Case) {
        if self.skip(NotificationType::CaseAdded) {
            return;
        }
        let content = user_communication::case_created_email(case);
        info!(
            "Sending e-mails to {} recipients after new case {} added",
            email_addresses.len(),
            case.id,
        );
        self.email_gw.compose_and_send(email_addresses, &content);
    }

    fn case_updated(
        &self,
        email_addresses: &[EmailAddress],
        case: &Case,
        attribution: &UpdateAttribution,
    ) {
        if self.skip(NotificationType::CaseUpdated) {
            return;
        }
        let content = user_communication::case_updated_email(case, attribution);
        info!(
            "Sending e-mails to {} recipients after case {} updated",
            email_addresses.len(),
            case.id,
        );
        self.email_gw.compose_and_send(email_addresses, &content);
    }

    fn case_removed(&self, email_addresses: &[EmailAddress], case: &Case) {
        if self.skip(NotificationType::CaseRemoved) {
            return;
        }
        let content = user_communication::case_removed_email(case);
        info!(
            "Sending e-mails to {} recipients before case {} is removed",
            email_addresses.len(),
            case.id,
        );
        self.email_gw.compose_and_send(email_addresses, &content);
    }

    fn user_registered(&self, user: &User) {
        if self.skip(NotificationType::UserRegistered) {
            return;
        }
        let content = user_communication::user_registered_email(user);
        info!("Sending welcome e-mail to newly registered user {}", user.id);
        self.email_gw
            .compose_and_send(&[user.email.clone()], &content);
    }
}
