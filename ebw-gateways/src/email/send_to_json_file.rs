use std::{io, path::Path};

use jfs::Store;
use serde::{Deserialize, Serialize};

use ebw_core::{entities::*, gateways::email::EmailGateway};

/// A dummy email gateway for local development and testing.
/// Every outbound mail becomes one JSON file in the given directory.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonEmail {
    to: String,
    subject: String,
    body: String,
}

impl JsonEmail {
    fn new(to: &EmailAddress, content: &EmailContent) -> Self {
        Self {
            to: to.as_str().to_owned(),
            subject: content.subject.clone(),
            body: content.body.clone(),
        }
    }
}

impl EmailGateway for SendToJsonFile {
    fn compose_and_send(&self, recipients: &[EmailAddress], content: &EmailContent) {
        for to in recipients {
            let now = Timestamp::now().into_unix_seconds();
            let key = format!("{now}-{to}");
            let email = JsonEmail::new(to, content);
            if let Err(err) = self.json_store.save_with_id(&email, &key) {
                warn!("Unable to save email in JSON file: {err}");
            }
        }
    }
}
