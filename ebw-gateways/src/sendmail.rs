#[cfg(not(test))]
use std::{
    io::prelude::*,
    process::{Command, Stdio},
};
use std::{
    io::{Error, ErrorKind, Result},
    thread,
};

use time::{format_description::well_known::Rfc2822, OffsetDateTime};

use ebw_core::{entities::*, gateways::email::EmailGateway};

/// Delivers mail through the local `sendmail` binary.
#[derive(Debug, Clone)]
pub struct Sendmail {
    from: EmailAddress,
}

impl Sendmail {
    pub fn new(from: EmailAddress) -> Self {
        Self { from }
    }

    fn send(&self, mail: String) {
        thread::spawn(move || {
            if let Err(err) = send_raw(&mail) {
                warn!("Could not send e-mail: {}", err);
            }
        });
    }
}

#[cfg(not(test))]
fn send_raw(mail: &str) -> Result<()> {
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .ok_or_else(|| Error::new(ErrorKind::Other, "Could not get stdin"))?
        .write_all(mail.as_bytes())?;
    child.wait_with_output()?;
    Ok(())
}

/// Don't actually send emails while running the tests.
#[cfg(test)]
fn send_raw(mail: &str) -> Result<()> {
    debug!("Would send e-mail: {}", mail);
    Ok(())
}

impl EmailGateway for Sendmail {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        debug!("Sending e-mails to: {:?}", recipients);
        for to in recipients {
            match compose(&self.from, to, &email.subject, &email.body) {
                Ok(mail) => {
                    self.send(mail);
                }
                Err(err) => {
                    warn!("Failed to compose e-mail: {}", err);
                }
            }
        }
    }
}

const LINE_BREAK: &str = "\r\n";

/// RFC 2047 encoded word for non-ASCII header content.
fn encode_subject_header(subject: &str) -> String {
    if subject.is_ascii() {
        return format!("Subject:{subject}");
    }
    format!(
        "Subject:=?UTF-8?Q?{}?=",
        quoted_printable::encode_to_str(subject.as_bytes()).replace(LINE_BREAK, "")
    )
}

fn compose(from: &EmailAddress, to: &EmailAddress, subject: &str, body: &str) -> Result<String> {
    let date = OffsetDateTime::now_utc()
        .format(&Rfc2822)
        .map_err(|err| Error::new(ErrorKind::Other, err))?;
    let mail = format!(
        "Date:{date}\r\n\
         From:{from}\r\n\
         To:{to}\r\n\
         {subject_header}\r\n\
         MIME-Version:1.0\r\n\
         Content-Type:text/plain;charset=utf-8\r\n\r\n\
         {body}",
        subject_header = encode_subject_header(subject),
    );
    debug!("composed email: {}", &mail);
    Ok(mail)
}
