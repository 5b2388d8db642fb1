use askama::Template;
use time::{format_description::FormatItem, macros::format_description};

use ebw_core::{entities::*, gateways::notify::UpdateAttribution};

const DATE_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

const CASE_URL_PREFIX: &str = "https://endbiaswiki.org/cases/";

fn address_line(address: &Address) -> String {
    let Address {
        ref street,
        ref zip,
        ref city,
        ref state,
    } = address;
    [
        street.as_deref().unwrap_or(""),
        &[zip.as_deref().unwrap_or(""), city.as_deref().unwrap_or("")].join(" "),
        state.as_deref().unwrap_or(""),
    ]
    .join(", ")
}

fn format_date(date: Timestamp) -> String {
    date.into_inner().format(&DATE_FORMAT).unwrap_or_default()
}

#[derive(Template)]
#[template(path = "case_created/subject.txt")]
struct CaseCreatedSubjectTemplate<'a> {
    title: &'a str,
}

#[derive(Template)]
#[template(path = "case_created/body.txt")]
struct CaseCreatedBodyTemplate<'a> {
    title: &'a str,
    summary: &'a str,
    date: &'a str,
    address_line: &'a str,
    url: &'a str,
}

pub fn case_created_email(case: &Case) -> EmailContent {
    let subject = CaseCreatedSubjectTemplate { title: &case.title }
        .render()
        .unwrap();
    let body = CaseCreatedBodyTemplate {
        title: &case.title,
        summary: &case.summary,
        date: &format_date(case.date),
        address_line: &address_line(&case.location.address),
        url: &format!("{CASE_URL_PREFIX}{}", case.slug),
    }
    .render()
    .unwrap();
    EmailContent { subject, body }
}

#[derive(Template)]
#[template(path = "case_updated/subject.txt")]
struct CaseUpdatedSubjectTemplate<'a> {
    title: &'a str,
}

#[derive(Template)]
#[template(path = "case_updated/body.txt")]
struct CaseUpdatedBodyTemplate<'a> {
    title: &'a str,
    summary: &'a str,
    editor: &'a str,
    comment: &'a str,
    url: &'a str,
}

pub fn case_updated_email(case: &Case, attribution: &UpdateAttribution) -> EmailContent {
    let subject = CaseUpdatedSubjectTemplate { title: &case.title }
        .render()
        .unwrap();
    let body = CaseUpdatedBodyTemplate {
        title: &case.title,
        summary: &case.summary,
        editor: attribution.editor.as_deref().unwrap_or(""),
        comment: attribution.comment.as_deref().unwrap_or(""),
        url: &format!("{CASE_URL_PREFIX}{}", case.slug),
    }
    .render()
    .unwrap();
    EmailContent { subject, body }
}

#[derive(Template)]
#[template(path = "case_removed/subject.txt")]
struct CaseRemovedSubjectTemplate<'a> {
    title: &'a str,
}

#[derive(Template)]
#[template(path = "case_removed/body.txt")]
struct CaseRemovedBodyTemplate<'a> {
    title: &'a str,
    summary: &'a str,
}

pub fn case_removed_email(case: &Case) -> EmailContent {
    let subject = CaseRemovedSubjectTemplate { title: &case.title }
        .render()
        .unwrap();
    let body = CaseRemovedBodyTemplate {
        title: &case.title,
        summary: &case.summary,
    }
    .render()
    .unwrap();
    EmailContent { subject, body }
}

#[derive(Template)]
#[template(path = "user_registered/subject.txt")]
struct UserRegisteredSubjectTemplate;

#[derive(Template)]
#[template(path = "user_registered/body.txt")]
struct UserRegisteredBodyTemplate<'a> {
    display_name: &'a str,
}

pub fn user_registered_email(user: &User) -> EmailContent {
    let subject = UserRegisteredSubjectTemplate.render().unwrap();
    let body = UserRegisteredBodyTemplate {
        display_name: &user.display_name,
    }
    .render()
    .unwrap();
    EmailContent { subject, body }
}
