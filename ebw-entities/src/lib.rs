#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # ebw-entities
//!
//! Reusable, agnostic domain entities for EndBiasWiki.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod activity;
pub mod address;
pub mod case;
pub mod email;
pub mod follow;
pub mod geo;
pub mod id;
pub mod location;
pub mod revision;
pub mod state;
pub mod subject;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
