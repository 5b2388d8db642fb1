//! # ebw-core
//!
//! Business logic of EndBiasWiki: repository and gateway abstractions
//! plus the use cases built on top of them. Persistence, geocoding and
//! mail transport are boundary collaborators that implement the traits
//! defined here.

pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use ebw_entities::{
        activity::*, address::*, case::*, email::*, follow::*, geo::*, id::*, location::*,
        revision::*, state::*, subject::*, time::*, user::*,
    };
}
