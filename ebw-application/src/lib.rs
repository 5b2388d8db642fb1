//! # ebw-application
//!
//! High-level flows that combine the use cases with the database
//! connections and the outbound gateways. Each flow owns its
//! transaction boundaries and dispatches notifications outside of
//! them.

#[macro_use]
extern crate log;

mod case_metrics;
mod create_case;
mod delete_case;
mod follow_case;
mod map_cases;
mod nearby_cases;
mod register_user;
mod update_case;

pub mod prelude {
    pub use super::{
        case_metrics::*, create_case::*, delete_case::*, follow_case::*, map_cases::*,
        nearby_cases::*, register_user::*, update_case::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ebw_core::{entities::*, repositories::*, usecases};

pub(crate) mod db {
    pub use ebw_db_memory::Connections;
}

#[cfg(test)]
pub(crate) mod tests;
