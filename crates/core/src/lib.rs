//! Core types for the catalogue client
//!
//! Record and envelope types shared by every other crate, plus the
//! client-side list pipeline (filter, sort, paginate).

mod catalogue;
mod constants;
mod envelope;
mod env_config;
mod error;
mod form;
mod pipeline;
mod pipeline_tests;
mod status;

pub use catalogue::*;
pub use constants::*;
pub use env_config::*;
pub use envelope::*;
pub use error::*;
pub use form::*;
pub use pipeline::*;
pub use status::*;
