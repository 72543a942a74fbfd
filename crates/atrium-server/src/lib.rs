//! # Atrium Server
//!
//! HTTP edge server for the localized front end.
//!
//! Wires configuration, the translation table and the locale resolver
//! together behind an axum router.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;
pub mod server;

pub use app::*;
pub use error::*;
pub use server::*;
