//! # Atrium Routing
//!
//! Request-time locale routing. Every path either already starts with a
//! supported locale, is an internal or static path left untouched, or is
//! redirected to the same path under a locale prefix.
//!
//! [`LocaleResolver`] makes the decision without side effects;
//! [`locale_redirect`] applies it as axum middleware.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod middleware;
pub mod resolver;

pub use middleware::*;
pub use resolver::*;
