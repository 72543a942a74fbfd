//! # Atrium Prefs
//!
//! Locale and appearance preferences, kept identical across durable
//! storage, cookies and the live document.
//!
//! The surfaces are capability traits ([`DurableStorage`], [`CookieJar`],
//! [`DocumentState`], [`ColorSchemeSource`]); [`MemorySurfaces`] implements
//! all of them in memory.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod appearance;
pub mod error;
pub mod memory;
pub mod record;
pub mod surfaces;
pub mod synchronizer;

pub use appearance::*;
pub use error::*;
pub use memory::*;
pub use record::*;
pub use surfaces::*;
pub use synchronizer::*;
