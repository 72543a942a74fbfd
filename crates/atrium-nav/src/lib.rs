//! # Atrium Nav
//!
//! Route-transition loading indicator and scroll reset.
//!
//! [`NavigationCoordinator`] is an explicitly owned state holder: the UI
//! reports link activations and route changes to it and observes the
//! loading flag through [`NavigationCoordinator::subscribe`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod coordinator;
pub mod route;
pub mod scroll;

pub use coordinator::*;
pub use route::*;
pub use scroll::*;
