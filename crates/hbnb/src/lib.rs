//! The shared library of the HBnB web client.
//!
//! Everything the browser pages do that is not drawing lives here: the API
//! client, the cookie-backed session, page-mode selection and the page
//! controllers, plus the data and view types they exchange with the
//! frontend.

pub mod api;
pub mod config;
pub mod controllers;
pub mod data;
pub mod errors;
pub mod filter;
pub mod host;
pub mod id;
pub mod log;
pub mod macros;
pub mod page;
pub mod places;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use serde;
pub use serde_json;
pub use tracing;
