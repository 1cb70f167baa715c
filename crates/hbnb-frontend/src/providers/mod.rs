//! Shared services for the pages.

pub mod api;
