//! Renderer components for the HBnB pages.

pub mod country_filter;
pub mod header;
pub mod place_details;
pub mod places_list;

pub use country_filter::*;
pub use header::*;
pub use place_details::*;
pub use places_list::*;
