//! Domain definitions.

pub mod apartment;
pub mod city;
pub mod listing;

pub use self::{apartment::Apartment, city::City, listing::Listing};
