//! [`Command`] definition.

pub mod reorder_listing_images;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::reorder_listing_images::ReorderListingImages;
