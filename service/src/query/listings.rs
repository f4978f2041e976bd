//! [`Query`] collection related to the multiple [`Listing`]s.

use common::{operations::By, Page};

use crate::read;
#[cfg(doc)]
use crate::{domain::Listing, Query};

use super::DatabaseQuery;

/// Queries a [`Window`]ed list of [`Listing`]s.
///
/// [`Window`]: common::Window
pub type List = DatabaseQuery<
    By<Page<read::listing::list::Node>, read::listing::list::Selector>,
>;

/// Queries total count of [`Listing`] list items matching a
/// [`read::listing::list::Filter`].
pub type TotalCount = DatabaseQuery<
    By<read::listing::list::TotalCount, read::listing::list::Filter>,
>;
