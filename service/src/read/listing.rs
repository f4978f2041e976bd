//! [`Listing`]-related read definitions.

#[cfg(doc)]
use crate::domain::Listing;

pub mod list {
    //! [`Listing`] list definitions.

    use common::Window;
    use derive_more::{From, Into};
    use rust_decimal::Decimal;

    use crate::domain::{apartment, city, listing};
    #[cfg(doc)]
    use crate::domain::Listing;

    /// Node in a [`Listing`] list.
    pub type Node = listing::Id;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`city::Id`] to restrict the list to.
        pub city: Option<city::Id>,

        /// [`apartment::Id`] to restrict the list to.
        pub apartment: Option<apartment::Id>,

        /// Minimum price (inclusive).
        pub price_min: Option<Decimal>,

        /// Maximum price (inclusive).
        pub price_max: Option<Decimal>,

        /// [`listing::Title`] (or its part) to fuzzy search for.
        pub title: Option<listing::Title>,
    }

    /// Selector of a [`Listing`] list [`Window`].
    #[derive(Clone, Debug)]
    pub struct Selector {
        /// [`Window`] to select.
        pub window: Window,

        /// [`Filter`] to apply.
        pub filter: Filter,
    }

    /// Total count of [`Listing`] list items.
    #[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
    pub struct TotalCount(i32);
}
