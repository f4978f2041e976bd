//! Filter chip related definitions.

use juniper::{graphql_object, GraphQLEnum};
use service::chips;

use crate::Context;

/// Removable token representing an active search parameter.
#[derive(Clone, Debug, derive_more::From)]
pub struct Chip(chips::Chip);

/// Removable token representing an active search parameter.
#[graphql_object(name = "FilterChip", context = Context)]
impl Chip {
    /// Kind of this `FilterChip`, doubling as its removal handle.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.0.kind.into()
    }

    /// Display label of this `FilterChip`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0.label
    }

    /// Raw parameter value behind this `FilterChip`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0.value
    }
}

/// Kind of a `FilterChip`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "FilterChipKind")]
pub enum Kind {
    /// Community category filter.
    Category,

    /// Location filter.
    Location,

    /// Sort order filter.
    Sort,
}

impl From<chips::Kind> for Kind {
    fn from(kind: chips::Kind) -> Self {
        use chips::Kind as K;
        match kind {
            K::Category => Self::Category,
            K::Location => Self::Location,
            K::Sort => Self::Sort,
        }
    }
}

/// Sort order of search results.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "SortBy")]
pub enum Sort {
    /// Newest first.
    Recent,

    /// Most liked first.
    Popular,

    /// Most commented first.
    Comments,
}

impl From<Sort> for chips::Sort {
    fn from(sort: Sort) -> Self {
        match sort {
            Sort::Recent => Self::Recent,
            Sort::Popular => Self::Popular,
            Sort::Comments => Self::Comments,
        }
    }
}

/// Active `FilterChip`s of a search parameter set.
#[derive(Clone, Debug)]
pub struct FilterChips {
    /// Derived [`Chip`]s, in their fixed display order.
    pub(crate) chips: Vec<Chip>,

    /// Indicator whether a "clear all" affordance is offered.
    pub(crate) can_clear_all: bool,
}

/// Active `FilterChip`s of a search parameter set.
#[graphql_object(context = Context)]
impl FilterChips {
    /// `FilterChip`s, in their fixed display order.
    #[must_use]
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Indicator whether clearing all filters at once is offered.
    ///
    /// Only when more than one `FilterChip` is active.
    #[must_use]
    pub fn can_clear_all(&self) -> bool {
        self.can_clear_all
    }
}
