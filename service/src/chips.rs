//! Filter [`Chip`] projection.
//!
//! Active non-default search parameters are rendered as removable tokens.
//! [`Chip`]s are re-derived from the parameters on every render and never
//! stored, so removing one is just a parameter mutation followed by a
//! re-derivation.

use common::define_kind;

/// Search parameters the [`Chip`]s are derived from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchParams {
    /// Category code to filter by.
    pub category: Option<String>,

    /// Location to filter by.
    pub location: Option<String>,

    /// Sort order of the results.
    pub sort: Option<Sort>,
}

impl SearchParams {
    /// Returns these [`SearchParams`] with the parameter behind the
    /// provided [`Kind`] removed.
    #[must_use]
    pub fn without(mut self, kind: Kind) -> Self {
        match kind {
            Kind::Category => self.category = None,
            Kind::Location => self.location = None,
            Kind::Sort => self.sort = None,
        }
        self
    }

    /// Returns these [`SearchParams`] with every tracked parameter removed.
    #[must_use]
    pub fn cleared(self) -> Self {
        Self::default()
    }
}

define_kind! {
    #[doc = "Kind of a [`Chip`]."]
    enum Kind {
        #[doc = "Category filter."]
        Category = 1,

        #[doc = "Location filter."]
        Location = 2,

        #[doc = "Sort order."]
        Sort = 3,
    }
}

define_kind! {
    #[doc = "Sort order of search results."]
    enum Sort {
        #[doc = "Newest first."]
        Recent = 1,

        #[doc = "Most liked first."]
        Popular = 2,

        #[doc = "Most commented first."]
        Comments = 3,
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::Recent
    }
}

impl Sort {
    /// Returns the display label of this [`Sort`] order.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Recent => "최신순",
            Self::Popular => "인기순",
            Self::Comments => "댓글순",
        }
    }
}

/// Removable token representing an active search parameter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chip {
    /// [`Kind`] of this [`Chip`], doubling as its removal handle.
    pub kind: Kind,

    /// Display label of this [`Chip`].
    pub label: String,

    /// Raw parameter value behind this [`Chip`].
    pub value: String,
}

/// Derives the [`Chip`]s representing the provided [`SearchParams`].
///
/// The order is fixed: category, then location, then sort. A missing
/// parameter produces no [`Chip`], and the default [`Sort`] order is not
/// considered an active filter.
#[must_use]
pub fn derive(params: &SearchParams) -> Vec<Chip> {
    let mut chips = Vec::with_capacity(3);

    if let Some(category) = &params.category {
        chips.push(Chip {
            kind: Kind::Category,
            label: category_label(category)
                .unwrap_or(category.as_str())
                .to_owned(),
            value: category.clone(),
        });
    }
    if let Some(location) = &params.location {
        chips.push(Chip {
            kind: Kind::Location,
            label: location.clone(),
            value: location.clone(),
        });
    }
    if let Some(sort) = params.sort.filter(|s| *s != Sort::default()) {
        chips.push(Chip {
            kind: Kind::Sort,
            label: sort.label().to_owned(),
            value: sort.to_string(),
        });
    }

    chips
}

/// Indicates whether a "clear all" control should be offered for the
/// provided [`Chip`]s.
///
/// With a single active filter the control would duplicate the [`Chip`]'s
/// own removal handle, so it only appears once more than one is active.
#[must_use]
pub fn can_clear_all(chips: &[Chip]) -> bool {
    chips.len() > 1
}

/// Returns the display label of the provided category code, if known.
///
/// Unknown codes produce no label and are displayed verbatim.
#[must_use]
pub fn category_label(code: &str) -> Option<&'static str> {
    Some(match code {
        "QNA" => "Q&A",
        "FREE" => "자유게시판",
        "MARKET" => "중고거래",
        "INFO" => "생활정보",
        _ => return None,
    })
}

#[cfg(test)]
mod spec {
    use super::{can_clear_all, derive, Kind, SearchParams, Sort};

    #[test]
    fn default_sort_is_not_a_chip() {
        let params = SearchParams {
            category: Some("QNA".to_owned()),
            location: None,
            sort: Some(Sort::Recent),
        };

        let chips = derive(&params);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].kind, Kind::Category);
        assert_eq!(chips[0].label, "Q&A");
    }

    #[test]
    fn chips_keep_a_fixed_order() {
        let params = SearchParams {
            category: Some("MARKET".to_owned()),
            location: Some("Landmark 81".to_owned()),
            sort: Some(Sort::Popular),
        };

        let chips = derive(&params);
        assert_eq!(
            chips.iter().map(|c| c.kind).collect::<Vec<_>>(),
            vec![Kind::Category, Kind::Location, Kind::Sort],
        );
        assert_eq!(chips[0].label, "중고거래");
        assert_eq!(chips[1].label, "Landmark 81");
        assert_eq!(chips[2].label, "인기순");
    }

    #[test]
    fn unknown_category_codes_pass_through() {
        let params = SearchParams {
            category: Some("NOTICE".to_owned()),
            ..SearchParams::default()
        };

        let chips = derive(&params);
        assert_eq!(chips[0].label, "NOTICE");
        assert_eq!(chips[0].value, "NOTICE");
    }

    #[test]
    fn absent_params_derive_no_chips() {
        assert!(derive(&SearchParams::default()).is_empty());
    }

    #[test]
    fn removal_rederives_consistently() {
        let params = SearchParams {
            category: Some("QNA".to_owned()),
            location: Some("Hanoi".to_owned()),
            sort: Some(Sort::Comments),
        };
        assert_eq!(derive(&params).len(), 3);

        let params = params.without(Kind::Location);
        let chips = derive(&params);
        assert_eq!(
            chips.iter().map(|c| c.kind).collect::<Vec<_>>(),
            vec![Kind::Category, Kind::Sort],
        );
    }

    #[test]
    fn clear_all_needs_more_than_one_chip() {
        let one = derive(&SearchParams {
            category: Some("QNA".to_owned()),
            ..SearchParams::default()
        });
        assert!(!can_clear_all(&one));

        let two = derive(&SearchParams {
            category: Some("QNA".to_owned()),
            location: Some("Hanoi".to_owned()),
            sort: None,
        });
        assert!(can_clear_all(&two));

        let params = SearchParams {
            category: Some("QNA".to_owned()),
            location: Some("Hanoi".to_owned()),
            sort: Some(Sort::Popular),
        };
        assert!(derive(&params.cleared()).is_empty());
    }
}
