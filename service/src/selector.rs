//! Two-step city/apartment [`Selector`].

use crate::{
    catalog::Catalog,
    domain::{apartment, city, Apartment, City},
};

/// Semantic label of the city picker control.
pub const CITY_LABEL: &str = "도시 선택";

/// Semantic label of the apartment picker control.
pub const APARTMENT_LABEL: &str = "아파트 선택";

/// Choice made in a picker control.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Choice<Id> {
    /// Nothing is chosen yet.
    Unset,

    /// Explicit "include everything" option.
    All,

    /// Concrete option chosen by its ID.
    One(Id),
}

impl<Id> Choice<Id> {
    /// Indicates whether nothing is chosen yet.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the concrete ID of this [`Choice`], if any.
    #[must_use]
    pub fn id(&self) -> Option<&Id> {
        match self {
            Self::One(id) => Some(id),
            Self::Unset | Self::All => None,
        }
    }
}

/// Observer of apartment [`Choice`] changes.
///
/// Implemented by whatever owns the search request: every apartment
/// selection, including the clearing performed by a city switch, is
/// reported here exactly once.
pub trait OnApartmentSelect {
    /// Reacts to the apartment [`Choice`] being changed.
    fn apartment_selected(&mut self, choice: &Choice<apartment::Id>);
}

impl<F: FnMut(&Choice<apartment::Id>)> OnApartmentSelect for F {
    fn apartment_selected(&mut self, choice: &Choice<apartment::Id>) {
        self(choice);
    }
}

/// Two-step location selector.
///
/// Keeps the apartment [`Choice`] consistent with the city [`Choice`]: an
/// apartment may only stay chosen while its owning [`City`] is, or while
/// the city picker is in its "include all" mode.
#[derive(Debug)]
pub struct Selector<'c, O> {
    /// [`Catalog`] the choices are made from.
    catalog: &'c Catalog,

    /// Indicator whether the "include all" city option is offered.
    allow_all: bool,

    /// Current city [`Choice`].
    city: Choice<city::Id>,

    /// Current apartment [`Choice`].
    apartment: Choice<apartment::Id>,

    /// Observer of apartment [`Choice`] changes.
    observer: O,
}

impl<'c, O: OnApartmentSelect> Selector<'c, O> {
    /// Creates a new [`Selector`] with nothing chosen.
    #[must_use]
    pub fn new(catalog: &'c Catalog, allow_all: bool, observer: O) -> Self {
        Self {
            catalog,
            allow_all,
            city: Choice::Unset,
            apartment: Choice::Unset,
            observer,
        }
    }

    /// Creates a new [`Selector`] pre-seeded with the provided apartment
    /// [`Choice`].
    ///
    /// The city [`Choice`] is back-derived from the [`Catalog`]: an
    /// apartment ID without a resolvable owning [`City`] leaves the city
    /// [`Choice::Unset`], forcing a re-selection.
    #[must_use]
    pub fn seeded(
        catalog: &'c Catalog,
        initial: Choice<apartment::Id>,
        allow_all: bool,
        observer: O,
    ) -> Self {
        let city = initial
            .id()
            .and_then(|id| catalog.city_of(id))
            .map_or(Choice::Unset, |c| Choice::One(c.id.clone()));
        Self {
            catalog,
            allow_all,
            city,
            apartment: initial,
            observer,
        }
    }

    /// Returns the current city [`Choice`].
    #[must_use]
    pub fn city(&self) -> &Choice<city::Id> {
        &self.city
    }

    /// Returns the current apartment [`Choice`].
    #[must_use]
    pub fn apartment(&self) -> &Choice<apartment::Id> {
        &self.apartment
    }

    /// Indicates whether the apartment picker may be used.
    ///
    /// The consumer is expected to disable the control while this is
    /// `false`, which is whenever no city [`Choice`] has been made yet.
    #[must_use]
    pub fn is_apartment_selection_enabled(&self) -> bool {
        !self.city.is_unset()
    }

    /// Applies the provided city [`Choice`].
    ///
    /// Switching to a different [`Choice`] clears the apartment [`Choice`]
    /// and reports the clearing to the observer, unless the new [`Choice`]
    /// is [`Choice::All`] with the "include all" mode enabled: then the
    /// apartment [`Choice`] stays meaningful (the apartment list becomes
    /// unfiltered) and is re-emitted unchanged. Re-applying the current
    /// [`Choice`] has no side effect.
    ///
    /// A [`Choice`] with an unknown city ID is accepted as-is and simply
    /// filters the apartment list down to nothing.
    pub fn select_city(&mut self, choice: Choice<city::Id>) {
        if self.city == choice {
            return;
        }
        let keep_apartment =
            matches!(choice, Choice::All) && self.allow_all;
        self.city = choice;

        if !keep_apartment {
            self.apartment = Choice::Unset;
        }
        let apartment = self.apartment.clone();
        self.observer.apartment_selected(&apartment);
    }

    /// Applies the provided apartment [`Choice`] and reports it to the
    /// observer.
    ///
    /// Expected to be reachable only while
    /// [`Selector::is_apartment_selection_enabled()`] holds.
    pub fn select_apartment(&mut self, choice: Choice<apartment::Id>) {
        self.apartment = choice;
        let apartment = self.apartment.clone();
        self.observer.apartment_selected(&apartment);
    }

    /// Returns the [`Apartment`]s matching the current city [`Choice`].
    #[must_use]
    pub fn filtered_apartments(&self) -> Vec<&'c Apartment> {
        filtered_apartments(self.catalog, &self.city)
    }

    /// Returns the city picker options with their apartment counts.
    #[must_use]
    pub fn city_options(&self) -> Vec<CityOption<'c>> {
        city_options(self.catalog, self.allow_all)
    }
}

/// Option offered by the city picker.
#[derive(Clone, Copy, Debug)]
pub struct CityOption<'c> {
    /// [`City`] offered, or [`None`] for the synthetic "include all" entry.
    pub city: Option<&'c City>,

    /// Number of [`Apartment`]s the option covers.
    pub apartment_count: usize,
}

/// Returns the [`Apartment`]s of the `catalog` matching the provided city
/// [`Choice`].
///
/// [`Choice::Unset`] and [`Choice::All`] leave the list unfiltered.
#[must_use]
pub fn filtered_apartments<'c>(
    catalog: &'c Catalog,
    city: &Choice<city::Id>,
) -> Vec<&'c Apartment> {
    match city {
        Choice::One(id) => catalog.apartments_of(id).collect(),
        Choice::Unset | Choice::All => catalog.apartments().iter().collect(),
    }
}

/// Returns the city picker options of the `catalog` with their apartment
/// counts.
///
/// When `include_all` is set, a synthetic leading entry covering every
/// [`Apartment`] is prepended.
#[must_use]
pub fn city_options(catalog: &Catalog, include_all: bool) -> Vec<CityOption<'_>> {
    let mut options = Vec::with_capacity(
        catalog.cities().len() + usize::from(include_all),
    );
    if include_all {
        options.push(CityOption {
            city: None,
            apartment_count: catalog.apartments().len(),
        });
    }
    options.extend(catalog.cities().iter().map(|city| CityOption {
        city: Some(city),
        apartment_count: catalog.apartment_count(&city.id),
    }));
    options
}

#[cfg(test)]
mod spec {
    use std::{cell::RefCell, rc::Rc};

    use super::{city_options, Choice, Selector};
    use crate::{
        catalog::Catalog,
        domain::{apartment, city, Apartment, City},
    };

    fn city(id: &str, name: &str) -> City {
        City {
            id: city::Id::new(id).unwrap(),
            name: city::Name::new(name).unwrap(),
            name_ko: None,
        }
    }

    fn apartment(id: &str, name: &str, city_id: &str) -> Apartment {
        Apartment {
            id: apartment::Id::new(id).unwrap(),
            name: apartment::Name::new(name).unwrap(),
            name_ko: None,
            city_id: city::Id::new(city_id).unwrap(),
            district: None,
            district_ko: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![city("hcm", "Ho Chi Minh City"), city("hanoi", "Hanoi")],
            vec![
                apartment("a1", "Landmark 81", "hcm"),
                apartment("a2", "Vinhomes Central Park", "hcm"),
            ],
        )
    }

    type Emitted = Rc<RefCell<Vec<Choice<apartment::Id>>>>;

    fn observer(emitted: &Emitted) -> impl FnMut(&Choice<apartment::Id>) {
        let emitted = Rc::clone(emitted);
        move |choice: &Choice<apartment::Id>| {
            emitted.borrow_mut().push(choice.clone());
        }
    }

    fn city_choice(id: &str) -> Choice<city::Id> {
        Choice::One(city::Id::new(id).unwrap())
    }

    fn apartment_choice(id: &str) -> Choice<apartment::Id> {
        Choice::One(apartment::Id::new(id).unwrap())
    }

    #[test]
    fn filters_apartments_by_chosen_city() {
        let catalog = catalog();
        let mut selector =
            Selector::new(&catalog, false, |_: &Choice<apartment::Id>| {});

        selector.select_city(city_choice("hcm"));

        let apartments = selector.filtered_apartments();
        assert_eq!(apartments.len(), 2);
        assert!(apartments
            .iter()
            .all(|a| AsRef::<str>::as_ref(&a.city_id) == "hcm"));
    }

    #[test]
    fn switching_city_clears_apartment_exactly_once() {
        let catalog = catalog();
        let emitted: Emitted = Rc::default();
        let mut selector = Selector::new(&catalog, false, observer(&emitted));

        selector.select_city(city_choice("hcm"));
        selector.select_apartment(apartment_choice("a1"));
        emitted.borrow_mut().clear();

        selector.select_city(city_choice("hanoi"));

        assert_eq!(*selector.apartment(), Choice::Unset);
        assert_eq!(*emitted.borrow(), vec![Choice::Unset]);
    }

    #[test]
    fn apartment_selection_is_gated_on_city() {
        let catalog = catalog();
        let mut selector =
            Selector::new(&catalog, false, |_: &Choice<apartment::Id>| {});

        assert!(!selector.is_apartment_selection_enabled());

        selector.select_city(city_choice("hcm"));
        assert!(selector.is_apartment_selection_enabled());
    }

    #[test]
    fn reselecting_same_city_is_idempotent() {
        let catalog = catalog();
        let emitted: Emitted = Rc::default();
        let mut selector = Selector::new(&catalog, false, observer(&emitted));

        selector.select_city(city_choice("hcm"));
        selector.select_apartment(apartment_choice("a1"));
        emitted.borrow_mut().clear();

        selector.select_city(city_choice("hcm"));

        assert_eq!(*selector.apartment(), apartment_choice("a1"));
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn seeding_back_derives_owning_city() {
        let catalog = catalog();
        let selector = Selector::seeded(
            &catalog,
            apartment_choice("a1"),
            false,
            |_: &Choice<apartment::Id>| {},
        );

        assert_eq!(*selector.city(), city_choice("hcm"));
        assert_eq!(*selector.apartment(), apartment_choice("a1"));
    }

    #[test]
    fn seeding_with_unknown_apartment_leaves_city_unset() {
        let catalog = catalog();
        let selector = Selector::seeded(
            &catalog,
            apartment_choice("ghost"),
            false,
            |_: &Choice<apartment::Id>| {},
        );

        assert_eq!(*selector.city(), Choice::Unset);
        assert!(!selector.is_apartment_selection_enabled());
    }

    #[test]
    fn city_without_apartments_filters_to_empty() {
        let catalog = catalog();
        let emitted: Emitted = Rc::default();
        let mut selector = Selector::new(&catalog, false, observer(&emitted));

        selector.select_city(city_choice("hcm"));
        selector.select_apartment(apartment_choice("a1"));
        selector.select_city(city_choice("hanoi"));

        assert!(selector.filtered_apartments().is_empty());
        assert_eq!(*selector.apartment(), Choice::Unset);
    }

    #[test]
    fn selecting_all_preserves_and_reemits_apartment() {
        let catalog = catalog();
        let emitted: Emitted = Rc::default();
        let mut selector = Selector::new(&catalog, true, observer(&emitted));

        selector.select_city(city_choice("hcm"));
        selector.select_apartment(apartment_choice("a1"));
        emitted.borrow_mut().clear();

        selector.select_city(Choice::All);

        assert_eq!(*selector.apartment(), apartment_choice("a1"));
        assert_eq!(*emitted.borrow(), vec![apartment_choice("a1")]);
        assert_eq!(selector.filtered_apartments().len(), 2);
    }

    #[test]
    fn all_mode_disabled_clears_like_any_other_switch() {
        let catalog = catalog();
        let emitted: Emitted = Rc::default();
        let mut selector = Selector::new(&catalog, false, observer(&emitted));

        selector.select_city(city_choice("hcm"));
        selector.select_apartment(apartment_choice("a1"));
        emitted.borrow_mut().clear();

        selector.select_city(Choice::All);

        assert_eq!(*selector.apartment(), Choice::Unset);
        assert_eq!(*emitted.borrow(), vec![Choice::Unset]);
    }

    #[test]
    fn all_entry_is_prepended_with_total_count() {
        let catalog = catalog();

        let options = city_options(&catalog, true);
        assert_eq!(options.len(), 3);
        assert!(options[0].city.is_none());
        assert_eq!(options[0].apartment_count, 2);
        assert_eq!(options[1].apartment_count, 2);
        assert_eq!(options[2].apartment_count, 0);

        let options = city_options(&catalog, false);
        assert_eq!(options.len(), 2);
        assert!(options[0].city.is_some());
    }
}
