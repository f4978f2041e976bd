//! [`Catalog`] of location reference data.

use crate::domain::{apartment, city, Apartment, City};

/// Immutable snapshot of the location reference data.
///
/// Holds every known [`City`] and [`Apartment`]. The snapshot is selected
/// from the database as a whole and never mutated afterwards: lookups with
/// unknown IDs produce empty results rather than errors.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// [`City`]s of this [`Catalog`].
    cities: Vec<City>,

    /// [`Apartment`]s of this [`Catalog`].
    apartments: Vec<Apartment>,
}

impl Catalog {
    /// Creates a new [`Catalog`] from the provided reference data.
    #[must_use]
    pub fn new(cities: Vec<City>, apartments: Vec<Apartment>) -> Self {
        Self { cities, apartments }
    }

    /// Returns all the [`City`]s of this [`Catalog`].
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Returns all the [`Apartment`]s of this [`Catalog`].
    #[must_use]
    pub fn apartments(&self) -> &[Apartment] {
        &self.apartments
    }

    /// Looks up the [`City`] with the provided ID.
    #[must_use]
    pub fn city(&self, id: &city::Id) -> Option<&City> {
        self.cities.iter().find(|c| &c.id == id)
    }

    /// Looks up the [`Apartment`] with the provided ID.
    #[must_use]
    pub fn apartment(&self, id: &apartment::Id) -> Option<&Apartment> {
        self.apartments.iter().find(|a| &a.id == id)
    }

    /// Returns the [`City`] owning the [`Apartment`] with the provided ID.
    #[must_use]
    pub fn city_of(&self, id: &apartment::Id) -> Option<&City> {
        self.apartment(id).and_then(|a| self.city(&a.city_id))
    }

    /// Returns the [`Apartment`]s belonging to the [`City`] with the
    /// provided ID.
    pub fn apartments_of<'a, 'b>(
        &'a self,
        city_id: &'b city::Id,
    ) -> impl Iterator<Item = &'a Apartment> + use<'a, 'b> {
        self.apartments.iter().filter(move |a| &a.city_id == city_id)
    }

    /// Counts the [`Apartment`]s belonging to the [`City`] with the
    /// provided ID.
    #[must_use]
    pub fn apartment_count(&self, city_id: &city::Id) -> usize {
        self.apartments_of(city_id).count()
    }
}

#[cfg(test)]
mod spec {
    use super::Catalog;
    use crate::domain::{apartment, city, Apartment, City};

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
                apartment("a3", "Royal City", "hanoi"),
            ],
        )
    }

    #[test]
    fn back_derives_owning_city() {
        let catalog = catalog();
        let id = apartment::Id::new("a1").unwrap();

        assert_eq!(
            AsRef::<str>::as_ref(&catalog.city_of(&id).unwrap().id),
            "hcm",
        );
    }

    #[test]
    fn unknown_ids_produce_empty_results() {
        let catalog = catalog();

        assert!(catalog.apartment(&apartment::Id::new("nope").unwrap())
            .is_none());
        assert_eq!(
            catalog.apartment_count(&city::Id::new("busan").unwrap()),
            0,
        );
    }

    #[test]
    fn counts_apartments_per_city() {
        let catalog = catalog();

        assert_eq!(
            catalog.apartment_count(&city::Id::new("hcm").unwrap()),
            2,
        );
        assert_eq!(
            catalog.apartment_count(&city::Id::new("hanoi").unwrap()),
            1,
        );
    }
}
