//! [`Catalog`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    catalog::Catalog,
    domain::{Apartment, City},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

impl<C> Database<Select<By<Catalog, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Catalog;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Catalog, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const CITIES_SQL: &str = "\
            SELECT id, name, name_ko \
            FROM cities \
            ORDER BY name";
        let cities = self
            .query(CITIES_SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| City {
                id: row.get("id"),
                name: row.get("name"),
                name_ko: row.get("name_ko"),
            })
            .collect();

        const APARTMENTS_SQL: &str = "\
            SELECT id, name, name_ko, city_id, district, district_ko \
            FROM apartments \
            ORDER BY name";
        let apartments = self
            .query(APARTMENTS_SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| Apartment {
                id: row.get("id"),
                name: row.get("name"),
                name_ko: row.get("name_ko"),
                city_id: row.get("city_id"),
                district: row.get("district"),
                district_ko: row.get("district_ko"),
            })
            .collect();

        Ok(Catalog::new(cities, apartments))
    }
}
