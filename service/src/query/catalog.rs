//! [`Query`] collection related to the location [`Catalog`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    catalog::Catalog,
    infra::{database, Database},
    Service,
};

use super::Query;

/// Key the [`Catalog`] is cached under.
const CACHE_KEY: &str = "catalog";

/// Queries the whole location [`Catalog`].
///
/// The [`Catalog`] changes rarely, so it's served from the in-memory
/// cache whenever a fresh copy is there, hitting the [`Database`] only
/// on a miss.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot;

impl<Db> Query<Snapshot> for Service<Db>
where
    Db: Database<
        Select<By<Catalog, ()>>,
        Ok = Catalog,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Catalog;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Snapshot) -> Result<Self::Ok, Self::Err> {
        if let Some(catalog) = self.catalog_cache().get(&CACHE_KEY) {
            return Ok(catalog);
        }

        let catalog = self
            .database()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        self.catalog_cache().set(CACHE_KEY, catalog.clone());

        Ok(catalog)
    }
}
