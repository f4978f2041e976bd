//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod cache;
pub mod catalog;
pub mod chips;
pub mod command;
pub mod domain;
pub mod infra;
pub mod pager;
pub mod query;
pub mod read;
pub mod reorder;
pub mod selector;
pub mod task;

use common::operations::{By, Start};
use derive_more::{Debug, Display, Error};

#[cfg(doc)]
use infra::Database;

pub use self::{
    catalog::Catalog, command::Command, pager::Pager, query::Query,
    selector::Selector, task::Task,
};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// In-memory [`cache::Cache`] configuration.
    pub cache: cache::Config,

    /// [`task::SweepCache`] configuration.
    pub sweep_cache: task::sweep_cache::Config,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,

    /// In-memory cache of the location [`Catalog`].
    catalog_cache: cache::Cache<&'static str, Catalog>,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, database: Db) -> (Self, task::Background)
    where
        Self: Task<
                Start<By<task::SweepCache<Self>, task::sweep_cache::Config>>,
                Ok = (),
                Err: Error,
            > + Clone
            + 'static,
    {
        let this = Service {
            config,
            database,
            catalog_cache: cache::Cache::new(config.cache),
        };

        let mut bg = task::Background::default();
        let svc = this.clone();
        bg.spawn(async move {
            svc.execute(Start(By::new(svc.config().sweep_cache))).await
        });

        (this, bg)
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns the in-memory [`Catalog`] cache of this [`Service`].
    #[must_use]
    pub fn catalog_cache(&self) -> &cache::Cache<&'static str, Catalog> {
        &self.catalog_cache
    }
}

/// Shortcut for the error of starting a [`Task`].
type TaskStartError<Svc, T, Args> = <Svc as Task<Start<By<T, Args>>>>::Err;

/// Error of starting a [`Service`].
#[derive(Debug, Display, Error)]
pub enum StartupError<Svc>
where
    Svc: Task<Start<By<task::SweepCache<Svc>, task::sweep_cache::Config>>>,
{
    /// [`task::SweepCache`] failed to start.
    SweepCacheTask(
        TaskStartError<Svc, task::SweepCache<Svc>, task::sweep_cache::Config>,
    ),
}
