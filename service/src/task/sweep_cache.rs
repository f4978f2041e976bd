//! [`SweepCache`] [`Task`].

use std::{convert::Infallible, time};

use common::operations::{By, Perform, Start};
use tokio::time::interval;
use tracing as log;

use crate::Service;

use super::Task;

/// Configuration for [`SweepCache`] [`Task`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Interval between expired cache entries sweeping.
    pub interval: time::Duration,
}

/// [`Task`] for sweeping expired entries out of the in-memory cache.
///
/// Without it expired entries would linger until the next access to
/// their key.
#[derive(Clone, Copy, Debug)]
pub struct SweepCache<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<Db> Task<Start<By<SweepCache<Self>, Config>>> for Service<Db>
where
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<SweepCache<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = SweepCache {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        loop {
            let _ = interval.tick().await;
            _ = task.execute(Perform(())).await;
        }
    }
}

impl<Db> Task<Perform<()>> for SweepCache<Service<Db>> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        let evicted = self.service.catalog_cache().evict_expired();
        if evicted > 0 {
            log::debug!("`task::SweepCache` evicted {evicted} cache entries");
        }
        Ok(())
    }
}
