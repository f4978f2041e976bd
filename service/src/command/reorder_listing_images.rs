//! [`Command`] for reordering [`listing::Image`]s of a [`Listing`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Listing;
use crate::{
    domain::listing,
    infra::{database, Database},
    reorder, Service,
};

use super::Command;

/// [`Command`] for moving a [`listing::Image`] of a [`Listing`] to a new
/// [`listing::Position`].
#[derive(Clone, Copy, Debug)]
pub struct ReorderListingImages {
    /// [`listing::Id`] of the [`Listing`] whose [`listing::Image`]s are
    /// reordered.
    pub listing: listing::Id,

    /// Index the moved [`listing::Image`] is taken from.
    pub from: usize,

    /// Index the moved [`listing::Image`] is placed at.
    pub to: usize,
}

impl<Db> Command<ReorderListingImages> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Vec<listing::Image>, listing::Id>>,
            Ok = Vec<listing::Image>,
            Err = Traced<database::Error>,
        > + Database<Update<Vec<listing::Image>>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Vec<listing::Image>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ReorderListingImages,
    ) -> Result<Self::Ok, Self::Err> {
        let ReorderListingImages { listing, from, to } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!())?;

        let mut images = tx
            .execute(Select(By::new(listing)))
            .await
            .map_err(tracerr::map_from_and_wrap!())?;

        reorder::persist_with(&mut images, from, to, move |mut reordered| {
            async move {
                renumber(&mut reordered);
                tx.execute(Update(reordered)).await.map(drop)?;
                tx.execute(Commit).await.map(drop)
            }
        })
        .await
        .map_err(|e| {
            let (e, trace) = e.split();
            match e {
                reorder::Error::OutOfBounds(e) => {
                    Traced::compose(e.into(), trace)
                }
                reorder::Error::Persist(e) => tracerr::map_from(e),
            }
        })?;
        // The persisted clone was renumbered the same way.
        renumber(&mut images);

        Ok(images)
    }
}

/// Reassigns [`listing::Position`]s to match the order of the provided
/// [`listing::Image`]s.
fn renumber(images: &mut [listing::Image]) {
    for (image, position) in images.iter_mut().zip(0..) {
        image.position = position;
    }
}

/// Error of [`ReorderListingImages`] [`Command`] execution.
#[derive(Debug, Display, From, StdError)]
pub enum ExecutionError {
    /// [`Database`] operation failed.
    #[display("{_0}")]
    Database(database::Error),

    /// Requested indices don't fit the [`listing::Image`]s of the
    /// [`Listing`].
    #[display("{_0}")]
    OutOfBounds(reorder::OutOfBounds),
}

#[cfg(test)]
mod spec {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
        time::Duration,
    };

    use common::operations::{By, Commit, Select, Transact, Update};
    use futures::executor::block_on;
    use tracerr::Traced;

    use crate::{
        cache,
        domain::listing,
        infra::{
            database::{self, postgres, postgres::connection},
            Database,
        },
        reorder, task, Command as _, Config, Service,
    };

    use super::{renumber, ExecutionError, ReorderListingImages};

    fn image(position: listing::Position) -> listing::Image {
        listing::Image {
            id: listing::ImageId::new(),
            listing_id: listing::Id::new(),
            url: "https://cdn.example.com/img.jpg".parse().unwrap(),
            position,
        }
    }

    #[derive(Debug, Default)]
    struct State {
        images: RefCell<Vec<listing::Image>>,
        updated: RefCell<Option<Vec<listing::Image>>>,
        committed: Cell<bool>,
        fail_update: Cell<bool>,
    }

    #[derive(Clone, Debug, Default)]
    struct Db(Rc<State>);

    #[derive(Debug)]
    struct Tx(Rc<State>);

    impl Database<Transact> for Db {
        type Ok = Tx;
        type Err = Traced<database::Error>;

        async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
            Ok(Tx(Rc::clone(&self.0)))
        }
    }

    impl Database<Select<By<Vec<listing::Image>, listing::Id>>> for Tx {
        type Ok = Vec<listing::Image>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<Vec<listing::Image>, listing::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(self.0.images.borrow().clone())
        }
    }

    impl Database<Update<Vec<listing::Image>>> for Tx {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Update(images): Update<Vec<listing::Image>>,
        ) -> Result<Self::Ok, Self::Err> {
            if self.0.fail_update.get() {
                return Err(tracerr::new!(database::Error::Postgres(
                    postgres::Error::PoolError(connection::PoolError::Closed),
                )));
            }
            *self.0.updated.borrow_mut() = Some(images);
            Ok(())
        }
    }

    impl Database<Commit> for Tx {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
            self.0.committed.set(true);
            Ok(())
        }
    }

    fn service(images: Vec<listing::Image>) -> Service<Db> {
        let db = Db::default();
        *db.0.images.borrow_mut() = images;
        Service {
            config: Config {
                cache: cache::Config {
                    ttl: Duration::from_secs(60),
                    capacity: 8,
                },
                sweep_cache: task::sweep_cache::Config {
                    interval: Duration::from_secs(60),
                },
            },
            database: db,
            catalog_cache: cache::Cache::new(cache::Config {
                ttl: Duration::from_secs(60),
                capacity: 8,
            }),
        }
    }

    #[test]
    fn renumbers_sequentially_from_zero() {
        let mut images = vec![image(2), image(0), image(1)];

        renumber(&mut images);

        let positions = images.iter().map(|i| i.position).collect::<Vec<_>>();
        assert_eq!(positions, [0, 1, 2]);
    }

    #[test]
    fn persists_and_renumbers_the_new_order() {
        let svc = service(vec![image(0), image(1), image(2)]);
        let ids = svc
            .database()
            .0
            .images
            .borrow()
            .iter()
            .map(|i| i.id)
            .collect::<Vec<_>>();

        let reordered = block_on(svc.execute(ReorderListingImages {
            listing: listing::Id::new(),
            from: 2,
            to: 0,
        }))
        .unwrap();

        let order = reordered.iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(order, [ids[2], ids[0], ids[1]]);
        let positions =
            reordered.iter().map(|i| i.position).collect::<Vec<_>>();
        assert_eq!(positions, [0, 1, 2]);

        let state = &svc.database().0;
        assert_eq!(state.updated.borrow().as_ref(), Some(&reordered));
        assert!(state.committed.get());
    }

    #[test]
    fn rejects_out_of_bounds_indices_without_persisting() {
        let svc = service(vec![image(0), image(1)]);

        let err = block_on(svc.execute(ReorderListingImages {
            listing: listing::Id::new(),
            from: 5,
            to: 0,
        }))
        .unwrap_err();

        match err.as_ref() {
            ExecutionError::OutOfBounds(e) => {
                assert_eq!(*e, reorder::OutOfBounds { len: 2, from: 5, to: 0 });
            }
            ExecutionError::Database(e) => panic!("unexpected error: {e}"),
        }
        let state = &svc.database().0;
        assert!(state.updated.borrow().is_none());
        assert!(!state.committed.get());
    }

    #[test]
    fn skips_commit_when_persisting_fails() {
        let svc = service(vec![image(0), image(1), image(2)]);
        svc.database().0.fail_update.set(true);

        let err = block_on(svc.execute(ReorderListingImages {
            listing: listing::Id::new(),
            from: 0,
            to: 2,
        }))
        .unwrap_err();

        match err.as_ref() {
            ExecutionError::Database(_) => {}
            ExecutionError::OutOfBounds(e) => panic!("unexpected error: {e}"),
        }
        assert!(!svc.database().0.committed.get());
    }
}
