//! Optimistic reordering of positioned collections.

use std::future::Future;

use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

/// Moves the item at the `from` index to the `to` index, shifting the
/// items in between.
///
/// # Errors
///
/// If either index is out of bounds.
pub fn shift<T>(
    items: &mut Vec<T>,
    from: usize,
    to: usize,
) -> Result<(), Traced<OutOfBounds>> {
    if from >= items.len() || to >= items.len() {
        return Err(tracerr::new!(OutOfBounds {
            len: items.len(),
            from,
            to,
        }));
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

/// Reorders the provided items optimistically, then persists the new
/// order via the provided `persist` function.
///
/// The items are reordered before persisting. If persisting fails, the
/// original order is restored and the failure is returned, so callers
/// keep rendering the order the authority accepted last.
///
/// # Errors
///
/// - If either index is out of bounds (the items are left untouched).
/// - If `persist` fails (the original order is restored).
pub async fn persist_with<T, F, Fut, E>(
    items: &mut Vec<T>,
    from: usize,
    to: usize,
    persist: F,
) -> Result<(), Traced<Error<E>>>
where
    T: Clone,
    F: FnOnce(Vec<T>) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let snapshot = items.clone();

    shift(items, from, to).map_err(tracerr::map_from_and_wrap!())?;

    if let Err(e) = persist(items.clone()).await {
        *items = snapshot;
        return Err(tracerr::new!(Error::Persist(e)));
    }
    Ok(())
}

/// Error of requesting indices not fitting the reordered collection.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
#[display("Indices `{from}..{to}` are out of bounds of `{len}` items")]
pub struct OutOfBounds {
    /// Number of items in the reordered collection.
    pub len: usize,

    /// Index the moved item was taken from.
    pub from: usize,

    /// Index the moved item was placed at.
    pub to: usize,
}

/// Error of reordering items.
#[derive(Clone, Copy, Debug, Display, Eq, From, PartialEq, StdError)]
pub enum Error<E> {
    /// Requested indices don't fit the reordered collection.
    #[display("{_0}")]
    OutOfBounds(OutOfBounds),

    /// Persisting the new order failed.
    #[display("Failed to persist the new order: {_0}")]
    #[from(skip)]
    Persist(E),
}

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use super::{persist_with, shift, Error, OutOfBounds};

    #[test]
    fn shifts_forward_and_backward() {
        let mut items = vec![1, 2, 3, 4];

        shift(&mut items, 0, 2).unwrap();
        assert_eq!(items, [2, 3, 1, 4]);

        shift(&mut items, 2, 0).unwrap();
        assert_eq!(items, [1, 2, 3, 4]);
    }

    #[test]
    fn rejects_out_of_bounds_indices() {
        let mut items = vec![1, 2, 3];

        let err = shift(&mut items, 3, 0).unwrap_err();
        assert_eq!(*err.as_ref(), OutOfBounds { len: 3, from: 3, to: 0 });
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn persists_the_new_order() {
        let mut items = vec![1, 2, 3];

        block_on(persist_with(&mut items, 2, 0, |reordered| async move {
            assert_eq!(reordered, [3, 1, 2]);
            Ok::<_, &str>(())
        }))
        .unwrap();

        assert_eq!(items, [3, 1, 2]);
    }

    #[test]
    fn restores_the_snapshot_on_persist_failure() {
        let mut items = vec![1, 2, 3];

        let err = block_on(persist_with(&mut items, 2, 0, |_| async move {
            Err::<(), _>("boom")
        }))
        .unwrap_err();

        assert_eq!(*err.as_ref(), Error::Persist("boom"));
        assert_eq!(items, [1, 2, 3]);
    }
}
