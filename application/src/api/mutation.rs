//! GraphQL [`Mutation`]s definitions.

use juniper::graphql_object;
use service::{command, Command as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Moves the `ListingImage` at the `from` position of the specified
    /// `Listing`'s gallery to the `to` position, and returns the whole
    /// gallery in its new order.
    ///
    /// Positions of the returned `ListingImage`s are renumbered
    /// sequentially from zero.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `REORDER_OUT_OF_BOUNDS` - `from` or `to` doesn't point at an
    ///                             existing `ListingImage`.
    #[tracing::instrument(
        skip_all,
        fields(
            from = %from,
            gql.name = "reorderListingImages",
            listing_id = %listing_id,
            otel.name = Self::SPAN_NAME,
            to = %to,
        ),
    )]
    pub async fn reorder_listing_images(
        listing_id: api::listing::Id,
        from: i32,
        to: i32,
        ctx: &Context,
    ) -> Result<Vec<api::listing::Image>, Error> {
        let from = usize::try_from(from)
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;
        let to = usize::try_from(to)
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::ReorderListingImages {
                listing: listing_id.into(),
                from,
                to,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|images| images.into_iter().map(Into::into).collect())
    }
}

impl AsError for command::reorder_listing_images::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "REORDER_OUT_OF_BOUNDS"]
                #[status = BAD_REQUEST]
                #[message = "Requested positions don't point at existing \
                             `ListingImage`s"]
                OutOfBounds,
            }
        }

        match self {
            Self::Database(e) => e.try_as_error(),
            Self::OutOfBounds(_) => Some(Error::OutOfBounds.into()),
        }
    }
}
