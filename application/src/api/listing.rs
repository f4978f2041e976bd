//! [`Listing`]-related definitions.

use std::future;

use common::{DateTime, Handler as _, Money};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::location, api::scalar, AsError, Context, Error};

/// A property listing.
#[derive(Clone, Debug)]
pub struct Listing {
    /// ID of this [`Listing`].
    id: Id,

    /// Underlying [`domain::Listing`].
    listing: OnceCell<domain::Listing>,
}

impl From<domain::Listing> for Listing {
    fn from(listing: domain::Listing) -> Self {
        Self {
            id: listing.id.into(),
            listing: OnceCell::new_with(Some(listing)),
        }
    }
}

impl Listing {
    /// Creates a new [`Listing`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Listing`] with the provided ID exists,
    /// otherwise accessing this [`Listing`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            listing: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Listing`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Listing`] doesn't exist.
    async fn listing(&self, ctx: &Context) -> Result<&domain::Listing, Error> {
        let id = self.id.into();
        self.listing
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::listing::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|l| {
                        future::ready(l.ok_or_else(|| {
                            api::query::ListingError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A property listing.
#[graphql_object(context = Context)]
impl Listing {
    /// Unique identifier of this `Listing`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Listing.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Title of this `Listing`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Listing.title",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn title(&self, ctx: &Context) -> Result<Title, Error> {
        Ok(self.listing(ctx).await?.title.clone().into())
    }

    /// Asking price of this `Listing`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Listing.price",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn price(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.listing(ctx).await?.price)
    }

    /// Unique identifier of the `City` this `Listing` is located in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Listing.cityId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn city_id(
        &self,
        ctx: &Context,
    ) -> Result<location::CityId, Error> {
        Ok(self.listing(ctx).await?.city_id.clone().into())
    }

    /// Unique identifier of the `Apartment` this `Listing` is attached to.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Listing.apartmentId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn apartment_id(
        &self,
        ctx: &Context,
    ) -> Result<Option<location::ApartmentId>, Error> {
        Ok(self
            .listing(ctx)
            .await?
            .apartment_id
            .clone()
            .map(Into::into))
    }

    /// `DateTime` when this `Listing` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Listing.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.listing(ctx).await?.created_at.coerce())
    }

    /// `Image`s of this `Listing`, in their gallery order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Listing.images",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn images(&self, ctx: &Context) -> Result<Vec<Image>, Error> {
        ctx.service()
            .execute(query::listing::Images::by(self.id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|images| images.into_iter().map(Into::into).collect())
    }
}

/// Unique identifier of a `Listing`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::listing::Id)]
#[into(domain::listing::Id)]
#[graphql(name = "ListingId", transparent)]
pub struct Id(Uuid);

/// Title of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "ListingTitle", with = scalar::Via::<domain::listing::Title>)]
pub struct Title(domain::listing::Title);

/// Photo attached to a `Listing`.
#[derive(Clone, Debug, From)]
pub struct Image(domain::listing::Image);

/// Photo attached to a `Listing`.
#[graphql_object(name = "ListingImage", context = Context)]
impl Image {
    /// Unique identifier of this `ListingImage`.
    #[must_use]
    pub fn id(&self) -> ImageId {
        self.0.id.into()
    }

    /// Public URL of this `ListingImage`.
    #[must_use]
    pub fn url(&self) -> String {
        self.0.url.to_string()
    }

    /// Position of this `ListingImage` in the gallery ordering.
    #[must_use]
    pub fn position(&self) -> i32 {
        i32::from(self.0.position)
    }
}

/// Unique identifier of a `ListingImage`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::listing::ImageId)]
#[into(domain::listing::ImageId)]
#[graphql(name = "ListingImageId", transparent)]
pub struct ImageId(Uuid);

pub mod list {
    //! Definitions related to the [`Listing`] list.

    use common::Page as WindowPage;
    use juniper::graphql_object;
    use service::{query, read, Query as _};

    use super::Listing;
    use crate::{AsError, Context, Error};

    /// Window of the `Listing` list.
    #[derive(Clone, Debug)]
    pub struct Page {
        /// Underlying window of [`Listing`] IDs.
        pub(crate) page: WindowPage<read::listing::list::Node>,

        /// [`read::listing::list::Filter`] the window was selected with.
        pub(crate) filter: read::listing::list::Filter,
    }

    /// Window of the `Listing` list.
    #[graphql_object(name = "ListingListPage", context = Context)]
    impl Page {
        /// `Listing`s of this `ListingListPage`.
        #[must_use]
        pub fn nodes(&self) -> Vec<Listing> {
            self.page
                .nodes
                .iter()
                .copied()
                .map(|id| {
                    #[expect(
                        unsafe_code,
                        reason = "node loaded from repository guarantees \
                                  `Listing` existence"
                    )]
                    unsafe {
                        Listing::new_unchecked(id)
                    }
                })
                .collect()
        }

        /// Indicator whether more `Listing`s remain beyond this window.
        #[must_use]
        pub fn has_more(&self) -> bool {
            self.page.has_more
        }

        /// Total count of `Listing`s matching the filter.
        pub async fn total_count(&self, ctx: &Context) -> Result<i32, Error> {
            ctx.service()
                .execute(query::listings::TotalCount::by(self.filter.clone()))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())
                .map(Into::into)
        }
    }
}
