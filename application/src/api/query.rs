//! GraphQL [`Query`]s definitions.

use common::{Money, Window};
use juniper::graphql_object;
use service::{
    chips, query, read, selector, selector::Choice, Query as _,
};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the options of the `City` selector.
    ///
    /// When `includeAll` is not `false`, the list is headed by a synthetic
    /// option covering all cities, rendered with a `null` `city`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cities",
            include_all = ?include_all,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn cities(
        include_all: Option<bool>,
        ctx: &Context,
    ) -> Result<Vec<api::location::CityOption>, Error> {
        let catalog = ctx
            .service()
            .execute(query::catalog::Snapshot)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;
        selector::city_options(&catalog, include_all.unwrap_or(true))
            .into_iter()
            .map(|opt| {
                Ok(api::location::CityOption {
                    city: opt.city.cloned().map(Into::into),
                    apartment_count: i32::try_from(opt.apartment_count)
                        .map_err(AsError::into_error)
                        .map_err(ctx.error())?,
                })
            })
            .collect()
    }

    /// Returns the `Apartment`s offered by the `Apartment` selector for the
    /// specified `City`.
    ///
    /// Without a `cityId` all the `Apartment`s are returned.
    #[tracing::instrument(
        skip_all,
        fields(
            city_id = ?city_id.as_ref().map(ToString::to_string),
            gql.name = "apartments",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn apartments(
        city_id: Option<api::location::CityId>,
        ctx: &Context,
    ) -> Result<Vec<api::location::Apartment>, Error> {
        let catalog = ctx
            .service()
            .execute(query::catalog::Snapshot)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;
        let city = city_id.map_or(Choice::All, |id| Choice::One(id.into()));
        Ok(selector::filtered_apartments(&catalog, &city)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Returns the `Listing` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LISTING_NOT_EXISTS` - the `Listing` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "listing",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn listing(
        id: api::listing::Id,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        ctx.service()
            .execute(query::listing::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| ListingError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the window of `Listing`s matching the provided filters.
    ///
    /// The window always starts at the first `Listing` and contains `first`
    /// items at most.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_WINDOW_LIMIT` - the `first` argument is not positive.
    #[tracing::instrument(
        skip_all,
        fields(
            apartment_id = ?apartment_id.as_ref().map(ToString::to_string),
            city_id = ?city_id.as_ref().map(ToString::to_string),
            first = ?first,
            gql.name = "listings",
            otel.name = Self::SPAN_NAME,
            title = ?title.as_ref().map(ToString::to_string),
        ),
    )]
    pub async fn listings(
        first: Option<i32>,
        city_id: Option<api::location::CityId>,
        apartment_id: Option<api::location::ApartmentId>,
        price_min: Option<Money>,
        price_max: Option<Money>,
        title: Option<api::listing::Title>,
        ctx: &Context,
    ) -> Result<api::listing::list::Page, Error> {
        const DEFAULT_WINDOW_LIMIT: i32 = 10;

        let limit = first.unwrap_or(DEFAULT_WINDOW_LIMIT);
        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| *l > 0)
            .ok_or_else(|| api::WindowError::InvalidLimit.into())
            .map_err(ctx.error())?;

        let filter = read::listing::list::Filter {
            city: city_id.map(Into::into),
            apartment: apartment_id.map(Into::into),
            price_min: price_min.map(|m| m.amount),
            price_max: price_max.map(|m| m.amount),
            title: title.map(Into::into),
        };
        let selector = read::listing::list::Selector {
            window: Window::new(limit),
            filter: filter.clone(),
        };
        ctx.service()
            .execute(query::listings::List::by(selector))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|page| api::listing::list::Page { page, filter })
    }

    /// Derives the `FilterChip`s of the provided search parameters.
    ///
    /// Pure projection, so doesn't touch any stored state.
    #[tracing::instrument(
        skip_all,
        fields(
            category = ?category,
            gql.name = "filterChips",
            location = ?location,
            otel.name = Self::SPAN_NAME,
            sort = ?sort,
        ),
    )]
    pub fn filter_chips(
        category: Option<String>,
        location: Option<String>,
        sort: Option<api::chips::Sort>,
    ) -> api::chips::FilterChips {
        let params = chips::SearchParams {
            category,
            location,
            sort: sort.map(Into::into),
        };
        let derived = chips::derive(&params);
        let can_clear_all = chips::can_clear_all(&derived);
        api::chips::FilterChips {
            chips: derived.into_iter().map(Into::into).collect(),
            can_clear_all,
        }
    }
}

define_error! {
    enum ListingError {
        #[code = "LISTING_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Listing` with the specified ID does not exist"]
        NotExists,
    }
}
