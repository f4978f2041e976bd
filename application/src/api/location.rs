//! Location catalog related definitions.

use common::Localized as _;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;

use crate::{api, api::scalar, Context};

/// A city listings can be searched in.
#[derive(Clone, Debug, From)]
pub struct City(domain::City);

/// A city listings can be searched in.
#[graphql_object(context = Context)]
impl City {
    /// Unique identifier of this `City`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "City.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> CityId {
        self.0.id.clone().into()
    }

    /// Canonical name of this `City`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "City.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name(&self) -> String {
        self.0.name.to_string()
    }

    /// Korean name of this `City`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "City.nameKo",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name_ko(&self) -> Option<String> {
        self.0.name_ko.as_ref().map(ToString::to_string)
    }

    /// Name of this `City` to display, preferring the Korean one.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "City.displayName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn display_name(&self) -> String {
        self.0.display_name().to_owned()
    }
}

/// Unique identifier of a `City`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "CityId", with = scalar::Via::<domain::city::Id>)]
pub struct CityId(domain::city::Id);

/// Option of a `City` selector, with its apartment count.
#[derive(Clone, Debug)]
pub struct CityOption {
    /// [`City`] of this option, if it's not the synthetic "all" one.
    pub city: Option<City>,

    /// Number of apartments covered by this option.
    pub apartment_count: i32,
}

/// Option of a `City` selector.
#[graphql_object(context = Context)]
impl CityOption {
    /// `City` of this option.
    ///
    /// `null` for the synthetic option covering all cities.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "CityOption.city",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn city(&self) -> Option<&City> {
        self.city.as_ref()
    }

    /// Number of apartments covered by this option.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "CityOption.apartmentCount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn apartment_count(&self) -> i32 {
        self.apartment_count
    }
}

/// An apartment complex listings can be attached to.
#[derive(Clone, Debug, From)]
pub struct Apartment(domain::Apartment);

/// An apartment complex listings can be attached to.
#[graphql_object(context = Context)]
impl Apartment {
    /// Unique identifier of this `Apartment`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Apartment.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> ApartmentId {
        self.0.id.clone().into()
    }

    /// Canonical name of this `Apartment`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Apartment.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name(&self) -> String {
        self.0.name.to_string()
    }

    /// Korean name of this `Apartment`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Apartment.nameKo",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name_ko(&self) -> Option<String> {
        self.0.name_ko.as_ref().map(ToString::to_string)
    }

    /// Name of this `Apartment` to display, preferring the Korean one.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Apartment.displayName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn display_name(&self) -> String {
        self.0.display_name().to_owned()
    }

    /// Unique identifier of the `City` this `Apartment` is located in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Apartment.cityId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn city_id(&self) -> CityId {
        self.0.city_id.clone().into()
    }

    /// District of this `Apartment` to display, preferring the Korean one.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Apartment.displayDistrict",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn display_district(&self) -> Option<String> {
        self.0.display_district().map(ToString::to_string)
    }
}

/// Unique identifier of an `Apartment`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "ApartmentId", with = scalar::Via::<domain::apartment::Id>)]
pub struct ApartmentId(domain::apartment::Id);
