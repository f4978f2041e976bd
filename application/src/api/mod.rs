//! GraphQL API definitions.

pub mod chips;
pub mod listing;
pub mod location;
mod mutation;
mod query;
pub mod scalar;

use juniper::EmptySubscription;

use crate::{define_error, Context};

pub use self::{
    listing::Listing,
    location::{Apartment, City},
    mutation::Mutation,
    query::Query,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

define_error! {
    enum WindowError {
        #[code = "INVALID_WINDOW_LIMIT"]
        #[status = BAD_REQUEST]
        #[message = "Window limit must be positive"]
        InvalidLimit,
    }
}
