pub mod auth;
pub mod categories;

pub use auth::AuthMutations;
pub use categories::CategoryMutations;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ErrorExtensions, Object, Result};

    pub(crate) use crate::db::*;
    pub(crate) use crate::graphql::errors::ApiError;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::services::AuthService;
}
