pub mod books;
pub mod quizzes;
pub mod users;

pub use books::BookQueries;
pub use quizzes::QuizQueries;
pub use users::UserQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

    pub(crate) use crate::db::*;
    pub(crate) use crate::graphql::auth::AuthExt;
    pub(crate) use crate::graphql::errors::ApiError;
    pub(crate) use crate::graphql::types::*;
}
