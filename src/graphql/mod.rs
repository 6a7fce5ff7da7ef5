//! GraphQL API
//!
//! Two endpoints built with async-graphql: `/books/` exposes the book list,
//! `/quiz/` exposes categories, quizzes, questions, answers and user accounts.
//! Resolvers are explicit methods on the root objects in `queries/` and
//! `mutations/`, combined per endpoint in `schema.rs`.

pub mod auth;
pub mod errors;
pub mod loaders;
pub mod mutations;
pub mod queries;
pub mod schema;
pub mod service;
pub mod types;

pub use auth::{AuthUser, extract_token, verify_token};
pub use errors::ApiError;
pub use schema::{BooksSchema, QuizSchema, build_books_schema, build_quiz_schema};
pub use service::GraphqlService;
