//! Schema registry
//!
//! Two independent schemas: one for books, one for quizzes plus user
//! accounts. They share the database but no types or resolvers.

use async_graphql::dataloader::DataLoader;
use async_graphql::extensions::Tracing;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::db::Database;
use crate::services::AuthService;

use super::loaders::{CategoryLoader, QuestionLoader, QuizLoader};
use super::mutations::{AuthMutations, CategoryMutations};
use super::queries::{BookQueries, QuizQueries, UserQueries};

/// Schema served at `/books/`
pub type BooksSchema = Schema<BookQueries, EmptyMutation, EmptySubscription>;

/// Schema served at `/quiz/`
pub type QuizSchema = Schema<QuizQueryRoot, QuizMutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QuizQueryRoot(QuizQueries, UserQueries);

#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct QuizMutationRoot(CategoryMutations, AuthMutations);

/// Build the books schema
pub fn build_books_schema(db: Database) -> BooksSchema {
    Schema::build(BookQueries, EmptyMutation, EmptySubscription)
        .extension(Tracing)
        .data(db)
        .finish()
}

/// Build the quiz schema with its relation loaders and the auth service
pub fn build_quiz_schema(db: Database, auth: AuthService) -> QuizSchema {
    Schema::build(
        QuizQueryRoot::default(),
        QuizMutationRoot::default(),
        EmptySubscription,
    )
    .extension(Tracing)
    .data(DataLoader::new(CategoryLoader::new(db.clone()), tokio::spawn))
    .data(DataLoader::new(QuizLoader::new(db.clone()), tokio::spawn))
    .data(DataLoader::new(QuestionLoader::new(db.clone()), tokio::spawn))
    .data(auth)
    .data(db)
    .finish()
}
