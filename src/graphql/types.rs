//! GraphQL type definitions
//!
//! Each type exposes only the listed fields of its record. Foreign keys are
//! kept as skipped fields and resolved to objects through the loaders.

use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, Result, SimpleObject};

use crate::db::{AnswerRecord, BookRecord, CategoryRecord, QuestionRecord, QuizRecord, UserRecord};

use super::errors::ApiError;
use super::loaders::{CategoryLoader, QuestionLoader, QuizLoader};

/// A book in the library
#[derive(Debug, Clone, SimpleObject)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub summary: String,
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Self {
            id: ID(r.id.to_string()),
            title: r.title,
            summary: r.summary,
        }
    }
}

/// A quiz category
#[derive(Debug, Clone, SimpleObject)]
pub struct Category {
    pub id: ID,
    pub name: String,
}

impl From<CategoryRecord> for Category {
    fn from(r: CategoryRecord) -> Self {
        Self {
            id: ID(r.id.to_string()),
            name: r.name,
        }
    }
}

/// A quiz belonging to a category
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Quiz {
    pub id: ID,
    pub title: String,
    #[graphql(skip)]
    pub category_id: i64,
}

impl From<QuizRecord> for Quiz {
    fn from(r: QuizRecord) -> Self {
        Self {
            id: ID(r.id.to_string()),
            title: r.title,
            category_id: r.category_id,
        }
    }
}

#[ComplexObject]
impl Quiz {
    async fn category(&self, ctx: &Context<'_>) -> Result<Category> {
        let loader = ctx.data_unchecked::<DataLoader<CategoryLoader>>();
        loader
            .load_one(self.category_id)
            .await
            .map_err(|e| ApiError::store(e).extend())?
            .map(Category::from)
            .ok_or_else(|| ApiError::not_found("Category", self.category_id).extend())
    }
}

/// A question within a quiz
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Question {
    pub title: String,
    #[graphql(skip)]
    pub quiz_id: i64,
}

impl From<QuestionRecord> for Question {
    fn from(r: QuestionRecord) -> Self {
        Self {
            title: r.title,
            quiz_id: r.quiz_id,
        }
    }
}

#[ComplexObject]
impl Question {
    async fn quiz(&self, ctx: &Context<'_>) -> Result<Quiz> {
        let loader = ctx.data_unchecked::<DataLoader<QuizLoader>>();
        loader
            .load_one(self.quiz_id)
            .await
            .map_err(|e| ApiError::store(e).extend())?
            .map(Quiz::from)
            .ok_or_else(|| ApiError::not_found("Quiz", self.quiz_id).extend())
    }
}

/// A candidate answer to a question
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Answer {
    pub answer_text: String,
    #[graphql(skip)]
    pub question_id: i64,
}

impl From<AnswerRecord> for Answer {
    fn from(r: AnswerRecord) -> Self {
        Self {
            answer_text: r.answer_text,
            question_id: r.question_id,
        }
    }
}

#[ComplexObject]
impl Answer {
    async fn question(&self, ctx: &Context<'_>) -> Result<Question> {
        let loader = ctx.data_unchecked::<DataLoader<QuestionLoader>>();
        loader
            .load_one(self.question_id)
            .await
            .map_err(|e| ApiError::store(e).extend())?
            .map(Question::from)
            .ok_or_else(|| ApiError::not_found("Question", self.question_id).extend())
    }
}

/// A user account. The password hash is never exposed.
#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub date_joined: String,
    pub last_login: Option<String>,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self {
            id: ID(r.id.to_string()),
            username: r.username,
            email: r.email,
            is_active: r.is_active,
            is_superuser: r.is_superuser,
            date_joined: r.date_joined,
            last_login: r.last_login,
        }
    }
}

/// Result of `createCategory`
#[derive(Debug, Clone, SimpleObject)]
pub struct CreateCategoryPayload {
    pub category: Category,
}

/// Result of `register` and `tokenAuth`. Failures are reported in `errors`.
#[derive(Debug, Clone, SimpleObject)]
pub struct AuthPayload {
    pub success: bool,
    pub errors: Vec<String>,
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthPayload {
    pub fn ok(token: String, user: User) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            errors: vec![msg.into()],
            token: None,
            user: None,
        }
    }
}

/// Result of `verifyToken`
#[derive(Debug, Clone, SimpleObject)]
pub struct VerifyTokenPayload {
    pub success: bool,
    pub errors: Vec<String>,
    pub username: Option<String>,
    /// Expiry as a Unix timestamp
    pub exp: Option<i64>,
}
