//! Questions and answers repositories

use anyhow::Result;
use sqlx::{FromRow, SqliteExecutor, SqlitePool};

use super::sqlite_helpers::{in_placeholders, now_iso8601};

/// Question difficulty, stored as an integer scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Fundamental,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn as_i64(self) -> i64 {
        match self {
            Difficulty::Fundamental => 0,
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
            Difficulty::Expert => 4,
        }
    }

    /// Map a stored value back; out-of-range values clamp to the nearest end.
    pub fn from_i64(value: i64) -> Self {
        match value {
            i64::MIN..=0 => Difficulty::Fundamental,
            1 => Difficulty::Beginner,
            2 => Difficulty::Intermediate,
            3 => Difficulty::Advanced,
            _ => Difficulty::Expert,
        }
    }
}

/// Question record from database
#[derive(Debug, Clone, FromRow)]
pub struct QuestionRecord {
    pub id: i64,
    pub quiz_id: i64,
    pub title: String,
    pub difficulty: i64,
    pub is_active: bool,
    pub created_at: String,
}

/// Data for creating a new question
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub quiz_id: i64,
    pub title: String,
    pub difficulty: Difficulty,
    pub is_active: bool,
}

/// Answer record from database
#[derive(Debug, Clone, FromRow)]
pub struct AnswerRecord {
    pub id: i64,
    pub question_id: i64,
    pub answer_text: String,
    pub is_right: bool,
    pub created_at: String,
}

/// Data for creating a new answer
#[derive(Debug, Clone)]
pub struct CreateAnswer {
    pub question_id: i64,
    pub answer_text: String,
    pub is_right: bool,
}

const QUESTION_COLUMNS: &str = "id, quiz_id, title, difficulty, is_active, created_at";

pub struct QuestionRepository {
    pool: SqlitePool,
}

impl QuestionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every question in id order
    pub async fn list(&self) -> Result<Vec<QuestionRecord>> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        let records = sqlx::query_as::<_, QuestionRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Get a question by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<QuestionRecord>> {
        let sql = format!("SELECT {} FROM questions WHERE id = ?", QUESTION_COLUMNS);
        let record = sqlx::query_as::<_, QuestionRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Get all questions whose id is in `ids` (batch lookup for loaders)
    pub async fn get_many(&self, ids: &[i64]) -> Result<Vec<QuestionRecord>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE id IN ({})",
            QUESTION_COLUMNS,
            in_placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, QuestionRecord>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Insert a question. Fails if `quiz_id` does not reference a quiz.
    pub async fn create(&self, input: CreateQuestion) -> Result<QuestionRecord> {
        Self::insert(&self.pool, input).await
    }

    /// Insert through any executor, e.g. an open transaction
    pub async fn insert<'e>(
        executor: impl SqliteExecutor<'e>,
        input: CreateQuestion,
    ) -> Result<QuestionRecord> {
        let sql = format!(
            r#"
            INSERT INTO questions (quiz_id, title, difficulty, is_active, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        );
        let record = sqlx::query_as::<_, QuestionRecord>(&sql)
            .bind(input.quiz_id)
            .bind(&input.title)
            .bind(input.difficulty.as_i64())
            .bind(input.is_active)
            .bind(now_iso8601())
            .fetch_one(executor)
            .await?;

        Ok(record)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

pub struct AnswerRepository {
    pool: SqlitePool,
}

impl AnswerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List answers belonging to a question. Unknown question ids yield an empty list.
    pub async fn list_by_question(&self, question_id: i64) -> Result<Vec<AnswerRecord>> {
        let records = sqlx::query_as::<_, AnswerRecord>(
            r#"
            SELECT id, question_id, answer_text, is_right, created_at
            FROM answers
            WHERE question_id = ?
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Insert an answer. Fails if `question_id` does not reference a question.
    pub async fn create(&self, input: CreateAnswer) -> Result<AnswerRecord> {
        Self::insert(&self.pool, input).await
    }

    /// Insert through any executor, e.g. an open transaction
    pub async fn insert<'e>(
        executor: impl SqliteExecutor<'e>,
        input: CreateAnswer,
    ) -> Result<AnswerRecord> {
        let record = sqlx::query_as::<_, AnswerRecord>(
            r#"
            INSERT INTO answers (question_id, answer_text, is_right, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, question_id, answer_text, is_right, created_at
            "#,
        )
        .bind(input.question_id)
        .bind(&input.answer_text)
        .bind(input.is_right)
        .bind(now_iso8601())
        .fetch_one(executor)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{CreateQuiz, Database};

    async fn setup_question(db: &Database) -> QuestionRecord {
        let category = db.categories().create("Science").await.unwrap();
        let quiz = db
            .quizzes()
            .create(CreateQuiz {
                title: "Physics".to_string(),
                category_id: category.id,
            })
            .await
            .unwrap();
        db.questions()
            .create(CreateQuestion {
                quiz_id: quiz.id,
                title: "What is the unit of force?".to_string(),
                difficulty: Difficulty::Intermediate,
                is_active: true,
            })
            .await
            .unwrap()
    }

    #[test]
    fn test_difficulty_scale() {
        for d in [
            Difficulty::Fundamental,
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
            Difficulty::Expert,
        ] {
            assert_eq!(Difficulty::from_i64(d.as_i64()), d);
        }
        assert_eq!(Difficulty::from_i64(-3), Difficulty::Fundamental);
        assert_eq!(Difficulty::from_i64(12), Difficulty::Expert);
        assert_eq!(Difficulty::Advanced.to_string(), "advanced");
    }

    #[tokio::test]
    async fn test_question_fields_are_stored() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.sync_schema().await.unwrap();
        let created = setup_question(&db).await;

        let fetched = db.questions().get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "What is the unit of force?");
        assert_eq!(Difficulty::from_i64(fetched.difficulty), Difficulty::Intermediate);
        assert!(fetched.is_active);

        assert!(db.questions().get_by_id(created.id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_answers_filtered_by_question() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.sync_schema().await.unwrap();
        let question = setup_question(&db).await;

        for (text, right) in [("Newton", true), ("Joule", false)] {
            db.answers()
                .create(CreateAnswer {
                    question_id: question.id,
                    answer_text: text.to_string(),
                    is_right: right,
                })
                .await
                .unwrap();
        }

        let answers = db.answers().list_by_question(question.id).await.unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].answer_text, "Newton");
        assert!(answers[0].is_right);
        assert!(!answers[1].is_right);
        assert!(chrono::DateTime::parse_from_rfc3339(&answers[0].created_at).is_ok());

        assert!(db.answers().list_by_question(question.id + 1).await.unwrap().is_empty());
    }
}
