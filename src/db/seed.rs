//! Demonstration data for a fresh database.
//!
//! Runs only when the `books` and `categories` tables are both empty, so a
//! second `--seed` leaves existing data untouched.

use anyhow::Result;
use tracing::{debug, info};

use super::{
    AnswerRepository, BookRepository, CategoryRepository, CreateAnswer, CreateBook,
    CreateQuestion, CreateQuiz, Database, Difficulty, QuestionRepository, QuizRepository,
};

/// Result of running seed operations.
#[derive(Debug, Default)]
pub struct SeedResult {
    pub books: usize,
    pub categories: usize,
    pub quizzes: usize,
    pub questions: usize,
    pub answers: usize,
}

impl SeedResult {
    pub fn is_empty(&self) -> bool {
        self.books + self.categories + self.quizzes + self.questions + self.answers == 0
    }
}

struct SeedQuestion {
    title: &'static str,
    difficulty: Difficulty,
    answers: &'static [(&'static str, bool)],
}

struct SeedQuiz {
    category: &'static str,
    title: &'static str,
    questions: &'static [SeedQuestion],
}

const BOOKS: &[(&str, &str)] = &[
    (
        "The Rust Programming Language",
        "An introduction to Rust covering ownership, traits and concurrency.",
    ),
    (
        "Designing Data-Intensive Applications",
        "Storage engines, replication and stream processing explained.",
    ),
    (
        "Structure and Interpretation of Computer Programs",
        "Abstraction and evaluation, taught through Scheme.",
    ),
];

const QUIZZES: &[SeedQuiz] = &[
    SeedQuiz {
        category: "Science",
        title: "Basic Physics",
        questions: &[
            SeedQuestion {
                title: "What is the SI unit of force?",
                difficulty: Difficulty::Fundamental,
                answers: &[("Newton", true), ("Joule", false), ("Watt", false)],
            },
            SeedQuestion {
                title: "What is the speed of light in vacuum, in km/s (approx.)?",
                difficulty: Difficulty::Beginner,
                answers: &[("300,000", true), ("150,000", false), ("30,000", false)],
            },
        ],
    },
    SeedQuiz {
        category: "Programming",
        title: "Rust Basics",
        questions: &[SeedQuestion {
            title: "Which keyword makes a binding mutable?",
            difficulty: Difficulty::Fundamental,
            answers: &[("mut", true), ("var", false), ("let", false)],
        }],
    },
];

/// Insert the demonstration rows unless data already exists.
///
/// Everything is written in one transaction, so a failed run leaves the
/// tables empty and the next run starts over.
pub async fn run_seeds(db: &Database) -> Result<SeedResult> {
    let mut result = SeedResult::default();

    if db.books().count().await? > 0 || db.categories().count().await? > 0 {
        debug!("Database already has data, skipping seed");
        return Ok(result);
    }

    let mut tx = db.pool().begin().await?;

    for (title, summary) in BOOKS {
        BookRepository::insert(
            &mut *tx,
            CreateBook {
                title: title.to_string(),
                summary: summary.to_string(),
            },
        )
        .await?;
        result.books += 1;
    }

    let mut category_ids: Vec<(&str, i64)> = Vec::new();
    for quiz in QUIZZES {
        let category_id = match category_ids.iter().find(|(name, _)| *name == quiz.category) {
            Some((_, id)) => *id,
            None => {
                let category = CategoryRepository::insert(&mut *tx, quiz.category).await?;
                category_ids.push((quiz.category, category.id));
                result.categories += 1;
                category.id
            }
        };

        let record = QuizRepository::insert(
            &mut *tx,
            CreateQuiz {
                title: quiz.title.to_string(),
                category_id,
            },
        )
        .await?;
        result.quizzes += 1;

        for question in quiz.questions {
            let q = QuestionRepository::insert(
                &mut *tx,
                CreateQuestion {
                    quiz_id: record.id,
                    title: question.title.to_string(),
                    difficulty: question.difficulty,
                    is_active: true,
                },
            )
            .await?;
            result.questions += 1;

            for (text, is_right) in question.answers {
                AnswerRepository::insert(
                    &mut *tx,
                    CreateAnswer {
                        question_id: q.id,
                        answer_text: text.to_string(),
                        is_right: *is_right,
                    },
                )
                .await?;
                result.answers += 1;
            }
        }
    }

    tx.commit().await?;

    info!(
        books = result.books,
        categories = result.categories,
        quizzes = result.quizzes,
        questions = result.questions,
        answers = result.answers,
        "Seed data applied"
    );

    Ok(result)
}
