use super::prelude::*;

#[derive(Default)]
pub struct QuizQueries;

#[Object]
impl QuizQueries {
    /// Get every quiz category
    async fn all_categories(&self, ctx: &Context<'_>) -> Result<Vec<Category>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .categories()
            .list()
            .await
            .map_err(|e| ApiError::store(e).extend())?;

        Ok(records.into_iter().map(Category::from).collect())
    }

    /// Get every quiz
    async fn all_quizzes(&self, ctx: &Context<'_>) -> Result<Vec<Quiz>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .quizzes()
            .list()
            .await
            .map_err(|e| ApiError::store(e).extend())?;

        Ok(records.into_iter().map(Quiz::from).collect())
    }

    /// Get every question
    async fn all_questions(&self, ctx: &Context<'_>) -> Result<Vec<Question>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .questions()
            .list()
            .await
            .map_err(|e| ApiError::store(e).extend())?;

        Ok(records.into_iter().map(Question::from).collect())
    }

    /// Get a single question. Errors with NOT_FOUND when the id does not exist.
    async fn get_question(&self, ctx: &Context<'_>, ques_id: i32) -> Result<Option<Question>> {
        let db = ctx.data_unchecked::<Database>();
        let id = i64::from(ques_id);

        let record = db
            .questions()
            .get_by_id(id)
            .await
            .map_err(|e| ApiError::store(e).extend())?
            .ok_or_else(|| ApiError::not_found("Question", id).extend())?;

        Ok(Some(Question::from(record)))
    }

    /// Get the answers for a question; empty when it has none
    async fn get_all_answers(&self, ctx: &Context<'_>, ques_id: i32) -> Result<Vec<Answer>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .answers()
            .list_by_question(i64::from(ques_id))
            .await
            .map_err(|e| ApiError::store(e).extend())?;

        Ok(records.into_iter().map(Answer::from).collect())
    }
}
