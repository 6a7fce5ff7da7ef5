use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object(name = "Query")]
impl BookQueries {
    /// Get every book, ordered by id
    async fn all_books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .books()
            .list()
            .await
            .map_err(|e| ApiError::store(e).extend())?;

        Ok(records.into_iter().map(Book::from).collect())
    }
}
