use super::prelude::*;

#[derive(Default)]
pub struct CategoryMutations;

#[Object]
impl CategoryMutations {
    /// Create a quiz category. Names are not required to be unique.
    async fn create_category(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> Result<CreateCategoryPayload> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .categories()
            .create(&name)
            .await
            .map_err(|e| ApiError::store(e).extend())?;

        tracing::info!(category_id = record.id, name = %record.name, "Category created");

        Ok(CreateCategoryPayload {
            category: Category::from(record),
        })
    }
}
