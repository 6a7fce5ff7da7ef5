use super::prelude::*;

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    /// Get the user identified by the request token, or null when anonymous
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(auth_user) = ctx.try_auth_user() else {
            return Ok(None);
        };
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .users()
            .get_by_id(auth_user.user_id)
            .await
            .map_err(|e| ApiError::store(e).extend())?;

        Ok(record.filter(|u| u.is_active).map(User::from))
    }

    /// Look up a user by id
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let Ok(user_id) = id.parse::<i64>() else {
            return Ok(None);
        };
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .users()
            .get_by_id(user_id)
            .await
            .map_err(|e| ApiError::store(e).extend())?;

        Ok(record.map(User::from))
    }

    /// List users, optionally filtered by exact username, email, or active flag
    async fn users(
        &self,
        ctx: &Context<'_>,
        username: Option<String>,
        email: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Vec<User>> {
        let db = ctx.data_unchecked::<Database>();
        let filter = UserFilter {
            username,
            email,
            is_active,
        };

        let records = db
            .users()
            .list(&filter)
            .await
            .map_err(|e| ApiError::store(e).extend())?;

        Ok(records.into_iter().map(User::from).collect())
    }
}
