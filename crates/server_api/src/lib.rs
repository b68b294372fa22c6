use shared::{
    domain::{UserId, UserRecord},
    error::{ApiError, ErrorCode},
    protocol::UserPayload,
};
use storage::Storage;
use tracing::info;

#[derive(Clone)]
pub struct ApiContext {
    pub storage: Storage,
    /// Label used as the `{backend}` path segment.
    pub backend_name: String,
}

pub async fn list_users(ctx: &ApiContext) -> Result<Vec<UserRecord>, ApiError> {
    ctx.storage.list_users().await.map_err(internal)
}

pub async fn get_user(ctx: &ApiContext, user_id: UserId) -> Result<UserRecord, ApiError> {
    ctx.storage
        .get_user(user_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| ApiError::not_found("User not found"))
}

pub async fn create_user(ctx: &ApiContext, payload: &UserPayload) -> Result<UserRecord, ApiError> {
    let user = ctx.storage.create_user(payload).await.map_err(internal)?;
    info!(user_id = user.id.0, "user created");
    Ok(user)
}

/// Updating an id with no row is accepted; the write simply touches nothing.
pub async fn update_user(
    ctx: &ApiContext,
    user_id: UserId,
    payload: &UserPayload,
) -> Result<(), ApiError> {
    let touched = ctx
        .storage
        .update_user(user_id, payload)
        .await
        .map_err(internal)?;
    info!(user_id = user_id.0, touched, "user updated");
    Ok(())
}

pub async fn delete_user(ctx: &ApiContext, user_id: UserId) -> Result<(), ApiError> {
    let removed = ctx.storage.delete_user(user_id).await.map_err(internal)?;
    if !removed {
        return Err(ApiError::not_found("User not found"));
    }
    info!(user_id = user_id.0, "user deleted");
    Ok(())
}

fn internal(err: anyhow::Error) -> ApiError {
    ApiError::new(ErrorCode::Internal, format!("{err:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> ApiContext {
        let storage = Storage::new("sqlite::memory:").await.expect("db");
        ApiContext {
            storage,
            backend_name: "rust".into(),
        }
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let ctx = setup().await;
        let err = get_user(&ctx, UserId(404)).await.expect_err("should fail");
        assert!(matches!(err.code, ErrorCode::NotFound));
    }

    #[tokio::test]
    async fn create_then_list_returns_record() {
        let ctx = setup().await;
        let created = create_user(&ctx, &UserPayload::new("alice", "a@example.com"))
            .await
            .expect("create");

        let users = list_users(&ctx).await.expect("list");
        assert_eq!(users, vec![created]);
    }

    #[tokio::test]
    async fn update_of_missing_user_is_accepted() {
        let ctx = setup().await;
        update_user(&ctx, UserId(77), &UserPayload::new("x", "y"))
            .await
            .expect("update");
        assert!(list_users(&ctx).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_user_is_not_found() {
        let ctx = setup().await;
        let created = create_user(&ctx, &UserPayload::new("bob", "b@example.com"))
            .await
            .expect("create");

        delete_user(&ctx, created.id).await.expect("delete");
        let err = delete_user(&ctx, created.id)
            .await
            .expect_err("second delete");
        assert!(matches!(err.code, ErrorCode::NotFound));
    }
}
