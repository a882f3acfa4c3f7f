//! Client helpers for the users API endpoints. These functions keep endpoint
//! paths centralized; the backend owns all validation and persistence.

#[cfg(target_arch = "wasm32")]
use crate::{
    app_lib::{AppError, api},
    features::users::types::{User, UserPayload},
};

/// Collection endpoint for the users resource. The backend routes carry a
/// trailing slash, which the path builders preserve.
pub(crate) const USERS_COLLECTION: &str = "/api/users/";

/// Builds the resource endpoint for a single user.
pub(crate) fn user_path(id: i64) -> String {
    format!("{USERS_COLLECTION}{id}/")
}

/// Fetches the full user list from the API.
#[cfg(target_arch = "wasm32")]
pub async fn list_users() -> Result<Vec<User>, AppError> {
    api::get_json(USERS_COLLECTION).await
}

/// Creates a user from the given payload. The response body is ignored.
#[cfg(target_arch = "wasm32")]
pub async fn create_user(payload: &UserPayload) -> Result<(), AppError> {
    api::post_json(USERS_COLLECTION, payload).await
}

/// Replaces the user identified by `id` with the given payload.
#[cfg(target_arch = "wasm32")]
pub async fn update_user(id: i64, payload: &UserPayload) -> Result<(), AppError> {
    api::put_json(&user_path(id), payload).await
}

/// Deletes the user identified by `id`.
#[cfg(target_arch = "wasm32")]
pub async fn delete_user(id: i64) -> Result<(), AppError> {
    api::delete_empty(&user_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::{USERS_COLLECTION, user_path};

    #[test]
    fn collection_path_matches_backend_route() {
        assert_eq!(USERS_COLLECTION, "/api/users/");
    }

    #[test]
    fn user_path_keeps_trailing_slash() {
        assert_eq!(user_path(5), "/api/users/5/");
        assert_eq!(user_path(7), "/api/users/7/");
    }
}
