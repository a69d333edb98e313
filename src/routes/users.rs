use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::store::UserStore;

/// List all users as a JSON array. An empty table is `[]` with 200; a store
/// failure surfaces as a 500 JSON error, never an unanswered request.
pub async fn list_users(store: web::Data<dyn UserStore>) -> Result<HttpResponse, ApiError> {
    let users = store.fetch_all().await?;
    Ok(HttpResponse::Ok().json(users))
}
