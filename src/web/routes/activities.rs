use axum::{extract::State, Json};

use crate::models::ActivityCatalog;
use crate::services::activities_service::ActivityDirectory;

pub async fn activities_handler(State(directory): State<ActivityDirectory>) -> Json<ActivityCatalog> {
    Json(directory.list())
}
