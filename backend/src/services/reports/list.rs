use crate::config::Settings;
use crate::services::reports::store;
use actix_web::{web, HttpResponse, Responder};
use common::api::ApiError;
use common::model::report::Report;
use log::error;

/// Handler for `GET /reports`.
///
/// - `200 OK` with every stored report as a JSON array.
/// - `500 Internal Server Error` with `{"error": ...}` when the database cannot be read.
pub async fn process(settings: web::Data<Settings>) -> impl Responder {
    match list_reports(&settings).await {
        Ok(reports) => HttpResponse::Ok().json(reports),
        Err(e) => {
            error!("Error listing reports: {}", e);
            HttpResponse::InternalServerError().json(ApiError::new(e))
        }
    }
}

async fn list_reports(settings: &Settings) -> Result<Vec<Report>, String> {
    let db_path = settings.database_path.clone();
    web::block(move || store::get_reports(&db_path))
        .await
        .map_err(|e| e.to_string())?
}
