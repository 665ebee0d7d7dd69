//! # Reports Service Module
//!
//! Routes consumed by the report viewer and by the reporting form.
//!
//! ## Sub-modules:
//! - `list`: returns every stored report as JSON.
//! - `upload`: receives an image plus location and description, and stores a new report.
//! - `store`: SQLite access shared by both handlers.

mod list;
pub mod store;
mod upload;

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::api::{REPORTS_PATH, UPLOAD_PATH};

/// Configures and returns the Actix `Scope` for report routes.
///
/// # Registered Routes:
///
/// *   **`GET /reports`**: `list::process`. JSON array of reports.
/// *   **`POST /upload`**: `upload::process`. Multipart with `imageFile`,
///     `location` and `description`.
///
/// The scope is mounted at the root so unmatched paths fall through to the
/// application's default service.
pub fn configure_routes() -> Scope {
    scope("")
        .route(REPORTS_PATH, get().to(list::process))
        .route(UPLOAD_PATH, post().to(upload::process))
}
