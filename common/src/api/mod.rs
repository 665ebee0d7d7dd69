//! HTTP contract between the viewer and the reports service.
//!
//! Paths, multipart field names and the JSON envelopes returned by the
//! backend live here so both sides agree on them.

use serde::{Deserialize, Serialize};

/// Listing endpoint consumed by the viewer.
pub const REPORTS_PATH: &str = "/reports";

/// Multipart endpoint that stores an image and creates a report.
pub const UPLOAD_PATH: &str = "/upload";

/// Multipart field carrying the image file.
pub const IMAGE_FIELD: &str = "imageFile";
/// Multipart field carrying the coordinate pair.
pub const LOCATION_FIELD: &str = "location";
/// Multipart field carrying the free-form description.
pub const DESCRIPTION_FIELD: &str = "description";

/// Body of a successful upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Body of any failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
