use serde::{Deserialize, Serialize};

/// One incident entry as stored by the backend and listed by `GET /reports`.
///
/// The JSON shape is part of the contract consumed by the viewer, so the
/// image column keeps its camelCase key (`imagePath`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Row key in the viewer; unique within one listing.
    pub id: i64,
    pub description: String,
    /// Report date as written by the backend. Never parsed by the viewer.
    pub fecha: String,
    /// Name of the uploaded image inside the upload folder.
    /// The viewer does not display it.
    #[serde(rename = "imagePath", default)]
    pub image_path: Option<String>,
    /// Coordinate pair such as `19.43,-99.13`, kept exactly as submitted.
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_listing() {
        let body = r#"[{"id":1,"description":"Pothole","fecha":"2024-01-01","imagePath":"a.png","location":"19.43,-99.13"}]"#;
        let reports: Vec<Report> = serde_json::from_str(body).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, 1);
        assert_eq!(reports[0].image_path.as_deref(), Some("a.png"));
        assert_eq!(reports[0].location, "19.43,-99.13");
    }

    #[test]
    fn image_path_may_be_missing_or_null() {
        let missing: Report = serde_json::from_str(
            r#"{"id":2,"description":"d","fecha":"f","location":"1,2"}"#,
        )
        .unwrap();
        let null: Report = serde_json::from_str(
            r#"{"id":3,"description":"d","fecha":"f","imagePath":null,"location":"1,2"}"#,
        )
        .unwrap();

        assert_eq!(missing.image_path, None);
        assert_eq!(null.image_path, None);
    }

    #[test]
    fn serializes_with_camel_case_image_key() {
        let report = Report {
            id: 7,
            description: "Bache".to_string(),
            fecha: "2024-02-02 10:00:00".to_string(),
            image_path: Some("foto.jpg".to_string()),
            location: "19.4,-99.1".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["imagePath"], "foto.jpg");
        assert!(json.get("image_path").is_none());
    }
}
