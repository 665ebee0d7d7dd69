//! Small pure helpers for the report table.

use common::api::REPORTS_PATH;
use common::model::report::Report;
use std::collections::HashSet;
use yew::virtual_dom::AttrValue;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Listing URL used when the parent does not pass one.
pub fn default_endpoint() -> AttrValue {
    match option_env!("REPORTS_API_URL") {
        Some(url) => AttrValue::from(url),
        None => AttrValue::from(format!("{}{}", DEFAULT_API_BASE, REPORTS_PATH)),
    }
}

/// Google Maps link centred on `location`. The value is inserted as is: no
/// validation, no percent-encoding.
pub fn map_url(location: &str) -> String {
    format!("https://www.google.com.mx/maps/@{},20z?entry=ttu", location)
}

/// First id that appears more than once, in list order.
pub fn first_duplicate_id(records: &[Report]) -> Option<i64> {
    let mut seen = HashSet::with_capacity(records.len());
    records.iter().map(|r| r.id).find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: i64) -> Report {
        Report {
            id,
            description: String::new(),
            fecha: String::new(),
            image_path: None,
            location: String::new(),
        }
    }

    #[test]
    fn map_url_embeds_raw_location() {
        assert_eq!(
            map_url("19.43,-99.13"),
            "https://www.google.com.mx/maps/@19.43,-99.13,20z?entry=ttu"
        );
        // not encoded
        assert_eq!(
            map_url("a b&c"),
            "https://www.google.com.mx/maps/@a b&c,20z?entry=ttu"
        );
    }

    #[test]
    fn default_endpoint_points_at_listing() {
        if option_env!("REPORTS_API_URL").is_none() {
            assert_eq!(&*default_endpoint(), "http://127.0.0.1:5000/reports");
        }
    }

    #[test]
    fn detects_repeated_ids() {
        assert_eq!(first_duplicate_id(&[report(1), report(2), report(3)]), None);
        assert_eq!(first_duplicate_id(&[report(1), report(2), report(1), report(2)]), Some(1));
        assert_eq!(first_duplicate_id(&[]), None);
    }
}
