//! Properties accepted by `ReportTableComponent`.

use yew::prelude::*;

use super::helpers::default_endpoint;

#[derive(Properties, PartialEq, Clone)]
pub struct ReportTableProps {
    /// URL of the report listing. Read once, on the first render; changing it
    /// later does not trigger another request.
    ///
    /// Defaults to the compile-time `REPORTS_API_URL` or
    /// `http://127.0.0.1:5000/reports`.
    #[prop_or_else(default_endpoint)]
    pub endpoint: AttrValue,
}
