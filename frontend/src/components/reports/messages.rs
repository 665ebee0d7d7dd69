use common::model::report::Report;

use super::fetch::FetchError;

pub enum Msg {
    /// Outcome of the single request issued on mount.
    FetchFinished(Result<Vec<Report>, FetchError>),
}
