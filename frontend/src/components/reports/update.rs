//! Update function for the report table.
//!
//! The only message is the outcome of the mount's request. It is applied to
//! the view state and always triggers a re-render.

use gloo_console::warn;
use yew::prelude::*;

use super::helpers::first_duplicate_id;
use super::messages::Msg;
use super::state::ReportTableComponent;

pub fn update(
    component: &mut ReportTableComponent,
    _ctx: &Context<ReportTableComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FetchFinished(outcome) => {
            component.apply_outcome(outcome);

            if component.error.is_none() {
                if let Some(id) = first_duplicate_id(&component.records) {
                    warn!(format!(
                        "Report id {} appears more than once; rows are rendered without keys",
                        id
                    ));
                }
            }
            true
        }
    }
}
