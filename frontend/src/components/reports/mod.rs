//! Report table: lists the incidents stored by the backend.
//!
//! Responsibilities
//! - Re-export `Msg`, `ReportTableProps` and `ReportTableComponent`.
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, issue the single `GET` for the listing inside a
//!   `FetchScope`; on destroy, cancel it so a late response is discarded.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

pub mod fetch;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use fetch::{fetch_reports, FetchScope};
pub use messages::Msg;
pub use props::ReportTableProps;
pub use state::ReportTableComponent;

impl Component for ReportTableComponent {
    type Message = Msg;
    type Properties = ReportTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReportTableComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let scope = FetchScope::begin();
            let handle = scope.handle();
            let signal = scope.signal();
            self.fetch = Some(scope);

            let link = ctx.link().clone();
            let endpoint = ctx.props().endpoint.clone();
            spawn_local(async move {
                let outcome = fetch_reports(&endpoint, signal.as_ref()).await;

                if !handle.is_alive() {
                    return;
                }
                if let Err(e) = &outcome {
                    error!(format!("Error cargando reportes desde {}: {}", endpoint, e));
                }
                handle.deliver(outcome, |outcome| link.send_message(Msg::FetchFinished(outcome)));
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.teardown();
    }
}
