//! View rendering for the report table.
//!
//! Rendering is split in two steps so the decision can be tested without a
//! DOM: `screen` maps the current state to what should be shown, `render`
//! turns that into markup.
//!
//! Notes
//! - User-facing text is in Spanish.
//! - The three filter selects are display-only. They have no handlers and do
//!   not change the rows or the request.
//! - The reference column shows a static image icon; uploaded images are not
//!   loaded.

use common::model::report::Report;
use yew::prelude::*;

use super::helpers::{first_duplicate_id, map_url};
use super::state::ReportTableComponent;

pub const ERROR_MESSAGE: &str = "Ha ocurrido un error";

pub const HEADERS: [&str; 5] = [
    "id",
    "Descripción",
    "Fecha de reporte",
    "Ubicación",
    "Referencia",
];

/// Inert filter selects: label and options.
const FILTERS: [(&str, &[&str]); 3] = [
    ("Tipo de evento", &["Default select"]),
    ("Zona", &["Default select"]),
    ("Fecha", &["Recientes", "Antiguos"]),
];

/// One table row, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Virtual DOM key. `None` when the listing contains repeated ids, in
    /// which case the rows are reconciled by position.
    pub key: Option<String>,
    pub id: String,
    pub description: String,
    pub fecha: String,
    pub map_url: String,
}

/// What the component shows. Exactly one of the two at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Error,
    Table(Vec<ReportRow>),
}

pub fn view(component: &ReportTableComponent, _ctx: &Context<ReportTableComponent>) -> Html {
    render(&screen(component))
}

/// The error takes precedence over any records still held.
pub fn screen(component: &ReportTableComponent) -> Screen {
    if component.error.is_some() {
        Screen::Error
    } else {
        Screen::Table(build_rows(&component.records))
    }
}

/// One row per record, in the order received. Nothing is deduplicated.
pub fn build_rows(records: &[Report]) -> Vec<ReportRow> {
    let keyed = first_duplicate_id(records).is_none();

    records
        .iter()
        .map(|r| ReportRow {
            key: keyed.then(|| r.id.to_string()),
            id: r.id.to_string(),
            description: r.description.clone(),
            fecha: r.fecha.clone(),
            map_url: map_url(&r.location),
        })
        .collect()
}

pub fn render(screen: &Screen) -> Html {
    match screen {
        Screen::Error => html! { <p>{ ERROR_MESSAGE }</p> },
        Screen::Table(rows) => html! {
            <div class="content">
                { build_filters() }
                { build_table(rows) }
            </div>
        },
    }
}

fn build_filters() -> Html {
    html! {
        <div class="filter">
            { for FILTERS.iter().map(|(label, options)| html! {
                <label>
                    { *label }
                    <select class="form-control">
                        { for options.iter().map(|option| html! { <option>{ *option }</option> }) }
                    </select>
                </label>
            }) }
        </div>
    }
}

fn build_table(rows: &[ReportRow]) -> Html {
    html! {
        <div class="table-responsive">
            <table class="table table-hover">
                <thead class="table-primary">
                    <tr>
                        { for HEADERS.iter().map(|h| html! { <th scope="col">{ *h }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(build_row) }
                </tbody>
            </table>
        </div>
    }
}

fn build_row(row: &ReportRow) -> Html {
    let cells = html! {
        <>
            <th scope="row">{ row.id.clone() }</th>
            <td>{ row.description.clone() }</td>
            <td>{ row.fecha.clone() }</td>
            <td>
                <div class="centered-content">
                    <a class="icon-container" href={ row.map_url.clone() }>
                        <i class="fa-solid fa-map-location-dot"></i>
                    </a>
                </div>
            </td>
            <td>
                <div class="centered-content">
                    <div class="icon-container">
                        <i class="fa-regular fa-image"></i>
                    </div>
                </div>
            </td>
        </>
    };

    match &row.key {
        Some(key) => html! { <tr key={ key.clone() }>{ cells }</tr> },
        None => html! { <tr>{ cells }</tr> },
    }
}
