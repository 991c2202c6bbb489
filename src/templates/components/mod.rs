use maud::{html, Markup};

pub mod charts;
pub mod error;

pub use charts::{bar_chart, line_chart, Datum};
pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Headline figure with a caption, as used in the stat rows.
pub fn stat_card(caption: &str, value: &str, note: Option<&str>, accent: &str) -> Markup {
    html! {
        div class=(format!("card stat {accent}")) {
            p class="stat-caption" { (caption) }
            p class="stat-value" { (value) }
            @if let Some(note) = note {
                p class="stat-note" { (note) }
            }
        }
    }
}
