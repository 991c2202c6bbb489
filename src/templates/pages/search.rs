use crate::domain::filter::{PRICE_CEILING, PRICE_FLOOR, PRICE_STEP};
use crate::domain::{FilterState, PropertyRecord, SaleCondition, Summary, TypeFilter};
use crate::templates::format::{euro_full, euro_k, medium_date};
use crate::templates::stat_card;
use maud::{html, Markup};

/// Rows shown in the "Recent Sales" list.
pub const RESULTS_PREVIEW_LIMIT: usize = 8;

pub fn search_view(filter: &FilterState, records: &[&PropertyRecord], summary: &Summary) -> Markup {
    html! {
        (filter_form(filter))

        div class="stat-row" {
            (stat_card("Total Sales", &summary.count.to_string(), None, "blue"))
            (stat_card("Average Price", &euro_k(summary.average_price), None, "green"))
            (stat_card("Market Status", "+12.5%", Some("vs last year"), "purple"))
        }

        section class="card results" {
            div class="results-head" {
                h2 { "Recent Sales" }
                p class="muted" { "Showing " (summary.count) " properties" }
                a class="export-link" href="/export" { "Download .xlsx" }
            }
            @if records.is_empty() {
                p class="empty" { "No sales match these filters." }
            }
            ul class="sales" {
                @for record in records.iter().take(RESULTS_PREVIEW_LIMIT) {
                    (sale_row(record))
                }
            }
        }
    }
}

fn filter_form(filter: &FilterState) -> Markup {
    let range = filter.price_range;

    html! {
        form class="card filters" method="get" action="/filter" {
            div class="filter-grid" {
                div class="field wide" {
                    label for="q" { "Search by Address" }
                    input
                        type="text"
                        id="q"
                        name="q"
                        value=(filter.search_term)
                        placeholder="Enter street name, area, or postcode...";
                }
                div class="field" {
                    label for="type" { "Property Type" }
                    select id="type" name="type" onchange="this.form.submit()" {
                        @for (choice, label) in TypeFilter::OPTIONS {
                            option value=(choice.as_str()) selected[choice == filter.selected_type] { (label) }
                        }
                    }
                }
            }

            div class="field" {
                label { "Price Range: " (euro_full(range.min)) " - " (euro_full(range.max)) }
                div class="range-pair" {
                    input
                        type="range"
                        name="min"
                        aria-label="Minimum price"
                        min=(PRICE_FLOOR)
                        max=(PRICE_CEILING)
                        step=(PRICE_STEP)
                        value=(range.min)
                        onchange="this.form.submit()";
                    input
                        type="range"
                        name="max"
                        aria-label="Maximum price"
                        min=(PRICE_FLOOR)
                        max=(PRICE_CEILING)
                        step=(PRICE_STEP)
                        value=(range.max)
                        onchange="this.form.submit()";
                }
                @if range.is_inverted() {
                    p class="hint" { "Minimum is above maximum, so nothing can match." }
                }
            }

            div class="actions" {
                button type="submit" class="primary" { "Apply" }
                a href="/filter/reset" class="secondary" { "Reset" }
            }
        }
    }
}

fn sale_row(record: &PropertyRecord) -> Markup {
    let badge = match record.size {
        SaleCondition::New => "badge new",
        SaleCondition::SecondHand => "badge second-hand",
    };

    html! {
        li class="sale" data-id=(record.id) {
            div class="sale-main" {
                h3 { (record.address) }
                p class="sale-meta" {
                    span { (record.property_type) }
                    span { (medium_date(record.date)) }
                    span class=(badge) { (record.size) }
                }
            }
            div class="sale-price" {
                p class="price" { (euro_k(record.price)) }
                p class="muted" { "Sale Price" }
            }
        }
    }
}
