use crate::domain::TrendPoint;
use crate::templates::components::{bar_chart, line_chart, Datum};
use crate::templates::format::euro_k_f64;
use crate::templates::card;
use maud::{html, Markup};

pub fn trends_view(trends: &[TrendPoint]) -> Markup {
    let prices: Vec<Datum> = trends
        .iter()
        .map(|p| Datum {
            label: p.month,
            value: p.avg_price,
        })
        .collect();
    let sales: Vec<Datum> = trends
        .iter()
        .map(|p| Datum {
            label: p.month,
            value: p.sales as f64,
        })
        .collect();

    let whole = |v: f64| format!("{v:.0}");

    html! {
        p class="sample-note" { "Sample data: trend figures are illustrative and not derived from the sales list." }

        (card("Average Price Trends - 2024", line_chart(&prices, "#2563eb", "Average Price", &euro_k_f64)))

        (card("Sales Volume by Month", bar_chart(&sales, "#10b981", "Number of Sales", &whole)))
    }
}
