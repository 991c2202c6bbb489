// Inline SVG charts. Plain markup, no client-side script.

use maud::{html, Markup};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 72.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 36.0;
const GRID_LINES: usize = 4;

/// One labelled value along the x axis.
pub struct Datum<'a> {
    pub label: &'a str,
    pub value: f64,
}

/// Rounds `max` up to 1, 2 or 5 times a power of ten, so gridlines land on readable values.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let scaled = max / magnitude;
    let step = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else if scaled <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

fn plot_width() -> f64 {
    WIDTH - PAD_LEFT - PAD_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - PAD_TOP - PAD_BOTTOM
}

fn y_for(value: f64, ceiling: f64) -> f64 {
    PAD_TOP + plot_height() * (1.0 - value / ceiling)
}

fn axes(ceiling: f64, fmt_value: &dyn Fn(f64) -> String) -> Markup {
    html! {
        @for i in 0..=GRID_LINES {
            @let value = ceiling * i as f64 / GRID_LINES as f64;
            @let y = y_for(value, ceiling);
            line x1=(PAD_LEFT) x2=(WIDTH - PAD_RIGHT) y1=(y) y2=(y)
                stroke="#e2e8f0" stroke-dasharray="3 3" {}
            text x=(PAD_LEFT - 8.0) y=(y + 4.0) text-anchor="end"
                font-size="12" fill="#64748b" { (fmt_value(value)) }
        }
    }
}

fn x_label(x: f64, label: &str) -> Markup {
    html! {
        text x=(x) y=(HEIGHT - PAD_BOTTOM + 20.0) text-anchor="middle"
            font-size="12" fill="#64748b" { (label) }
    }
}

/// Line chart with a dot and tooltip per point.
pub fn line_chart(
    data: &[Datum],
    color: &str,
    series_name: &str,
    fmt_value: &dyn Fn(f64) -> String,
) -> Markup {
    let ceiling = nice_ceiling(data.iter().map(|d| d.value).fold(0.0, f64::max));
    let step = if data.len() > 1 {
        plot_width() / (data.len() - 1) as f64
    } else {
        0.0
    };
    let points: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, d)| (PAD_LEFT + step * i as f64, y_for(d.value, ceiling)))
        .collect();
    let path = points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    html! {
        svg class="chart" viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) role="img"
            aria-label=(series_name) xmlns="http://www.w3.org/2000/svg"
        {
            (axes(ceiling, fmt_value))
            polyline points=(path) fill="none" stroke=(color) stroke-width="3" {}
            @for (d, (x, y)) in data.iter().zip(&points) {
                circle cx=(x) cy=(y) r="4" fill=(color) {
                    title { (d.label) ": " (fmt_value(d.value)) }
                }
                (x_label(*x, d.label))
            }
        }
        p class="legend" { span class="swatch" style=(format!("background:{color}")) {} (series_name) }
    }
}

/// Vertical bar chart, one bar per datum.
pub fn bar_chart(
    data: &[Datum],
    color: &str,
    series_name: &str,
    fmt_value: &dyn Fn(f64) -> String,
) -> Markup {
    let ceiling = nice_ceiling(data.iter().map(|d| d.value).fold(0.0, f64::max));
    let band = plot_width() / data.len().max(1) as f64;
    let bar_width = band * 0.7;

    html! {
        svg class="chart" viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) role="img"
            aria-label=(series_name) xmlns="http://www.w3.org/2000/svg"
        {
            (axes(ceiling, fmt_value))
            @for (i, d) in data.iter().enumerate() {
                @let center = PAD_LEFT + band * (i as f64 + 0.5);
                @let top = y_for(d.value, ceiling);
                rect x=(format!("{:.1}", center - bar_width / 2.0)) y=(format!("{top:.1}"))
                    width=(format!("{bar_width:.1}"))
                    height=(format!("{:.1}", HEIGHT - PAD_BOTTOM - top))
                    fill=(color)
                {
                    title { (d.label) ": " (fmt_value(d.value)) }
                }
                (x_label(center, d.label))
            }
        }
        p class="legend" { span class="swatch" style=(format!("background:{color}")) {} (series_name) }
    }
}
