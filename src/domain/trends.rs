// src/domain/trends.rs
//
// Decorative sample series. The values are random and unrelated to the record store.

use rand::Rng;
use serde::Serialize;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const BASE_PRICE: f64 = 650_000.0;
const MONTHLY_INCREMENT: f64 = 15_000.0;
const PRICE_NOISE: f64 = 50_000.0;
const BASE_SALES: u32 = 120;
const SALES_NOISE: u32 = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub avg_price: f64,
    pub sales: u32,
}

/// One synthetic point per calendar month: a linear price baseline plus
/// noise in `[0, 50k)`, and a sales count in `[120, 200)`.
pub fn generate_trend_data<R: Rng + ?Sized>(rng: &mut R) -> Vec<TrendPoint> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(idx, &month)| TrendPoint {
            month,
            avg_price: BASE_PRICE
                + idx as f64 * MONTHLY_INCREMENT
                + rng.gen_range(0.0..PRICE_NOISE),
            sales: BASE_SALES + rng.gen_range(0..SALES_NOISE),
        })
        .collect()
}
