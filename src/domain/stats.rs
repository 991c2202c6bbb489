// src/domain/stats.rs

use crate::domain::record::PropertyRecord;
use serde::Serialize;

/// Half-open histogram bucket `[min, max)`; `max: None` is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBucket {
    pub range: &'static str,
    pub min: i64,
    pub max: Option<i64>,
    pub count: usize,
}

impl PriceBucket {
    pub fn contains(&self, price: i64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }
}

const BUCKETS: [(&str, i64, Option<i64>); 5] = [
    ("0-300k", 0, Some(300_000)),
    ("300-500k", 300_000, Some(500_000)),
    ("500-700k", 500_000, Some(700_000)),
    ("700-900k", 700_000, Some(900_000)),
    ("900k+", 900_000, None),
];

/// Aggregates derived from a filtered record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub average_price: i64,
    pub median_price: i64,
    pub price_distribution: Vec<PriceBucket>,
}

impl Summary {
    pub fn from_records(records: &[&PropertyRecord]) -> Self {
        Self {
            count: records.len(),
            average_price: average_price(records),
            median_price: median_price(records),
            price_distribution: price_distribution(records),
        }
    }
}

/// Mean price rounded half-up; 0 for an empty list.
pub fn average_price(records: &[&PropertyRecord]) -> i64 {
    if records.is_empty() {
        return 0;
    }
    let sum: i64 = records.iter().map(|r| r.price).sum();
    round_div(sum, records.len() as i64)
}

pub fn median_price(records: &[&PropertyRecord]) -> i64 {
    if records.is_empty() {
        return 0;
    }
    let mut prices: Vec<i64> = records.iter().map(|r| r.price).collect();
    prices.sort_unstable();

    let mid = prices.len() / 2;
    if prices.len() % 2 == 1 {
        prices[mid]
    } else {
        round_div(prices[mid - 1] + prices[mid], 2)
    }
}

pub fn price_distribution(records: &[&PropertyRecord]) -> Vec<PriceBucket> {
    let mut buckets: Vec<PriceBucket> = BUCKETS
        .iter()
        .map(|&(range, min, max)| PriceBucket {
            range,
            min,
            max,
            count: 0,
        })
        .collect();

    for r in records {
        if let Some(bucket) = buckets.iter_mut().find(|b| b.contains(r.price)) {
            bucket.count += 1;
        }
    }

    buckets
}

// Half-up rounding for non-negative numerators.
fn round_div(num: i64, den: i64) -> i64 {
    (2 * num + den) / (2 * den)
}
