// src/domain/filter.rs

use crate::domain::record::{PropertyRecord, PropertyType};
use crate::errors::ServerError;
use serde::Serialize;
use std::str::FromStr;

pub const PRICE_FLOOR: i64 = 0;
pub const PRICE_CEILING: i64 = 2_000_000;
pub const PRICE_STEP: i64 = 50_000;

/// Property type selection; `All` disables the type predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TypeFilter {
    #[default]
    All,
    House,
    Apartment,
}

impl TypeFilter {
    pub const OPTIONS: [(TypeFilter, &'static str); 3] = [
        (TypeFilter::All, "All Types"),
        (TypeFilter::House, "Houses"),
        (TypeFilter::Apartment, "Apartments"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::House => "House",
            TypeFilter::Apartment => "Apartment",
        }
    }

    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::House => property_type == PropertyType::House,
            TypeFilter::Apartment => property_type == PropertyType::Apartment,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(TypeFilter::All),
            "House" => Ok(TypeFilter::House),
            "Apartment" => Ok(TypeFilter::Apartment),
            other => Err(ServerError::BadRequest(format!("unknown property type '{other}'"))),
        }
    }
}

/// Inclusive price bounds. `min > max` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: PRICE_FLOOR,
            max: PRICE_CEILING,
        }
    }
}

impl PriceRange {
    pub fn contains(&self, price: i64) -> bool {
        price >= self.min && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Clamps a user-supplied bound into the slider domain.
    pub fn clamp_bound(value: i64) -> i64 {
        value.clamp(PRICE_FLOOR, PRICE_CEILING)
    }
}

/// The user's current search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct FilterState {
    pub search_term: String,
    pub selected_type: TypeFilter,
    pub price_range: PriceRange,
}

impl FilterState {
    /// All three predicates, conjunctively.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.matches_search(record)
            && self.selected_type.matches(record.property_type)
            && self.price_range.contains(record.price)
    }

    fn matches_search(&self, record: &PropertyRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        record
            .address
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }

    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(term) = update.search_term {
            self.search_term = term;
        }
        if let Some(t) = update.selected_type {
            self.selected_type = t;
        }
        if let Some(min) = update.min_price {
            self.price_range.min = PriceRange::clamp_bound(min);
        }
        if let Some(max) = update.max_price {
            self.price_range.max = PriceRange::clamp_bound(max);
        }
    }
}

/// A partial change to the filter state; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    pub search_term: Option<String>,
    pub selected_type: Option<TypeFilter>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl FilterUpdate {
    /// Reads `q`, `type`, `min` and `max` from decoded query pairs. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut update = FilterUpdate::default();

        for (k, v) in pairs {
            let v = v.as_ref();
            match k.as_ref() {
                "q" => update.search_term = Some(v.to_string()),
                "type" => update.selected_type = Some(v.parse()?),
                "min" => update.min_price = Some(parse_price("min", v)?),
                "max" => update.max_price = Some(parse_price("max", v)?),
                _ => {}
            }
        }

        Ok(update)
    }
}

fn parse_price(field: &str, raw: &str) -> Result<i64, ServerError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("{field} price must be a whole number")))
}

/// Positions of the records that satisfy `filter`, in store order.
pub fn matching_positions(records: &[PropertyRecord], filter: &FilterState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| filter.matches(r))
        .map(|(i, _)| i)
        .collect()
}
