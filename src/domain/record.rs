// src/domain/record.rs

use crate::errors::ServerError;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyType {
    House,
    Apartment,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the sale was of a newly built or a second-hand dwelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SaleCondition {
    New,
    #[serde(rename = "Second-Hand")]
    SecondHand,
}

impl SaleCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleCondition::New => "New",
            SaleCondition::SecondHand => "Second-Hand",
        }
    }
}

impl fmt::Display for SaleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single registered property sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: i64,
    pub address: String,
    /// Whole euro.
    pub price: i64,
    pub date: NaiveDate,
    pub county: String,
    pub property_type: PropertyType,
    pub size: SaleCondition,
}

/// Raw row of bundled sample data, before validation.
pub struct RawSale {
    pub id: i64,
    pub address: &'static str,
    pub price: i64,
    pub date: &'static str,
    pub county: &'static str,
    pub property_type: PropertyType,
    pub size: SaleCondition,
}

impl RawSale {
    pub fn to_record(&self) -> Result<PropertyRecord, ServerError> {
        let date = NaiveDate::parse_from_str(self.date, "%Y-%m-%d").map_err(|e| {
            ServerError::DataError(format!("record {}: bad date '{}': {e}", self.id, self.date))
        })?;

        Ok(PropertyRecord {
            id: self.id,
            address: self.address.to_string(),
            price: self.price,
            date,
            county: self.county.to_string(),
            property_type: self.property_type,
            size: self.size,
        })
    }
}

/// The fixed, immutable collection of sale records held for the process lifetime.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<PropertyRecord>,
}

impl RecordStore {
    /// Validates and wraps a set of records. Order is kept as given.
    pub fn new(records: Vec<PropertyRecord>) -> Result<Self, ServerError> {
        let mut seen = HashSet::new();

        for r in &records {
            if !seen.insert(r.id) {
                return Err(ServerError::DataError(format!("duplicate record id {}", r.id)));
            }
            if r.price <= 0 {
                return Err(ServerError::DataError(format!(
                    "record {} has non-positive price {}",
                    r.id, r.price
                )));
            }
            if r.address.trim().is_empty() {
                return Err(ServerError::DataError(format!("record {} has empty address", r.id)));
            }
            if r.county.trim().is_empty() {
                return Err(ServerError::DataError(format!("record {} has empty county", r.id)));
            }
        }

        Ok(Self { records })
    }

    pub fn from_raw(rows: &[RawSale]) -> Result<Self, ServerError> {
        let records = rows
            .iter()
            .map(RawSale::to_record)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(records)
    }

    /// Loads the bundled Dublin sample sales.
    pub fn sample() -> Result<Self, ServerError> {
        Self::from_raw(crate::sample_data::SAMPLE_SALES)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records at `positions`, in the order given.
    pub fn select(&self, positions: &[usize]) -> Vec<&PropertyRecord> {
        positions.iter().filter_map(|&i| self.records.get(i)).collect()
    }
}
