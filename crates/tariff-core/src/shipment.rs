//! # Shipment and Quote Records
//!
//! The records that flow through one duty assessment:
//!
//! ```text
//! Shipment ──▶ rules engine ──▶ RateQuote ─────┐
//!    │                                         ├──▶ DutyResult
//!    └──────▶ policy retriever ─▶ SurchargeQuote┘
//! ```
//!
//! All records are immutable once built. None outlives the assessment that
//! creates it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TariffError;
use crate::identity::{CountryCode, HtsCode};

/// An import shipment as described by the caller.
///
/// Deserialization goes through [`Shipment::new`], so a decoded shipment
/// never carries a negative declared value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShipmentRecord")]
pub struct Shipment {
    /// Tariff classification of the goods.
    pub hts_code: HtsCode,
    /// Country of origin.
    pub origin: CountryCode,
    /// Importing country.
    pub destination: CountryCode,
    /// Customs value in US dollars.
    pub declared_value: Decimal,
    /// Date of entry.
    pub import_date: NaiveDate,
}

impl Shipment {
    /// Create a shipment bound for the United States.
    ///
    /// # Errors
    ///
    /// Returns [`TariffError::InvalidInput`] if `declared_value` is negative.
    pub fn new(
        hts_code: HtsCode,
        origin: CountryCode,
        declared_value: Decimal,
        import_date: NaiveDate,
    ) -> Result<Self, TariffError> {
        if declared_value < Decimal::ZERO {
            return Err(TariffError::invalid_input(
                "declared_value",
                format!("must be non-negative, got {declared_value}"),
            ));
        }
        Ok(Self {
            hts_code,
            origin,
            destination: CountryCode::us(),
            declared_value,
            import_date,
        })
    }

    /// Builder: set the importing country.
    pub fn with_destination(mut self, destination: CountryCode) -> Self {
        self.destination = destination;
        self
    }
}

/// Wire form of a [`Shipment`], checked before it becomes one.
#[derive(Deserialize)]
struct ShipmentRecord {
    hts_code: HtsCode,
    origin: CountryCode,
    #[serde(default = "CountryCode::us")]
    destination: CountryCode,
    declared_value: Decimal,
    import_date: NaiveDate,
}

impl TryFrom<ShipmentRecord> for Shipment {
    type Error = TariffError;

    fn try_from(r: ShipmentRecord) -> Result<Self, Self::Error> {
        Ok(Shipment::new(r.hts_code, r.origin, r.declared_value, r.import_date)?
            .with_destination(r.destination))
    }
}

/// Base duty rate returned by a rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Ad-valorem base rate as a percentage (`2.5` = 2.5%).
    pub base_rate_pct: Decimal,
    /// Citation or rule name justifying the rate.
    pub legal_basis: String,
}

impl RateQuote {
    pub fn new(base_rate_pct: Decimal, legal_basis: impl Into<String>) -> Self {
        Self {
            base_rate_pct,
            legal_basis: legal_basis.into(),
        }
    }
}

/// Temporary surcharge derived from retrieved policy text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeQuote {
    /// Additional ad-valorem percentage on top of the base rate.
    pub surcharge_pct: Decimal,
    /// Human-readable note on where the surcharge (or its absence) came from.
    pub explanation: String,
}

impl SurchargeQuote {
    pub fn new(surcharge_pct: Decimal, explanation: impl Into<String>) -> Self {
        Self {
            surcharge_pct,
            explanation: explanation.into(),
        }
    }
}

/// Outcome of the duty calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyResult {
    /// Combined rate applied (base + surcharge), in percent.
    pub total_rate_pct: Decimal,
    /// Duty owed in US dollars, rounded half-to-even to cents.
    pub duty_amount: Decimal,
}
