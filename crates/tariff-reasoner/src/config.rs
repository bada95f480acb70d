//! # Tariff Schedule Configuration
//!
//! A schedule file feeds the schedule-backed collaborators. It is YAML with
//! two optional lists:
//!
//! ```yaml
//! name: us-2025-q4
//! rates:
//!   - rule_id: HTSUS-8542-GEN
//!     hts_prefix: "8542"
//!     base_rate_pct: "0.0"
//!     legal_basis: "HTSUS 8542, general column 1 rate (free)"
//! notices:
//!   - notice_id: USTR-301-LIST4A
//!     source: "USTR Section 301 List 4A"
//!     summary: "Additional 7.5% ad valorem on listed Chinese-origin goods"
//!     hts_prefix: "8471"
//!     origins: [CN]
//!     surcharge_pct: "7.5"
//!     effective_from: 2020-02-14
//! ```
//!
//! Rates are written as quoted strings so they are read as exact decimals.
//! Every code is validated on deserialization; [`TariffSchedule::validate`]
//! then checks the cross-field invariants.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tariff_core::{CountryCode, HtsCode};

/// Errors loading or validating a schedule file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read schedule {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse schedule YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid schedule: {0}")]
    Invalid(String),
}

/// A base-rate rule for an HTS prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRule {
    /// Rule identifier, unique within the schedule.
    pub rule_id: String,
    /// HTS prefix the rule covers (dots optional).
    pub hts_prefix: String,
    /// Origins the rule applies to. Empty means every origin.
    #[serde(default)]
    pub origins: Vec<CountryCode>,
    /// Base ad-valorem rate in percent.
    pub base_rate_pct: Decimal,
    /// Citation reported as the legal basis.
    pub legal_basis: String,
}

impl RateRule {
    /// Whether the rule covers this code and origin.
    pub fn applies_to(&self, hts_code: &HtsCode, origin: &CountryCode) -> bool {
        hts_code.starts_with(&self.hts_prefix)
            && (self.origins.is_empty() || self.origins.contains(origin))
    }

    /// Number of digits in the prefix; longer prefixes are more specific.
    pub fn specificity(&self) -> usize {
        prefix_digits(&self.hts_prefix)
    }
}

/// A published temporary surcharge (trade remedy, retaliatory tariff, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeNotice {
    /// Notice identifier, unique within the schedule.
    pub notice_id: String,
    /// Publication the notice comes from.
    pub source: String,
    /// One-line summary reported in the explanation.
    pub summary: String,
    /// HTS prefix the notice covers.
    pub hts_prefix: String,
    #[serde(default)]
    pub origins: Vec<CountryCode>,
    /// Additional percentage on top of the base rate.
    pub surcharge_pct: Decimal,
    /// First day the surcharge applies.
    pub effective_from: NaiveDate,
    /// First day it no longer applies. Open-ended when absent.
    #[serde(default)]
    pub effective_until: Option<NaiveDate>,
}

impl SurchargeNotice {
    /// Whether the notice is in force for this code, origin, and date.
    pub fn applies_to(&self, hts_code: &HtsCode, origin: &CountryCode, on: NaiveDate) -> bool {
        hts_code.starts_with(&self.hts_prefix)
            && (self.origins.is_empty() || self.origins.contains(origin))
            && on >= self.effective_from
            && self.effective_until.map_or(true, |until| on < until)
    }
}

/// A complete tariff schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffSchedule {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rates: Vec<RateRule>,
    #[serde(default)]
    pub notices: Vec<SurchargeNotice>,
}

impl TariffSchedule {
    /// Read, parse, and validate a schedule file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let schedule = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            rates = schedule.rates.len(),
            notices = schedule.notices.len(),
            "loaded tariff schedule"
        );
        Ok(schedule)
    }

    /// Parse and validate a schedule from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let schedule: Self = serde_yaml::from_str(content)?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Check the invariants serde cannot express.
    ///
    /// - rule and notice ids are non-empty and unique
    /// - HTS prefixes are dot-separated digits
    /// - rates and surcharges are non-negative
    /// - `effective_until` is after `effective_from`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for rule in &self.rates {
            check_id("rate rule", &rule.rule_id, &mut seen)?;
            check_prefix(&rule.rule_id, &rule.hts_prefix)?;
            if rule.base_rate_pct < Decimal::ZERO {
                return Err(ConfigError::Invalid(format!(
                    "rate rule {}: base_rate_pct must be non-negative, got {}",
                    rule.rule_id, rule.base_rate_pct
                )));
            }
        }

        let mut seen = BTreeSet::new();
        for notice in &self.notices {
            check_id("notice", &notice.notice_id, &mut seen)?;
            check_prefix(&notice.notice_id, &notice.hts_prefix)?;
            if notice.surcharge_pct < Decimal::ZERO {
                return Err(ConfigError::Invalid(format!(
                    "notice {}: surcharge_pct must be non-negative, got {}",
                    notice.notice_id, notice.surcharge_pct
                )));
            }
            if let Some(until) = notice.effective_until {
                if until <= notice.effective_from {
                    return Err(ConfigError::Invalid(format!(
                        "notice {}: effective_until {until} is not after effective_from {}",
                        notice.notice_id, notice.effective_from
                    )));
                }
            }
        }
        Ok(())
    }
}

fn check_id(kind: &str, id: &str, seen: &mut BTreeSet<String>) -> Result<(), ConfigError> {
    if id.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{kind} with empty id")));
    }
    if !seen.insert(id.to_string()) {
        return Err(ConfigError::Invalid(format!("duplicate {kind} id {id}")));
    }
    Ok(())
}

fn check_prefix(owner: &str, prefix: &str) -> Result<(), ConfigError> {
    let well_formed = prefix
        .split('.')
        .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()));
    if !well_formed || prefix_digits(prefix) > 10 {
        return Err(ConfigError::Invalid(format!(
            "{owner}: hts_prefix \"{prefix}\" is not dot-separated digits"
        )));
    }
    Ok(())
}

fn prefix_digits(prefix: &str) -> usize {
    prefix.chars().filter(|c| c.is_ascii_digit()).count()
}
