//! # Rules Engine Collaborator
//!
//! A rules engine answers one question: what is the base ad-valorem rate for
//! this HTS code from this origin, and on what legal basis?
//!
//! Two implementations ship:
//!
//! - [`PlaceholderRulesEngine`] — always `0.0` with a generic citation. This is
//!   the engine the demo runs with.
//! - [`ScheduleRulesEngine`] — longest-prefix lookup over the [`RateRule`]s
//!   of a [`TariffSchedule`](crate::config::TariffSchedule).

use rust_decimal::Decimal;

use tariff_core::{CountryCode, HtsCode, RateQuote, TariffError};

use crate::config::RateRule;

/// Source of base duty rates.
pub trait RulesEngine: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Quote the base rate for a code and origin.
    ///
    /// # Errors
    ///
    /// [`TariffError::CollaboratorUnavailable`] when the engine cannot answer.
    fn base_rate(&self, hts_code: &HtsCode, origin: &CountryCode)
        -> Result<RateQuote, TariffError>;
}

/// Stand-in engine returning a zero rate for every shipment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRulesEngine;

impl RulesEngine for PlaceholderRulesEngine {
    fn name(&self) -> &str {
        "placeholder-rules"
    }

    fn base_rate(
        &self,
        hts_code: &HtsCode,
        origin: &CountryCode,
    ) -> Result<RateQuote, TariffError> {
        Ok(RateQuote::new(
            Decimal::ZERO,
            format!("HTS {hts_code} base rate for origin {origin}"),
        ))
    }
}

/// Engine backed by a schedule's rate rules.
///
/// Among the rules that apply, the one with the longest HTS prefix wins.
/// Equal-length matches resolve to the rule listed first.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRulesEngine {
    rules: Vec<RateRule>,
}

impl ScheduleRulesEngine {
    pub fn new(rules: Vec<RateRule>) -> Self {
        Self { rules }
    }

    /// Number of loaded rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The rule that would answer for this code and origin, if any.
    pub fn find_rule(&self, hts_code: &HtsCode, origin: &CountryCode) -> Option<&RateRule> {
        let mut best: Option<&RateRule> = None;
        for rule in self.rules.iter().filter(|r| r.applies_to(hts_code, origin)) {
            if best.map_or(true, |b| rule.specificity() > b.specificity()) {
                best = Some(rule);
            }
        }
        best
    }
}

impl RulesEngine for ScheduleRulesEngine {
    fn name(&self) -> &str {
        "schedule-rules"
    }

    fn base_rate(
        &self,
        hts_code: &HtsCode,
        origin: &CountryCode,
    ) -> Result<RateQuote, TariffError> {
        let rule = self.find_rule(hts_code, origin).ok_or_else(|| {
            TariffError::unavailable(
                self.name(),
                format!("no rate rule covers HTS {hts_code} from {origin}"),
            )
        })?;
        tracing::debug!(
            rule_id = %rule.rule_id,
            hts = %hts_code,
            origin = %origin,
            base_rate_pct = %rule.base_rate_pct,
            "matched rate rule"
        );
        Ok(RateQuote::new(rule.base_rate_pct, rule.legal_basis.clone()))
    }
}
