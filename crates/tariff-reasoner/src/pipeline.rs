//! # Duty Assessment Pipeline
//!
//! Orchestrates one assessment end to end:
//!
//! ```text
//! Shipment
//!   → RulesEngine::base_rate()      → RateQuote
//!   → PolicyRetriever::retrieve()   → Vec<PolicySnippet>
//!   → summarize_snippets()          → SurchargeQuote
//!   → compute_duty()                → DutyResult
//!   = DutyAssessment
//! ```
//!
//! The pipeline owns no state beyond its two collaborators. Assessing the
//! same shipment twice yields the same quotes and duty; only the assessment
//! id and timestamp differ.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tariff_core::{compute_duty, DutyResult, RateQuote, Shipment, SurchargeQuote, TariffError};

use crate::config::TariffSchedule;
use crate::retrieval::{
    summarize_snippets, NoticeRetriever, PlaceholderRetriever, PolicyQuery, PolicyRetriever,
    PolicySnippet,
};
use crate::rules::{PlaceholderRulesEngine, RulesEngine, ScheduleRulesEngine};

/// Everything one assessment produced, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyAssessment {
    pub assessment_id: Uuid,
    pub shipment: Shipment,
    pub rate_quote: RateQuote,
    pub surcharge_quote: SurchargeQuote,
    /// Raw retriever output, in retrieval order.
    pub snippets: Vec<PolicySnippet>,
    pub duty: DutyResult,
    pub assessed_at: DateTime<Utc>,
}

/// Shipment-to-duty pipeline over two injected collaborators.
pub struct DutyPipeline {
    rules: Box<dyn RulesEngine>,
    retriever: Box<dyn PolicyRetriever>,
}

impl DutyPipeline {
    /// Create a pipeline over the given collaborators.
    pub fn new(
        rules: impl RulesEngine + 'static,
        retriever: impl PolicyRetriever + 'static,
    ) -> Self {
        Self {
            rules: Box::new(rules),
            retriever: Box::new(retriever),
        }
    }

    /// Pipeline over the placeholder engine and retriever: zero base rate,
    /// no surcharges.
    pub fn placeholder() -> Self {
        Self::new(PlaceholderRulesEngine, PlaceholderRetriever)
    }

    /// Pipeline over a schedule's rate rules and surcharge notices.
    pub fn from_schedule(schedule: &TariffSchedule) -> Self {
        Self::new(
            ScheduleRulesEngine::new(schedule.rates.clone()),
            NoticeRetriever::new(schedule.notices.clone()),
        )
    }

    /// Assess a shipment.
    ///
    /// # Errors
    ///
    /// - [`TariffError::CollaboratorUnavailable`] from either collaborator.
    /// - [`TariffError::InvalidInput`] from the duty computation.
    pub fn assess(&self, shipment: &Shipment) -> Result<DutyAssessment, TariffError> {
        let assessment_id = Uuid::new_v4();
        let span = tracing::debug_span!("assess", %assessment_id, hts = %shipment.hts_code);
        let _guard = span.enter();

        let rate_quote = self
            .rules
            .base_rate(&shipment.hts_code, &shipment.origin)
            .map_err(|e| {
                tracing::warn!(engine = self.rules.name(), error = %e, "rules engine failed");
                e
            })?;
        tracing::debug!(
            engine = self.rules.name(),
            base_rate_pct = %rate_quote.base_rate_pct,
            "base rate quoted"
        );

        let query = PolicyQuery::for_shipment(shipment);
        let snippets = self
            .retriever
            .retrieve(&query)
            .map_err(|e| {
                tracing::warn!(retriever = self.retriever.name(), error = %e, "policy retrieval failed");
                e
            })?;
        let surcharge_quote = summarize_snippets(&query, &snippets)?;
        tracing::debug!(
            retriever = self.retriever.name(),
            snippets = snippets.len(),
            surcharge_pct = %surcharge_quote.surcharge_pct,
            "surcharge summarized"
        );

        let duty = compute_duty(
            shipment.declared_value,
            rate_quote.base_rate_pct,
            surcharge_quote.surcharge_pct,
        )?;

        tracing::info!(
            hts = %shipment.hts_code,
            origin = %shipment.origin,
            declared_value = %shipment.declared_value,
            total_rate_pct = %duty.total_rate_pct,
            duty_amount = %duty.duty_amount,
            "duty assessed"
        );

        Ok(DutyAssessment {
            assessment_id,
            shipment: shipment.clone(),
            rate_quote,
            surcharge_quote,
            snippets,
            duty,
            assessed_at: Utc::now(),
        })
    }

    pub fn rules_engine_name(&self) -> &str {
        self.rules.name()
    }

    pub fn retriever_name(&self) -> &str {
        self.retriever.name()
    }
}

impl Default for DutyPipeline {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl std::fmt::Debug for DutyPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DutyPipeline")
            .field("rules", &self.rules.name())
            .field("retriever", &self.retriever.name())
            .finish()
    }
}
