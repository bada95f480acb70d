//! # Policy Retriever Collaborator
//!
//! A policy retriever returns the policy text relevant to a shipment on a
//! given date: temporary surcharges, exclusions, trade-remedy notices. The
//! snippets are then folded into a single [`SurchargeQuote`] by
//! [`summarize_snippets`].
//!
//! ```text
//! PolicyQuery ─▶ retrieve() ─▶ Vec<PolicySnippet> ─▶ summarize_snippets() ─▶ SurchargeQuote
//! ```
//!
//! Snippet order is significant and preserved in the explanation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tariff_core::{CountryCode, HtsCode, Shipment, SurchargeQuote, TariffError};

use crate::config::SurchargeNotice;

/// Summary used by [`PlaceholderRetriever`].
pub const PLACEHOLDER_SUMMARY: &str = "No additional temporary duties were found for this HTS code from this origin on the given date.";

/// What a retriever is asked about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyQuery {
    pub hts_code: HtsCode,
    pub origin: CountryCode,
    pub on_date: NaiveDate,
}

impl PolicyQuery {
    pub fn for_shipment(shipment: &Shipment) -> Self {
        Self {
            hts_code: shipment.hts_code.clone(),
            origin: shipment.origin.clone(),
            on_date: shipment.import_date,
        }
    }
}

/// One piece of retrieved policy text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySnippet {
    /// Where the text comes from (notice id, publication, `placeholder`).
    pub source: String,
    /// Short summary of what the text says.
    pub summary: String,
    /// Surcharge the text imposes, if it imposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surcharge_pct: Option<Decimal>,
}

impl PolicySnippet {
    pub fn new(source: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            summary: summary.into(),
            surcharge_pct: None,
        }
    }

    /// Builder: attach a surcharge.
    pub fn with_surcharge(mut self, pct: Decimal) -> Self {
        self.surcharge_pct = Some(pct);
        self
    }

    fn carries_surcharge(&self) -> bool {
        self.surcharge_pct.is_some_and(|p| p != Decimal::ZERO)
    }
}

/// Source of policy snippets.
pub trait PolicyRetriever: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Snippets relevant to the query, most relevant first.
    ///
    /// # Errors
    ///
    /// [`TariffError::CollaboratorUnavailable`] when the source cannot be read.
    fn retrieve(&self, query: &PolicyQuery) -> Result<Vec<PolicySnippet>, TariffError>;
}

/// Stand-in retriever returning one fixed "nothing found" snippet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRetriever;

impl PolicyRetriever for PlaceholderRetriever {
    fn name(&self) -> &str {
        "placeholder-retriever"
    }

    fn retrieve(&self, _query: &PolicyQuery) -> Result<Vec<PolicySnippet>, TariffError> {
        Ok(vec![PolicySnippet::new("placeholder", PLACEHOLDER_SUMMARY)])
    }
}

/// Retriever over a schedule's surcharge notices.
///
/// Returns every notice in force on the query date, ordered by
/// `effective_from` then `notice_id`.
#[derive(Debug, Clone, Default)]
pub struct NoticeRetriever {
    notices: Vec<SurchargeNotice>,
}

impl NoticeRetriever {
    pub fn new(notices: Vec<SurchargeNotice>) -> Self {
        Self { notices }
    }

    pub fn notice_count(&self) -> usize {
        self.notices.len()
    }
}

impl PolicyRetriever for NoticeRetriever {
    fn name(&self) -> &str {
        "notice-retriever"
    }

    fn retrieve(&self, query: &PolicyQuery) -> Result<Vec<PolicySnippet>, TariffError> {
        let mut matched: Vec<&SurchargeNotice> = self
            .notices
            .iter()
            .filter(|n| n.applies_to(&query.hts_code, &query.origin, query.on_date))
            .collect();
        matched.sort_by(|a, b| {
            a.effective_from
                .cmp(&b.effective_from)
                .then_with(|| a.notice_id.cmp(&b.notice_id))
        });

        tracing::debug!(
            hts = %query.hts_code,
            origin = %query.origin,
            on_date = %query.on_date,
            matched = matched.len(),
            "retrieved surcharge notices"
        );

        Ok(matched
            .into_iter()
            .map(|n| {
                PolicySnippet::new(n.source.clone(), n.summary.clone())
                    .with_surcharge(n.surcharge_pct)
            })
            .collect())
    }
}

/// Fold retrieved snippets into one surcharge quote.
///
/// The surcharge is the sum of every snippet's surcharge. When no snippet
/// carries a non-zero surcharge, the explanation is the standard
/// "no temporary surcharges" line for the query; otherwise it lists each
/// surcharge-bearing snippet as `source: summary`, joined by `"; "`.
///
/// # Errors
///
/// [`TariffError::InvalidInput`] if a snippet surcharge is negative or the
/// sum overflows.
pub fn summarize_snippets(
    query: &PolicyQuery,
    snippets: &[PolicySnippet],
) -> Result<SurchargeQuote, TariffError> {
    let mut total = Decimal::ZERO;
    for pct in snippets.iter().filter_map(|s| s.surcharge_pct) {
        if pct < Decimal::ZERO {
            return Err(TariffError::invalid_input(
                "surcharge_pct",
                format!("retrieved surcharge must be non-negative, got {pct}"),
            ));
        }
        total = total
            .checked_add(pct)
            .ok_or_else(|| TariffError::invalid_input("surcharge_pct", "surcharge sum overflows"))?;
    }

    let notes: Vec<String> = snippets
        .iter()
        .filter(|s| s.carries_surcharge())
        .map(|s| format!("{}: {}", s.source, s.summary))
        .collect();

    let explanation = if notes.is_empty() {
        format!(
            "No temporary surcharges found for {} from {} as of {}.",
            query.hts_code, query.origin, query.on_date
        )
    } else {
        notes.join("; ")
    };

    Ok(SurchargeQuote::new(total, explanation))
}
