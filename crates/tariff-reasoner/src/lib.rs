//! # tariff-reasoner — Duty Assessment Pipeline
//!
//! Turns a [`Shipment`](tariff_core::Shipment) into an explained duty
//! figure by consulting two pluggable collaborators:
//!
//! - a **rules engine** ([`RulesEngine`]) for the base ad-valorem rate and
//!   its legal basis, and
//! - a **policy retriever** ([`PolicyRetriever`]) for the temporary
//!   surcharges in force on the import date.
//!
//! Both ship in a placeholder form (zero rates, fixed explanations) and a
//! schedule-backed form driven by a YAML [`TariffSchedule`].
//!
//! The duty arithmetic itself lives in `tariff-core`; swapping collaborators
//! never touches it.

pub mod config;
pub mod pipeline;
pub mod report;
pub mod retrieval;
pub mod rules;

// Re-export primary types.
pub use config::{ConfigError, RateRule, SurchargeNotice, TariffSchedule};
pub use pipeline::{DutyAssessment, DutyPipeline};
pub use report::{render_json, render_text, REPORT_HEADING};
pub use retrieval::{
    summarize_snippets, NoticeRetriever, PlaceholderRetriever, PolicyQuery, PolicyRetriever,
    PolicySnippet,
};
pub use rules::{PlaceholderRulesEngine, RulesEngine, ScheduleRulesEngine};
