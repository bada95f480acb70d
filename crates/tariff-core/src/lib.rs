//! # tariff-core — Foundational Types for the Tariff Reasoner
//!
//! Defines the shipment and quote records, the validated code newtypes, and
//! the duty calculator every other crate in the workspace builds on. Depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for codes.** `HtsCode` and `CountryCode` validate on
//!    construction and on deserialization. No bare strings for identifiers.
//!
//! 2. **Exact decimals for money.** Values and rates are `rust_decimal::Decimal`.
//!    Duty is rounded half-to-even to cents, once, at the end.
//!
//! 3. **Reject, don't guess.** Negative values and rates are an
//!    `InvalidInput` error, never a negative duty.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod amount;
pub mod duty;
pub mod error;
pub mod identity;
pub mod shipment;

// Re-export primary types for ergonomic imports.
pub use amount::{display_amount, format_amount, parse_amount, round_cents};
pub use duty::{compute_duty, compute_total_duty};
pub use error::{TariffError, ValidationError};
pub use identity::{CountryCode, HtsCode};
pub use shipment::{DutyResult, RateQuote, Shipment, SurchargeQuote};

/// Re-exported so dependents name the same decimal type.
pub use rust_decimal::Decimal;
