//! # Duty Assessment — End-to-End Tests
//!
//! Drives the full pipeline against the sample schedule shipped in
//! `schedules/sample.yaml`:
//!
//! ```text
//! Shipment
//!   -> ScheduleRulesEngine  (base rate)
//!   -> NoticeRetriever      (surcharge notices on the import date)
//!   -> compute_duty         (half-even cents)
//!   -> render_text / render_json
//! ```

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tariff_core::{CountryCode, HtsCode, Shipment, TariffError};
use tariff_reasoner::{render_json, render_text, DutyPipeline, TariffSchedule};

const SAMPLE: &str = include_str!("../../../schedules/sample.yaml");

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn shipment(hts: &str, origin: &str, value: &str, date: (i32, u32, u32)) -> Shipment {
    Shipment::new(
        HtsCode::new(hts).unwrap(),
        CountryCode::new(origin).unwrap(),
        dec(value),
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
    )
    .unwrap()
}

fn sample_pipeline() -> DutyPipeline {
    DutyPipeline::from_schedule(&TariffSchedule::from_yaml_str(SAMPLE).unwrap())
}

// ===========================================================================
// Placeholder collaborators
// ===========================================================================

#[test]
fn demo_shipment_prints_zero_duty_block() {
    let a = DutyPipeline::placeholder()
        .assess(&shipment("8542.31.0000", "TW", "10000.00", (2025, 10, 25)))
        .unwrap();
    let text = render_text(&a);
    assert!(text.contains("Base Rate (%):         0.0%"));
    assert!(text.contains("Policy Surcharges (%): 0.0%"));
    assert!(text.contains("=> Total Duty Owed:    $0.0"));
    assert!(text.contains("- Base rule: HTS 8542.31.0000 base rate for origin TW"));
    assert!(text.contains("- RAG note:  No temporary surcharges found for 8542.31.0000 from TW"));
}

// ===========================================================================
// Schedule-backed collaborators
// ===========================================================================

#[test]
fn sample_schedule_taiwan_chips_are_free() {
    let a = sample_pipeline()
        .assess(&shipment("8542.31.0000", "TW", "10000.00", (2025, 10, 25)))
        .unwrap();
    assert_eq!(a.duty.duty_amount, Decimal::ZERO);
    assert!(a.snippets.is_empty());
    assert!(a.rate_quote.legal_basis.contains("8542"));
}

#[test]
fn sample_schedule_chinese_chips_follow_notice_window() {
    let pipeline = sample_pipeline();

    let before_review = pipeline
        .assess(&shipment("8542.31.0000", "CN", "10000.00", (2024, 6, 1)))
        .unwrap();
    assert_eq!(before_review.surcharge_quote.surcharge_pct, dec("25"));
    assert_eq!(before_review.duty.duty_amount, dec("2500.00"));

    let after_review = pipeline
        .assess(&shipment("8542.31.0000", "CN", "10000.00", (2025, 10, 25)))
        .unwrap();
    assert_eq!(after_review.surcharge_quote.surcharge_pct, dec("50"));
    assert_eq!(after_review.duty.duty_amount, dec("5000.00"));
    assert!(after_review
        .surcharge_quote
        .explanation
        .starts_with("USTR Section 301 four-year review:"));
}

#[test]
fn sample_schedule_subheading_overrides_heading() {
    let a = sample_pipeline()
        .assess(&shipment("6403.99.6075", "VN", "1234.56", (2025, 3, 1)))
        .unwrap();
    assert_eq!(a.rate_quote.base_rate_pct, dec("10.0"));
    // 1234.56 * 10% = 123.456 -> 123.46
    assert_eq!(a.duty.duty_amount, dec("123.46"));

    let a = sample_pipeline()
        .assess(&shipment("6403.59.9060", "VN", "1234.56", (2025, 3, 1)))
        .unwrap();
    assert_eq!(a.rate_quote.base_rate_pct, dec("8.5"));
    // 1234.56 * 8.5% = 104.9376 -> 104.94
    assert_eq!(a.duty.duty_amount, dec("104.94"));
}

#[test]
fn sample_schedule_unlisted_heading_is_unavailable() {
    let err = sample_pipeline()
        .assess(&shipment("0101.21.0010", "MX", "5000", (2025, 3, 1)))
        .unwrap_err();
    assert!(matches!(
        err,
        TariffError::CollaboratorUnavailable { ref collaborator, .. } if collaborator == "schedule-rules"
    ));
}

#[test]
fn json_report_lists_retrieved_notices() {
    let a = sample_pipeline()
        .assess(&shipment("8542.31.0000", "CN", "100", (2025, 10, 25)))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&render_json(&a).unwrap()).unwrap();
    assert_eq!(value["snippets"].as_array().unwrap().len(), 1);
    assert_eq!(value["snippets"][0]["surcharge_pct"], "50");
    assert_eq!(value["duty"]["duty_amount"], "50.00");
}
