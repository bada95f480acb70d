//! # Assess Command
//!
//! Builds a shipment from flags (demo values by default), runs it through
//! the duty pipeline, and prints the report.
//!
//! Collaborators: the placeholder pair unless `--schedule` names a schedule
//! file, in which case its rate rules and surcharge notices answer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;

use tariff_core::{CountryCode, HtsCode, Shipment};
use tariff_reasoner::{render_json, render_text, DutyPipeline, TariffSchedule};

use crate::{DEMO_DECLARED_VALUE, DEMO_DESTINATION, DEMO_HTS_CODE, DEMO_ORIGIN};

/// Shipment and output options for an assessment.
#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    /// HTS classification code.
    #[arg(long, default_value = DEMO_HTS_CODE)]
    pub hts: HtsCode,

    /// Country of origin (ISO 3166-1 alpha-2).
    #[arg(long, default_value = DEMO_ORIGIN)]
    pub origin: CountryCode,

    /// Importing country (ISO 3166-1 alpha-2).
    #[arg(long, default_value = DEMO_DESTINATION)]
    pub destination: CountryCode,

    /// Declared customs value in USD.
    #[arg(long, default_value = DEMO_DECLARED_VALUE, allow_hyphen_values = true)]
    pub value: Decimal,

    /// Import date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Tariff schedule YAML backing the rules engine and retriever.
    #[arg(long, value_name = "SCHEDULE_YAML")]
    pub schedule: Option<PathBuf>,

    /// Print the full assessment as JSON instead of the text block.
    #[arg(long)]
    pub json: bool,
}

impl AssessArgs {
    /// The shipment these flags describe.
    pub fn shipment(&self) -> Result<Shipment> {
        let import_date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let shipment = Shipment::new(
            self.hts.clone(),
            self.origin.clone(),
            self.value,
            import_date,
        )?
        .with_destination(self.destination.clone());
        Ok(shipment)
    }

    fn pipeline(&self) -> Result<DutyPipeline> {
        match &self.schedule {
            Some(path) => {
                let schedule = TariffSchedule::load(path)
                    .with_context(|| format!("failed to load schedule {}", path.display()))?;
                Ok(DutyPipeline::from_schedule(&schedule))
            }
            None => Ok(DutyPipeline::placeholder()),
        }
    }
}

/// Assess the shipment and return the rendered report.
pub fn assess_report(args: &AssessArgs) -> Result<String> {
    let shipment = args.shipment()?;
    let pipeline = args.pipeline()?;
    tracing::debug!(?pipeline, "assessing shipment");

    let assessment = pipeline.assess(&shipment).with_context(|| {
        format!(
            "failed to assess HTS {} from {}",
            shipment.hts_code, shipment.origin
        )
    })?;

    if args.json {
        let mut json = render_json(&assessment).context("failed to serialize assessment")?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render_text(&assessment))
    }
}

/// Execute an assessment and print the report to stdout.
///
/// Returns exit code 0 on success.
pub fn run_assess(args: &AssessArgs) -> Result<u8> {
    let report = assess_report(args)?;
    print!("{report}");
    Ok(0)
}
