//! # Schedule Command
//!
//! Loads a tariff schedule, validates it, and prints one line per rate rule
//! and surcharge notice. Exit code 0 when the schedule is valid; load and
//! validation failures surface as errors.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use tariff_core::display_amount;
use tariff_reasoner::TariffSchedule;

/// Arguments for the `tariff schedule` subcommand.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Path to the schedule YAML file.
    #[arg(value_name = "SCHEDULE_YAML")]
    pub path: PathBuf,
}

/// Execute the schedule subcommand.
pub fn run_schedule(args: &ScheduleArgs) -> Result<u8> {
    print!("{}", schedule_summary(&args.path)?);
    Ok(0)
}

/// Validate the schedule at `path` and describe its contents.
pub fn schedule_summary(path: &Path) -> Result<String> {
    let schedule = TariffSchedule::load(path)
        .with_context(|| format!("invalid schedule {}", path.display()))?;

    let mut out = format!(
        "schedule {}: {} rate rules, {} surcharge notices\n",
        schedule.name.as_deref().unwrap_or("(unnamed)"),
        schedule.rates.len(),
        schedule.notices.len()
    );
    for rule in &schedule.rates {
        out.push_str(&format!(
            "  rate    {:<24} {:<12} {:>7}%  {}\n",
            rule.rule_id,
            rule.hts_prefix,
            display_amount(rule.base_rate_pct),
            origins_label(&rule.origins)
        ));
    }
    for notice in &schedule.notices {
        let until = notice
            .effective_until
            .map(|d| d.to_string())
            .unwrap_or_else(|| "open".to_string());
        out.push_str(&format!(
            "  notice  {:<24} {:<12} {:>7}%  {}  {}..{}\n",
            notice.notice_id,
            notice.hts_prefix,
            display_amount(notice.surcharge_pct),
            origins_label(&notice.origins),
            notice.effective_from,
            until
        ));
    }
    Ok(out)
}

fn origins_label(origins: &[tariff_core::CountryCode]) -> String {
    if origins.is_empty() {
        "all origins".to_string()
    } else {
        origins
            .iter()
            .map(|o| o.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
