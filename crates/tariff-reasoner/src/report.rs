//! # Report Rendering
//!
//! Renders a [`DutyAssessment`] for people (the fixed console block) or for
//! machines (pretty JSON). The console block is a compatibility surface:
//! labels, column alignment, blank lines, and number forms are fixed.

use tariff_core::display_amount;

use crate::pipeline::DutyAssessment;

/// First line of the console block.
pub const REPORT_HEADING: &str = "=== ErgoAI Tariff Reasoner Demo ===";

/// Render the console block, newline-terminated.
pub fn render_text(assessment: &DutyAssessment) -> String {
    let shipment = &assessment.shipment;
    format!(
        "{REPORT_HEADING}\n\
         HTS Code:              {hts}\n\
         Country of Origin:     {origin}\n\
         Declared Value (USD):  {value}\n\
         Import Date:           {date}\n\
         \n\
         Base Rate (%):         {base}%\n\
         Policy Surcharges (%): {surcharge}%\n\
         => Total Duty Owed:    ${duty}\n\
         \n\
         Explanation:\n\
         - Base rule: {basis}\n\
         - RAG note:  {note}\n",
        hts = shipment.hts_code,
        origin = shipment.origin,
        value = display_amount(shipment.declared_value),
        date = shipment.import_date,
        base = display_amount(assessment.rate_quote.base_rate_pct),
        surcharge = display_amount(assessment.surcharge_quote.surcharge_pct),
        duty = display_amount(assessment.duty.duty_amount),
        basis = assessment.rate_quote.legal_basis,
        note = assessment.surcharge_quote.explanation,
    )
}

/// Render the full assessment as pretty-printed JSON.
///
/// Amounts serialize as decimal strings (`"750.00"`), never floats.
pub fn render_json(assessment: &DutyAssessment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(assessment)
}
