//! # tariff-cli — CLI Tool for the Tariff Reasoner
//!
//! Provides the `tariff` command-line interface.
//!
//! ## Usage
//!
//! ```bash
//! tariff                                   # demo shipment, placeholder collaborators
//! tariff --hts 6403.99.6075 --origin VN --value 1234.56 --schedule schedules/sample.yaml
//! tariff --json                            # full assessment as JSON
//! tariff schedule schedules/sample.yaml    # validate and summarise a schedule
//! ```
//!
//! Without arguments the fixed demo shipment (`8542.31.0000` from `TW`,
//! `10000.00` USD, dated today) is assessed and the explanation block is
//! printed. Logs go to stderr; stdout carries only the report.

pub mod assess;
pub mod schedule;

/// HTS code of the demo shipment (integrated circuits).
pub const DEMO_HTS_CODE: &str = "8542.31.0000";
/// Origin of the demo shipment.
pub const DEMO_ORIGIN: &str = "TW";
/// Destination of the demo shipment.
pub const DEMO_DESTINATION: &str = "US";
/// Declared value of the demo shipment in USD.
pub const DEMO_DECLARED_VALUE: &str = "10000.00";
