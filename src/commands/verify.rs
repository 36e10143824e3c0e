use serde::Serialize;
use tracing::debug;

use crate::io::read_input;
use travelcodec::error::{CodecError, Result};
use travelcodec::parse_mrz;
use travelcodec::types::InputSource;

#[derive(Debug, Serialize)]
pub struct VerifyResult {
    pub schema_version: u32,
    pub valid: bool,
    pub class: Option<String>,
    pub error: Option<String>,
    pub mismatches: Vec<&'static str>,
    #[serde(skip)]
    pub cause: Option<CodecError>,
}

/// Parses the zone and reports which check digits disagree. A zone that
/// cannot be parsed is reported as invalid rather than returned as an error.
pub fn run_verify(input: &InputSource) -> Result<VerifyResult> {
    let text = read_input(input)?;

    match parse_mrz(&text) {
        Ok(record) => {
            let mismatches = record.mismatched_checks();
            debug!(class = %record.class(), ?mismatches, "verified MRZ");
            Ok(VerifyResult {
                schema_version: 1,
                valid: record.is_valid(),
                class: Some(record.class().name().to_string()),
                error: None,
                mismatches,
                cause: None,
            })
        }
        Err(e) => Ok(VerifyResult {
            schema_version: 1,
            valid: false,
            class: None,
            error: Some(e.to_string()),
            mismatches: Vec::new(),
            cause: Some(e),
        }),
    }
}
