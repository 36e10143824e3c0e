use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::io::read_input;
use travelcodec::error::Result;
use travelcodec::types::InputSource;
use travelcodec::{generate_mrz, parse_mrz, parse_mrz_expiry, DocumentClass, PassportRecord, TravelDocumentRecord};

#[derive(Debug, Serialize)]
pub struct ParseMrzResult {
    pub schema_version: u32,
    pub record: TravelDocumentRecord,
}

#[derive(Debug, Serialize)]
pub struct ExpiryResult {
    pub schema_version: u32,
    pub input: String,
    pub date: NaiveDate,
    pub expired: bool,
}

pub fn run_gen_mrz(class: DocumentClass, passport: &PassportRecord) -> Result<String> {
    generate_mrz(class, &TravelDocumentRecord::Td3(passport.clone()))
}

pub fn run_parse_mrz(input: &InputSource) -> Result<ParseMrzResult> {
    let text = read_input(input)?;
    Ok(ParseMrzResult {
        schema_version: 1,
        record: parse_mrz(&text)?,
    })
}

pub fn run_expiry(yymmdd: &str) -> Result<ExpiryResult> {
    let date = parse_mrz_expiry(yymmdd.trim())?;
    Ok(ExpiryResult {
        schema_version: 1,
        input: yymmdd.to_string(),
        date,
        expired: date < Local::now().date_naive(),
    })
}
