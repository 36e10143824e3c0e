//! Calendar conversions for the two travel formats.
//!
//! BCBP stores the flight date as a 3-digit day of year without a year.
//! MRZ stores dates as `YYMMDD`, so the century has to be inferred.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::error::{CodecError, Result};

const ISO_DATE: &str = "%Y-%m-%d";

/// Year that decoded BCBP day-of-year values are anchored to. The format
/// carries no year, so the year of the returned date is meaningless.
pub const JULIAN_REFERENCE_YEAR: i32 = 2025;

/// Returned by [`date_to_julian`] when the date does not parse.
pub const JULIAN_SENTINEL: &str = "000";

/// Returned by [`format_date`] when the date does not parse.
pub const MRZ_DATE_SENTINEL: &str = "000000";

/// `"2025-02-01"` -> `"032"`. Unparsable input yields [`JULIAN_SENTINEL`]
/// rather than an error so that generation always produces a record.
pub fn date_to_julian(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, ISO_DATE) {
        Ok(date) => format!("{:03}", date.ordinal()),
        Err(_) => JULIAN_SENTINEL.to_string(),
    }
}

/// Adds `day` days to 1 January of [`JULIAN_REFERENCE_YEAR`], counting
/// `001` as that first day. Out-of-range values roll over into the
/// neighbouring years.
pub fn julian_day_to_gregorian(day: &str) -> Result<NaiveDate> {
    let n: i64 = day
        .parse()
        .map_err(|_| CodecError::invalid_date(day, "not a day-of-year number"))?;
    let start = NaiveDate::from_ymd_opt(JULIAN_REFERENCE_YEAR, 1, 1)
        .ok_or_else(|| CodecError::invalid_date(day, "reference year out of range"))?;

    let offset = n - 1;
    let shifted = if offset >= 0 {
        start.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        start.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    shifted.ok_or_else(|| CodecError::invalid_date(day, "day-of-year out of range"))
}

/// `"1974-08-12"` -> `"740812"`. Unparsable input yields
/// [`MRZ_DATE_SENTINEL`].
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, ISO_DATE) {
        Ok(date) => date.format("%y%m%d").to_string(),
        Err(_) => MRZ_DATE_SENTINEL.to_string(),
    }
}

/// Accepts either an ISO date or an already encoded `YYMMDD` value.
pub fn to_mrz_date(value: &str) -> String {
    if is_yymmdd(value) {
        value.to_string()
    } else {
        format_date(value)
    }
}

fn is_yymmdd(value: &str) -> bool {
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Decodes an MRZ `YYMMDD` date, placing the year in the current century
/// of the system clock.
///
/// This is ambiguous around century boundaries: `"300101"` is read as
/// 2030 today and would be read as 2130 after 2099.
pub fn parse_mrz_expiry(yymmdd: &str) -> Result<NaiveDate> {
    parse_mrz_expiry_with_reference(yymmdd, Local::now().year())
}

/// Same as [`parse_mrz_expiry`] with the century taken from
/// `reference_year` instead of the clock.
pub fn parse_mrz_expiry_with_reference(yymmdd: &str, reference_year: i32) -> Result<NaiveDate> {
    if !is_yymmdd(yymmdd) {
        return Err(CodecError::invalid_date(yymmdd, "expected six digits YYMMDD"));
    }

    let field = |range: std::ops::Range<usize>| -> u32 {
        yymmdd[range].parse().unwrap_or_default()
    };
    let year = (reference_year / 100) * 100 + field(0..2) as i32;

    NaiveDate::from_ymd_opt(year, field(2..4), field(4..6))
        .ok_or_else(|| CodecError::invalid_date(yymmdd, "no such calendar date"))
}
