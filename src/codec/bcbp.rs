//! IATA Bar Coded Boarding Pass, mandatory single-leg section.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::date::{date_to_julian, julian_day_to_gregorian};
use super::util::{self, pad};
use super::TextFormat;
use crate::error::{CodecError, LengthConstraint, Result};
use crate::types::{DetectCandidate, FormatMeta};

pub const MIN_LEN: usize = 58;
pub const NAME_LEN: usize = 20;
const PNR_LEN: usize = 7;
const AIRLINE_LEN: usize = 3;
const FLIGHT_LEN: usize = 5;
const SEAT_LEN: usize = 4;
const SEQUENCE_LEN: usize = 4;
const TRAILER: &str = "1AA";

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const CLASSES: &[u8] = b"FCY";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardingPass {
    pub format_code: String,
    pub total_leg: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub indicator: String,
    pub pnr_code: String,
    pub from: String,
    pub to: String,
    pub airline: String,
    pub flight_number: String,
    pub julian_day: String,
    pub date: Option<NaiveDate>,
    pub class: String,
    pub seat: String,
    pub sequence: String,
    pub status: String,
}

impl BoardingPass {
    /// Renders the record at its fixed offsets. `name` is rebuilt from
    /// `last_name`/`first_name`; `status` is not written, the trailer is
    /// always `1AA`.
    pub fn encode(&self) -> String {
        let name = format!("{}/{}", self.last_name.to_uppercase(), self.first_name.to_uppercase());
        let mut out = String::with_capacity(MIN_LEN + 1);
        out.push_str(&pad(&self.format_code, 1, 'M'));
        out.push_str(&pad(&self.total_leg, 1, '1'));
        out.push_str(&pad(&name, NAME_LEN, ' '));
        out.push_str(&pad(&self.indicator, 1, 'E'));
        out.push_str(&pad(&self.pnr_code, PNR_LEN, ' '));
        out.push_str(&pad(&self.from, 3, ' '));
        out.push_str(&pad(&self.to, 3, ' '));
        out.push_str(&pad(&self.airline, AIRLINE_LEN, ' '));
        out.push_str(&pad(&self.flight_number, FLIGHT_LEN, ' '));
        out.push_str(&format!("{:0>3.3}", self.julian_day));
        out.push_str(&pad(&self.class, 1, ' '));
        out.push_str(&pad(&self.seat, SEAT_LEN, ' '));
        out.push_str(&pad(&self.sequence, SEQUENCE_LEN, ' '));
        out.push_str(TRAILER);
        out
    }
}

fn random_string<R: Rng + ?Sized>(rng: &mut R, length: usize, charset: &[u8]) -> String {
    (0..length)
        .map(|_| char::from(charset[rng.gen_range(0..charset.len())]))
        .collect()
}

/// Builds a boarding pass string for the given passenger and route.
///
/// Reservation code, airline, flight number, seat, sequence and class are
/// random placeholders: this is a fixture generator, not a ticketing
/// system. An unparsable `date` is encoded as day `000`.
pub fn generate_bcbp(last_name: &str, first_name: &str, date: &str, from: &str, to: &str) -> Result<String> {
    generate_bcbp_with_rng(&mut rand::thread_rng(), last_name, first_name, date, from, to)
}

pub fn generate_bcbp_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    last_name: &str,
    first_name: &str,
    date: &str,
    from: &str,
    to: &str,
) -> Result<String> {
    for (field, value) in [("last name", last_name), ("first name", first_name), ("flight date", date)] {
        if value.is_empty() {
            return Err(CodecError::invalid_field(field, "required"));
        }
    }

    let pass = BoardingPass {
        format_code: "M".to_string(),
        total_leg: "1".to_string(),
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        indicator: "E".to_string(),
        pnr_code: random_string(rng, 6, UPPER),
        from: from.to_string(),
        to: to.to_string(),
        airline: random_string(rng, 2, UPPER),
        flight_number: random_string(rng, 1, &DIGITS[1..]) + &random_string(rng, 3, DIGITS),
        julian_day: date_to_julian(date),
        class: random_string(rng, 1, CLASSES),
        seat: random_string(rng, 3, DIGITS) + &random_string(rng, 1, UPPER),
        sequence: random_string(rng, 4, DIGITS),
        ..Default::default()
    };
    debug!(julian_day = %pass.julian_day, "generated boarding pass");
    Ok(pass.encode())
}

pub fn parse_bcbp(data: &str) -> Result<BoardingPass> {
    if data.len() < MIN_LEN {
        return Err(CodecError::invalid_length(
            LengthConstraint::AtLeast(MIN_LEN),
            data.len(),
            "boarding pass",
        ));
    }
    if !data.is_ascii() {
        return Err(CodecError::unsupported_format("boarding pass must be ASCII"));
    }

    let field = |start: usize, end: usize| slice(data, start, end);

    let name = field(2, 22);
    let mut name_parts = name.split('/');
    let last_name = name_parts.next().unwrap_or_default().trim();
    let first_name = name_parts.next().unwrap_or_default().trim();

    let julian_day = field(44, 47);
    let date = julian_day_to_gregorian(julian_day)?;

    let airline = field(36, 39);
    validate_airline(airline)?;

    let flight_number = sanitize_flight_number(&data[39..43])?;

    debug!(from = field(30, 33), to = field(33, 36), "parsed boarding pass");
    Ok(BoardingPass {
        format_code: field(0, 1).to_string(),
        total_leg: field(1, 2).to_string(),
        name: name.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        indicator: field(22, 23).to_string(),
        pnr_code: field(23, 30).to_string(),
        from: field(30, 33).to_string(),
        to: field(33, 36).to_string(),
        airline: airline.to_string(),
        flight_number,
        julian_day: julian_day.to_string(),
        date: Some(date),
        class: field(47, 48).to_string(),
        seat: field(48, 52).to_string(),
        sequence: field(52, 56).to_string(),
        status: field(57, 58).to_string(),
    })
}

fn slice(data: &str, start: usize, end: usize) -> &str {
    data[start..end].trim()
}

/// Lower-case letters usually mean a misread barcode.
fn validate_airline(airline: &str) -> Result<()> {
    if airline.len() < 2 {
        return Err(CodecError::invalid_field("airline", format!("'{}' is too short", airline)));
    }
    if let Some(bad) = airline.chars().find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit())) {
        return Err(CodecError::invalid_field(
            "airline",
            format!("unexpected character '{}' in '{}'", bad, airline),
        ));
    }
    Ok(())
}

/// Drops leading zeros: `"0042"` -> `"42"`. Letters may sit among the
/// leading zeros but the field must start with a digit.
pub fn sanitize_flight_number(raw: &str) -> Result<String> {
    let flight = raw.trim();
    let invalid = || CodecError::invalid_field("flight number", format!("'{}'", flight));

    if !flight.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid());
    }
    for (i, ch) in flight.char_indices() {
        if ch.is_ascii_digit() {
            if ch != '0' {
                return Ok(flight[i..].to_string());
            }
        } else if !ch.is_ascii_alphabetic() {
            return Err(invalid());
        }
    }
    Err(invalid())
}

pub struct Bcbp;

impl TextFormat for Bcbp {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "bcbp",
            aliases: &["boarding-pass", "iata"],
            alphabet: "printable ASCII",
            line_widths: &[MIN_LEN],
            description: "IATA Bar Coded Boarding Pass (mandatory single-leg section)",
        }
    }

    fn validate(&self, input: &str) -> Result<()> {
        parse_bcbp(input).map(|_| ())
    }

    fn detect_score(&self, input: &str) -> DetectCandidate {
        let mut confidence: f64 = 0.0;
        let mut reasons = Vec::new();
        let mut warnings = Vec::new();

        if input.starts_with('M') && input.chars().nth(1).is_some_and(|c| c.is_ascii_digit()) {
            confidence = util::confidence::WEAK_MATCH;
            reasons.push("starts with format code M and a leg count".to_string());
        }
        if input.len() >= MIN_LEN {
            if input.get(2..22).is_some_and(|name| name.contains('/')) {
                confidence = confidence.max(util::confidence::PARTIAL_MATCH);
                reasons.push("name field contains '/'".to_string());
            }
            match parse_bcbp(input) {
                Ok(_) => {
                    confidence = util::confidence::STRUCTURE_MATCH;
                    reasons.push("parses as a boarding pass".to_string());
                }
                Err(e) if confidence > 0.0 => warnings.push(e.to_string()),
                Err(_) => {}
            }
        } else if confidence > 0.0 {
            warnings.push(format!("shorter than {} characters", MIN_LEN));
        }

        DetectCandidate {
            format: "bcbp".to_string(),
            confidence,
            reasons,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = "M1DESMARAIS/LUC       EABC123 YULFRAAC 0834 226F001A0025 1AA";

    #[test]
    fn test_parse_sample() {
        let pass = parse_bcbp(SAMPLE).unwrap();
        assert_eq!(pass.format_code, "M");
        assert_eq!(pass.total_leg, "1");
        assert_eq!(pass.last_name, "DESMARAIS");
        assert_eq!(pass.first_name, "LUC");
        assert_eq!(pass.indicator, "E");
        assert_eq!(pass.pnr_code, "ABC123");
        assert_eq!(pass.from, "YUL");
        assert_eq!(pass.to, "FRA");
        assert_eq!(pass.airline, "AC");
        assert_eq!(pass.flight_number, "834");
        assert_eq!(pass.julian_day, "226");
        assert_eq!(pass.date, NaiveDate::from_ymd_opt(2025, 8, 14));
        assert_eq!(pass.class, "F");
        assert_eq!(pass.seat, "001A");
        assert_eq!(pass.sequence, "0025");
    }

    #[test]
    fn test_parse_too_short() {
        let result = parse_bcbp("M1DESMARAIS/LUC");
        assert!(matches!(
            result,
            Err(CodecError::InvalidLength { expected: LengthConstraint::AtLeast(58), actual: 15, .. })
        ));
    }

    #[test]
    fn test_parse_length_boundary() {
        let result = parse_bcbp(&SAMPLE[..57]);
        assert!(matches!(
            result,
            Err(CodecError::InvalidLength { expected: LengthConstraint::AtLeast(58), actual: 57, .. })
        ));

        let pass = parse_bcbp(&SAMPLE[..58]).unwrap();
        assert_eq!(pass.last_name, "DESMARAIS");
        assert_eq!(pass.sequence, "0025");
    }

    #[test]
    fn test_parse_name_with_title() {
        let raw = SAMPLE.replacen("DESMARAIS/LUC  ", "DOE/JOHN/MR    ", 1);
        let pass = parse_bcbp(&raw).unwrap();
        assert_eq!(pass.name, "DOE/JOHN/MR");
        assert_eq!(pass.last_name, "DOE");
        assert_eq!(pass.first_name, "JOHN");
    }

    #[test]
    fn test_encode_short_julian_day_is_zero_filled() {
        let pass = BoardingPass {
            last_name: "Doe".to_string(),
            first_name: "John".to_string(),
            julian_day: "7".to_string(),
            ..Default::default()
        };
        let raw = pass.encode();
        assert_eq!(&raw[44..47], "007");
    }

    #[test]
    fn test_parse_name_without_slash() {
        let raw = SAMPLE.replacen("DESMARAIS/LUC", "DESMARAIS LUC", 1);
        let pass = parse_bcbp(&raw).unwrap();
        assert_eq!(pass.last_name, "DESMARAIS LUC");
        assert_eq!(pass.first_name, "");
    }

    #[test]
    fn test_parse_bad_julian_day() {
        let raw = SAMPLE.replacen(" 226F", " 2X6F", 1);
        assert!(matches!(parse_bcbp(&raw), Err(CodecError::InvalidDate { .. })));
    }

    #[test]
    fn test_parse_lowercase_airline() {
        let raw = SAMPLE.replacen("FRAAC ", "FRAac ", 1);
        assert!(matches!(
            parse_bcbp(&raw),
            Err(CodecError::InvalidField { field: "airline", .. })
        ));
    }

    #[test]
    fn test_parse_short_airline() {
        let raw = SAMPLE.replacen("FRAAC ", "FRAA  ", 1);
        assert!(matches!(
            parse_bcbp(&raw),
            Err(CodecError::InvalidField { field: "airline", .. })
        ));
    }

    #[test]
    fn test_parse_non_ascii() {
        let raw = SAMPLE.replacen("LUC", "LÜC", 1);
        assert!(matches!(parse_bcbp(&raw), Err(CodecError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_sanitize_flight_number() {
        assert_eq!(sanitize_flight_number("0834").unwrap(), "834");
        assert_eq!(sanitize_flight_number("1234").unwrap(), "1234");
        assert_eq!(sanitize_flight_number("0A12").unwrap(), "12");
        assert_eq!(sanitize_flight_number(" 12 ").unwrap(), "12");
    }

    #[test]
    fn test_sanitize_flight_number_rejects() {
        assert!(sanitize_flight_number("ABCD").is_err());
        assert!(sanitize_flight_number("0000").is_err());
        assert!(sanitize_flight_number("    ").is_err());
        assert!(sanitize_flight_number("0-12").is_err());
    }

    #[test]
    fn test_generate_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let raw = generate_bcbp_with_rng(&mut rng, "Doe", "John", "2025-02-01", "CGK", "SIN").unwrap();
        assert_eq!(raw.len(), 59);
        assert_eq!(&raw[..23], format!("M1{:<20}E", "DOE/JOHN"));
        assert_eq!(&raw[30..36], "CGKSIN");
        assert_eq!(&raw[44..47], "032");
        assert!(raw.ends_with("1AA"));
    }

    #[test]
    fn test_generate_is_seeded() {
        let a = generate_bcbp_with_rng(&mut StdRng::seed_from_u64(1), "A", "B", "2025-01-01", "X", "Y").unwrap();
        let b = generate_bcbp_with_rng(&mut StdRng::seed_from_u64(1), "A", "B", "2025-01-01", "X", "Y").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_then_parse() {
        let raw = generate_bcbp("Doe", "John", "2025-03-10", "CGK", "SIN").unwrap();
        let pass = parse_bcbp(&raw).unwrap();
        assert_eq!(pass.last_name, "DOE");
        assert_eq!(pass.first_name, "JOHN");
        assert_eq!(pass.from, "CGK");
        assert_eq!(pass.to, "SIN");
        assert_eq!(pass.julian_day, "069");
        assert_eq!(pass.airline.len(), 2);
        assert!(CLASSES.contains(&pass.class.as_bytes()[0]));
    }

    #[test]
    fn test_generate_invalid_date_uses_sentinel() {
        let raw = generate_bcbp("Doe", "John", "not-a-date", "CGK", "SIN").unwrap();
        assert_eq!(&raw[44..47], "000");
    }

    #[test]
    fn test_generate_truncates_long_name() {
        let raw = generate_bcbp("Wolfeschlegelsteinhausen", "Hubert", "2025-01-01", "JFK", "LAX").unwrap();
        assert_eq!(&raw[2..22], "WOLFESCHLEGELSTEINHA");
    }

    #[test]
    fn test_generate_requires_fields() {
        assert!(matches!(
            generate_bcbp("", "John", "2025-01-01", "CGK", "SIN"),
            Err(CodecError::InvalidField { field: "last name", .. })
        ));
        assert!(generate_bcbp("Doe", "", "2025-01-01", "CGK", "SIN").is_err());
        assert!(generate_bcbp("Doe", "John", "", "CGK", "SIN").is_err());
    }

    #[test]
    fn test_detect_score() {
        assert!(Bcbp.detect_score(SAMPLE).confidence >= util::confidence::STRUCTURE_MATCH);
        assert_eq!(Bcbp.detect_score("P<UTOERIKSSON").confidence, 0.0);
    }
}
