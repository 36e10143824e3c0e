//! ICAO 9303 machine readable zones.
//!
//! The leading character of the first line picks the document family and
//! the line width picks the layout within it. Each layout has its own
//! extractor; check digits are recomputed afterwards and reported in
//! [`ExpectedHash`] rather than rejected.

mod record;
mod td1;
mod td2;
mod td3;
mod visa;

use std::fmt;

use serde::Serialize;
use tracing::debug;

pub use record::{
    DocumentFields, ExpectedHash, PassportRecord, Td1Record, Td2Record, TravelDocumentRecord, VisaRecord,
};

use super::check_digit::{self, check_digit_char};
use super::util::{self, clear, split_by_n, FILLER};
use super::TextFormat;
use crate::error::{CodecError, LengthConstraint, Result};
use crate::types::{DetectCandidate, FormatMeta};

pub const TD1_CHAR_LEN: usize = 30;
pub const TD2_CHAR_LEN: usize = 36;
pub const TD3_CHAR_LEN: usize = 44;
pub const VISA_A_CHAR_LEN: usize = 44;
pub const VISA_B_CHAR_LEN: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentClass {
    #[serde(rename = "TD1")]
    Td1,
    #[serde(rename = "TD2")]
    Td2,
    #[serde(rename = "TD3")]
    Td3,
    #[serde(rename = "MRV-A")]
    VisaA,
    #[serde(rename = "MRV-B")]
    VisaB,
}

impl DocumentClass {
    pub const ALL: [DocumentClass; 5] = [
        DocumentClass::Td1,
        DocumentClass::Td2,
        DocumentClass::Td3,
        DocumentClass::VisaA,
        DocumentClass::VisaB,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DocumentClass::Td1 => "TD1",
            DocumentClass::Td2 => "TD2",
            DocumentClass::Td3 => "TD3",
            DocumentClass::VisaA => "MRV-A",
            DocumentClass::VisaB => "MRV-B",
        }
    }

    pub fn width(self) -> usize {
        match self {
            DocumentClass::Td1 => TD1_CHAR_LEN,
            DocumentClass::Td2 => TD2_CHAR_LEN,
            DocumentClass::Td3 => TD3_CHAR_LEN,
            DocumentClass::VisaA => VISA_A_CHAR_LEN,
            DocumentClass::VisaB => VISA_B_CHAR_LEN,
        }
    }

    pub fn line_count(self) -> usize {
        match self {
            DocumentClass::Td1 => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for DocumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Splits raw text into trimmed lines, re-splitting a first line that
/// holds the whole zone without line breaks.
fn normalize_lines(raw: &str) -> Result<Vec<String>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CodecError::invalid_length(LengthConstraint::Lines(1), 0, "empty MRZ"));
    }
    if !raw.is_ascii() {
        return Err(CodecError::unsupported_format("MRZ must be ASCII"));
    }

    let mut lines: Vec<String> = raw.lines().map(|l| l.trim().to_string()).collect();
    let first_len = lines[0].len();
    let joined_width = match lines[0].chars().next() {
        Some('A' | 'B' | 'C' | 'I') if first_len > TD2_CHAR_LEN => {
            if first_len == 3 * TD1_CHAR_LEN {
                Some(TD1_CHAR_LEN)
            } else {
                Some(TD2_CHAR_LEN)
            }
        }
        Some('P') if first_len > TD3_CHAR_LEN => Some(TD3_CHAR_LEN),
        Some('V') if first_len > VISA_A_CHAR_LEN => {
            if first_len == 2 * VISA_A_CHAR_LEN {
                Some(VISA_A_CHAR_LEN)
            } else {
                Some(VISA_B_CHAR_LEN)
            }
        }
        _ => None,
    };
    if let Some(width) = joined_width {
        debug!(width, length = first_len, "re-splitting joined MRZ");
        lines = split_by_n(&lines[0], width);
    }
    Ok(lines)
}

fn classify(lines: &[String]) -> Result<DocumentClass> {
    let first = &lines[0];
    match first.chars().next() {
        Some('A' | 'B' | 'C' | 'I') if first.len() == TD1_CHAR_LEN => Ok(DocumentClass::Td1),
        Some('A' | 'B' | 'C' | 'I') => Ok(DocumentClass::Td2),
        Some('P') => Ok(DocumentClass::Td3),
        Some('V') if first.len() == VISA_A_CHAR_LEN => Ok(DocumentClass::VisaA),
        Some('V') => Ok(DocumentClass::VisaB),
        Some(other) => Err(CodecError::unsupported_format(format!(
            "unrecognized document code '{}'",
            other
        ))),
        None => Err(CodecError::invalid_length(LengthConstraint::Lines(1), 0, "empty MRZ")),
    }
}

/// Determines the document layout without extracting fields.
pub fn detect_class(raw: &str) -> Result<DocumentClass> {
    classify(&normalize_lines(raw)?)
}

pub fn parse_mrz(raw: &str) -> Result<TravelDocumentRecord> {
    let lines = normalize_lines(raw)?;
    let class = classify(&lines)?;
    debug!(%class, lines = lines.len(), "dispatching MRZ");

    let record = match class {
        DocumentClass::Td1 => TravelDocumentRecord::Td1(td1::extract(&lines)?),
        DocumentClass::Td2 => TravelDocumentRecord::Td2(td2::extract(&lines)?),
        DocumentClass::Td3 => TravelDocumentRecord::Td3(td3::extract(&lines)?),
        DocumentClass::VisaA => TravelDocumentRecord::VisaA(visa::extract(&lines, class)?),
        DocumentClass::VisaB => TravelDocumentRecord::VisaB(visa::extract(&lines, class)?),
    };
    debug!(%class, is_valid = record.is_valid(), "parsed MRZ");
    Ok(record)
}

/// Renders a record as MRZ lines joined by `\n`. Only passports (TD3) can
/// be generated; `class` must agree with the record's variant.
pub fn generate_mrz(class: DocumentClass, record: &TravelDocumentRecord) -> Result<String> {
    match (class, record) {
        (DocumentClass::Td3, TravelDocumentRecord::Td3(passport)) => Ok(td3::generate(passport)),
        (DocumentClass::Td3, other) => Err(CodecError::unsupported_format(format!(
            "TD3 requested for a {} record",
            other.class()
        ))),
        (other, _) => Err(CodecError::unsupported_format(format!(
            "MRZ generation is not supported for {}",
            other
        ))),
    }
}

/// Checks the line count and every line's width for `class`, returning
/// each line cut to exactly that width.
fn class_lines(lines: &[String], class: DocumentClass) -> Result<Vec<&str>> {
    if lines.len() < class.line_count() {
        return Err(CodecError::invalid_length(
            LengthConstraint::Lines(class.line_count()),
            lines.len(),
            class.name(),
        ));
    }
    let width = class.width();
    lines[..class.line_count()]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if line.len() < width {
                Err(CodecError::invalid_length(
                    LengthConstraint::AtLeast(width),
                    line.len(),
                    format!("{} line {}", class, i + 1),
                ))
            } else {
                Ok(&line[..width])
            }
        })
        .collect()
}

/// Document type, issuing country and the name that fills the rest of
/// line 1 in every two-line layout.
fn header_fields(line1: &str) -> DocumentFields {
    DocumentFields {
        document_type: clear(&line1[..2]),
        country: clear(&line1[2..5]),
        name: clear(&line1[5..]),
        ..Default::default()
    }
}

/// Line-2 fields shared by TD2, TD3 and both visa layouts.
fn fill_line2(fields: &mut DocumentFields, line2: &str) {
    fields.document_number = clear(&line2[..9]);
    fields.document_number_check = clear(&line2[9..10]);
    fields.nationality = clear(&line2[10..13]);
    fields.date_of_birth = clear(&line2[13..19]);
    fields.date_of_birth_check = clear(&line2[19..20]);
    fields.sex = clear(&line2[20..21]);
    fields.expiry_date = clear(&line2[21..27]);
    fields.expiry_date_check = clear(&line2[27..28]);
}

/// A check digit as read from the zone next to the field it protects.
struct Check<'a> {
    field: &'a str,
    read: u8,
}

impl<'a> Check<'a> {
    fn at(line: &'a str, field: std::ops::Range<usize>, digit: usize) -> Self {
        Check {
            field: &line[field],
            read: line.as_bytes()[digit],
        }
    }

    fn expected(&self) -> char {
        check_digit_char(self.field)
    }

    fn is_valid(&self) -> bool {
        check_digit::matches(self.field, self.read as char)
    }

    /// An all-filler field may carry a filler instead of a digit.
    fn is_valid_or_empty(&self) -> bool {
        self.is_valid() || (self.read == FILLER as u8 && self.field.chars().all(|c| c == FILLER))
    }
}

/// Recomputes the check digits protecting line 2 of the two-line layouts.
fn line2_checks(line2: &str) -> [Check<'_>; 3] {
    [
        Check::at(line2, 0..9, 9),
        Check::at(line2, 13..19, 19),
        Check::at(line2, 21..27, 27),
    ]
}

fn expected_hash(core: &[Check<'_>; 3], personal: Option<&Check<'_>>, composite: Option<&Check<'_>>) -> ExpectedHash {
    let is_valid = core.iter().all(Check::is_valid)
        && personal.map_or(true, Check::is_valid_or_empty)
        && composite.map_or(true, Check::is_valid);
    ExpectedHash {
        is_valid,
        document_number_check: core[0].expected().to_string(),
        date_of_birth_check: core[1].expected().to_string(),
        expiry_date_check: core[2].expected().to_string(),
        personal_number_check: personal.map(|c| c.expected().to_string()),
        composite_check: composite.map(|c| c.expected().to_string()),
    }
}

pub struct Mrz;

impl TextFormat for Mrz {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "mrz",
            aliases: &["icao", "icao9303"],
            alphabet: "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ<",
            line_widths: &[TD1_CHAR_LEN, TD2_CHAR_LEN, TD3_CHAR_LEN],
            description: "ICAO 9303 machine readable zone (TD1, TD2, TD3, MRV-A, MRV-B)",
        }
    }

    fn validate(&self, input: &str) -> Result<()> {
        parse_mrz(input).map(|_| ())
    }

    fn detect_score(&self, input: &str) -> DetectCandidate {
        let mut confidence: f64 = 0.0;
        let mut reasons = Vec::new();
        let mut warnings = Vec::new();

        let alphabet = self.meta().alphabet;
        let body: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if !body.is_empty() && body.chars().all(|c| alphabet.contains(c)) {
            confidence = util::confidence::WEAK_MATCH;
            reasons.push("all characters in MRZ alphabet".to_string());
            if body.contains(FILLER) {
                confidence = util::confidence::PARTIAL_MATCH;
                reasons.push("contains '<' fillers".to_string());
            }
        }

        match parse_mrz(input) {
            Ok(record) => {
                confidence = if record.is_valid() {
                    util::confidence::STRUCTURE_MATCH
                } else {
                    util::confidence::LAYOUT_MATCH
                };
                reasons.push(format!("parses as {}", record.class()));
                if !record.is_valid() {
                    warnings.push("check digits do not match".to_string());
                }
            }
            Err(e) if confidence > 0.0 => warnings.push(e.to_string()),
            Err(_) => {}
        }

        DetectCandidate {
            format: "mrz".to_string(),
            confidence,
            reasons,
            warnings,
        }
    }
}
