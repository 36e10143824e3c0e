pub mod bcbp;
pub mod check_digit;
pub mod date;
pub mod mrz;
pub mod util;

pub use bcbp::Bcbp;
pub use mrz::Mrz;

use crate::error::{CodecError, Result};
use crate::types::{DetectCandidate, FormatMeta};

pub trait TextFormat: Send + Sync {
    fn meta(&self) -> FormatMeta;
    fn validate(&self, input: &str) -> Result<()>;
    fn detect_score(&self, input: &str) -> DetectCandidate;

    fn name(&self) -> &'static str {
        self.meta().name
    }
}

static FORMATS: [&dyn TextFormat; 2] = [&Bcbp, &Mrz];

pub fn formats() -> &'static [&'static dyn TextFormat] {
    &FORMATS
}

/// Looks a format up by name or alias, case-insensitively.
pub fn find_format(name: &str) -> Result<&'static dyn TextFormat> {
    let wanted = name.to_ascii_lowercase();
    formats()
        .iter()
        .copied()
        .find(|f| {
            let meta = f.meta();
            meta.name == wanted || meta.aliases.contains(&wanted.as_str())
        })
        .ok_or_else(|| CodecError::unsupported_format(name.to_string()))
}

/// Scores `input` against every format, best match first. Formats with no
/// evidence at all are left out.
pub fn detect(input: &str) -> Vec<DetectCandidate> {
    let trimmed = input.trim();
    let mut candidates: Vec<DetectCandidate> = formats()
        .iter()
        .map(|f| f.detect_score(trimmed))
        .filter(|c| c.confidence > 0.0)
        .collect();
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_format_by_alias() {
        assert_eq!(find_format("ICAO").unwrap().name(), "mrz");
        assert_eq!(find_format("boarding-pass").unwrap().name(), "bcbp");
        assert!(find_format("pdf417").is_err());
    }

    #[test]
    fn test_detect_orders_by_confidence() {
        let candidates = detect("P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\nL898902C36UTO7408122F1204159ZE184226B<<<<<16");
        assert_eq!(candidates[0].format, "mrz");
    }

    #[test]
    fn test_detect_boarding_pass() {
        let candidates = detect("M1DESMARAIS/LUC       EABC123 YULFRAAC 0834 226F001A0025 1AA\n");
        assert_eq!(candidates[0].format, "bcbp");
    }

    #[test]
    fn test_validate_per_format() {
        let bcbp = find_format("bcbp").unwrap();
        let mrz = find_format("mrz").unwrap();
        let pass = "M1DESMARAIS/LUC       EABC123 YULFRAAC 0834 226F001A0025 1AA";
        assert!(bcbp.validate(pass).is_ok());
        assert!(mrz.validate(pass).is_err());
        assert!(bcbp.validate("M1DOE/JOHN").is_err());
    }

    #[test]
    fn test_detect_nothing() {
        assert!(detect("hello world").is_empty());
    }
}
