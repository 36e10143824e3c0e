//! TD1: three lines of 30, used on ID cards.

use super::{class_lines, expected_hash, Check, DocumentClass, DocumentFields, Td1Record};
use crate::codec::util::clear;
use crate::error::Result;

pub(super) fn extract(lines: &[String]) -> Result<Td1Record> {
    let lines = class_lines(lines, DocumentClass::Td1)?;
    let (line1, line2, line3) = (lines[0], lines[1], lines[2]);

    let fields = DocumentFields {
        document_type: clear(&line1[..2]),
        country: clear(&line1[2..5]),
        document_number: clear(&line1[5..14]),
        document_number_check: clear(&line1[14..15]),
        date_of_birth: clear(&line2[..6]),
        date_of_birth_check: clear(&line2[6..7]),
        sex: clear(&line2[7..8]),
        expiry_date: clear(&line2[8..14]),
        expiry_date_check: clear(&line2[14..15]),
        nationality: clear(&line2[15..18]),
        name: clear(line3),
    };

    Ok(Td1Record {
        fields,
        additional_info_1: clear(&line1[15..]),
        additional_info_2: clear(&line2[18..29]),
        composite_check: clear(&line2[29..]),
        expected_hash: verify(line1, line2),
    })
}

/// The composite digit covers line 1 from the document number on and the
/// check-protected parts of line 2.
fn verify(line1: &str, line2: &str) -> super::ExpectedHash {
    let core = [
        Check::at(line1, 5..14, 14),
        Check::at(line2, 0..6, 6),
        Check::at(line2, 8..14, 14),
    ];
    let body = format!("{}{}{}{}", &line1[5..], &line2[..7], &line2[8..15], &line2[18..29]);
    let composite = Check {
        field: &body,
        read: line2.as_bytes()[29],
    };
    expected_hash(&core, None, Some(&composite))
}
