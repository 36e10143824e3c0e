//! Machine readable visas. MRV-A uses two lines of 44, MRV-B two lines of
//! 36; both end line 2 with optional data and carry no composite digit.

use super::{class_lines, expected_hash, fill_line2, header_fields, line2_checks, DocumentClass, VisaRecord};
use crate::codec::util::clear;
use crate::error::Result;

pub(super) fn extract(lines: &[String], class: DocumentClass) -> Result<VisaRecord> {
    let lines = class_lines(lines, class)?;
    let (line1, line2) = (lines[0], lines[1]);

    let mut fields = header_fields(line1);
    fill_line2(&mut fields, line2);
    let core = line2_checks(line2);

    Ok(VisaRecord {
        fields,
        additional_info: clear(&line2[28..]),
        expected_hash: expected_hash(&core, None, None),
    })
}
