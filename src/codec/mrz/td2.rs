//! TD2: two lines of 36, used on ID cards and older visas.

use super::{class_lines, expected_hash, fill_line2, header_fields, line2_checks, Check, DocumentClass, Td2Record};
use crate::codec::util::clear;
use crate::error::Result;

pub(super) fn extract(lines: &[String]) -> Result<Td2Record> {
    let lines = class_lines(lines, DocumentClass::Td2)?;
    let (line1, line2) = (lines[0], lines[1]);

    let mut fields = header_fields(line1);
    fill_line2(&mut fields, line2);

    let core = line2_checks(line2);
    let body = format!("{}{}{}", &line2[..10], &line2[13..20], &line2[21..35]);
    let composite = Check {
        field: &body,
        read: line2.as_bytes()[35],
    };

    Ok(Td2Record {
        fields,
        additional_info: clear(&line2[28..35]),
        composite_check: clear(&line2[35..]),
        expected_hash: expected_hash(&core, None, Some(&composite)),
    })
}
