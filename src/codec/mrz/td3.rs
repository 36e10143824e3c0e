//! TD3: two lines of 44, used on passport booklets.

use super::{class_lines, expected_hash, fill_line2, header_fields, line2_checks, Check, DocumentClass, PassportRecord};
use crate::codec::check_digit::check_digit_char;
use crate::codec::date::to_mrz_date;
use crate::codec::util::{clear, format_name, pad, FILLER};
use crate::error::Result;

const COUNTRY_LEN: usize = 3;
const NAME_LEN: usize = 39;
const DOCUMENT_NUMBER_LEN: usize = 9;
const PERSONAL_NUMBER_LEN: usize = 14;

pub(super) fn extract(lines: &[String]) -> Result<PassportRecord> {
    let lines = class_lines(lines, DocumentClass::Td3)?;
    let (line1, line2) = (lines[0], lines[1]);

    let mut fields = header_fields(line1);
    fill_line2(&mut fields, line2);

    let core = line2_checks(line2);
    let personal = Check::at(line2, 28..42, 42);
    // the composite covers the whole body, nationality and sex included
    let composite = Check::at(line2, 0..43, 43);

    Ok(PassportRecord {
        fields,
        personal_number: clear(&line2[28..42]),
        personal_number_check: clear(&line2[42..43]),
        composite_check: clear(&line2[43..]),
        expected_hash: expected_hash(&core, Some(&personal), Some(&composite)),
    })
}

/// Builds both lines of a passport MRZ. Dates may be ISO `YYYY-MM-DD` or
/// already `YYMMDD`; unparsable dates become `000000`.
pub(super) fn generate(record: &PassportRecord) -> String {
    let data = &record.fields;
    let line1 = format!(
        "P{}{}{}",
        FILLER,
        pad(&data.country.to_uppercase(), COUNTRY_LEN, FILLER),
        pad(&format_name(&data.name), NAME_LEN, FILLER)
    );

    let number = pad(&data.document_number.to_uppercase(), DOCUMENT_NUMBER_LEN, FILLER);
    let dob = to_mrz_date(&data.date_of_birth);
    let expiry = to_mrz_date(&data.expiry_date);
    let personal = pad(&record.personal_number.to_uppercase(), PERSONAL_NUMBER_LEN, FILLER);
    let sex = data
        .sex
        .chars()
        .next()
        .map_or(FILLER, |c| c.to_ascii_uppercase());

    let number_block = format!("{}{}", number, check_digit_char(&number));
    let dob_block = format!("{}{}", dob, check_digit_char(&dob));
    let expiry_block = format!("{}{}", expiry, check_digit_char(&expiry));
    let personal_block = format!("{}{}", personal, check_digit_char(&personal));
    let body = format!(
        "{}{}{}{}{}{}",
        number_block,
        pad(&data.nationality.to_uppercase(), COUNTRY_LEN, FILLER),
        dob_block,
        sex,
        expiry_block,
        personal_block,
    );
    let composite = check_digit_char(&body);

    format!("{}\n{}{}", line1, body, composite)
}
