use proptest::prelude::*;

use travelcodec::codec::check_digit::compute_check_digit;
use travelcodec::codec::util::{char_value, clear, pad, FILLER};
use travelcodec::{generate_mrz, parse_mrz, DocumentClass, PassportRecord, TravelDocumentRecord};

const WEIGHTS: [u32; 3] = [7, 3, 1];

fn manual_sum(input: &str) -> u32 {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| char_value(c) * WEIGHTS[i % 3])
        .sum::<u32>()
        % 10
}

fn passport(number: &str, nationality: &str, dob: &str, expiry: &str, sex: &str) -> PassportRecord {
    let mut record = PassportRecord::default();
    record.fields.country = nationality.to_string();
    record.fields.name = "DOE JOHN".to_string();
    record.fields.document_number = number.to_string();
    record.fields.nationality = nationality.to_string();
    record.fields.date_of_birth = dob.to_string();
    record.fields.sex = sex.to_string();
    record.fields.expiry_date = expiry.to_string();
    record
}

#[test]
fn check_digit_specimen_matches_manual_sum() {
    assert_eq!(compute_check_digit("AB1234567<"), manual_sum("AB1234567<"));
    assert_eq!(compute_check_digit("AB1234567<"), 1);
}

proptest! {
    #[test]
    fn check_digit_is_deterministic_and_weighted(input in "[A-Z0-9<]{0,40}") {
        let first = compute_check_digit(&input);
        prop_assert_eq!(first, compute_check_digit(&input));
        prop_assert_eq!(first, manual_sum(&input));
        prop_assert!(first < 10);
    }

    #[test]
    fn pad_always_hits_target_length(input in "[A-Z<]{0,60}", width in 0usize..50) {
        prop_assert_eq!(pad(&input, width, FILLER).chars().count(), width);
    }

    #[test]
    fn clear_never_leaves_filler(input in "[A-Z0-9<]{0,44}") {
        prop_assert!(!clear(&input).contains(FILLER));
    }

    #[test]
    fn passport_round_trip(
        number in "[A-Z0-9]{1,9}",
        nationality in "[A-Z]{3}",
        dob in "[0-9]{2}(0[1-9]|1[0-2])(0[1-9]|1[0-9]|2[0-8])",
        expiry in "[0-9]{2}(0[1-9]|1[0-2])(0[1-9]|1[0-9]|2[0-8])",
        sex in "[MF]",
    ) {
        let source = passport(&number, &nationality, &dob, &expiry, &sex);
        let encoded = generate_mrz(DocumentClass::Td3, &TravelDocumentRecord::Td3(source)).unwrap();
        let TravelDocumentRecord::Td3(parsed) = parse_mrz(&encoded).unwrap() else {
            panic!("expected TD3");
        };

        prop_assert_eq!(&parsed.fields.document_number, &number);
        prop_assert_eq!(&parsed.fields.nationality, &nationality);
        prop_assert_eq!(&parsed.fields.date_of_birth, &dob);
        prop_assert_eq!(&parsed.fields.expiry_date, &expiry);
        prop_assert_eq!(&parsed.fields.sex, &sex);
        prop_assert!(parsed.expected_hash.is_valid);
    }
}
