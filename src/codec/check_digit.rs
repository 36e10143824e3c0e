use super::util::char_value;

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// ICAO 9303 weighted modulo-10 check digit.
pub fn compute_check_digit(input: &str) -> u32 {
    let sum: u32 = input
        .chars()
        .enumerate()
        .map(|(i, ch)| char_value(ch) * WEIGHTS[i % WEIGHTS.len()])
        .sum();
    sum % 10
}

pub fn check_digit_char(input: &str) -> char {
    char::from(b'0' + compute_check_digit(input) as u8)
}

/// Compares a check digit read from a document against the one computed
/// over `field`.
pub fn matches(field: &str, read: char) -> bool {
    read == check_digit_char(field)
}
