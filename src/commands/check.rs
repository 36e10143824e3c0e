use travelcodec::codec::check_digit::compute_check_digit;

/// Fields are compared upper-cased; lower-case letters would otherwise
/// weigh as filler.
pub fn run_check_digit(text: &str) -> u32 {
    compute_check_digit(&text.trim().to_ascii_uppercase())
}
