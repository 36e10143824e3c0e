//! Fixed-width field helpers shared by the BCBP and MRZ codecs.

pub const FILLER: char = '<';

pub mod confidence {
    pub const STRUCTURE_MATCH: f64 = 0.95;
    pub const LAYOUT_MATCH: f64 = 0.70;
    pub const PARTIAL_MATCH: f64 = 0.50;
    pub const WEAK_MATCH: f64 = 0.30;
}

/// Right-pads `text` with `fill` up to `length` characters, truncating when
/// it is already longer.
pub fn pad(text: &str, length: usize, fill: char) -> String {
    let mut out: String = text.chars().take(length).collect();
    let missing = length - out.chars().count();
    out.extend(std::iter::repeat(fill).take(missing));
    out
}

/// Turns a filler-padded MRZ field into readable text: `<` runs become a
/// single space and leading/trailing fillers disappear.
pub fn clear(field: &str) -> String {
    field
        .split(FILLER)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numeric value of an MRZ character for check-digit arithmetic.
///
/// Case-sensitive: lower-case letters count as 0, so callers upper-case
/// first.
pub fn char_value(ch: char) -> u32 {
    match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'A'..='Z' => ch as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}

pub fn split_by_n(s: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return vec![s.to_string()];
    }
    let chars: Vec<char> = s.chars().collect();
    chars.chunks(n).map(|chunk| chunk.iter().collect()).collect()
}

/// `"John Ronald Doe"` -> `"JOHN<<RONALD<DOE"`: first word is the surname.
pub fn format_name(name: &str) -> String {
    let upper = name.to_uppercase();
    let mut parts = upper.split_whitespace();
    let Some(surname) = parts.next() else {
        return String::new();
    };
    let given: Vec<&str> = parts.collect();
    format!("{}{}{}{}", surname, FILLER, FILLER, given.join("<"))
}
