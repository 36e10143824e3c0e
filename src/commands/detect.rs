use serde::Serialize;

use crate::io::read_input;
use travelcodec::codec::{self, mrz::detect_class};
use travelcodec::error::Result;
use travelcodec::types::{DetectCandidate, InputSource};

const PREVIEW_LEN: usize = 60;

#[derive(Debug, Serialize)]
pub struct DetectResult {
    pub schema_version: u32,
    pub candidates: Vec<DetectCandidate>,
    pub document_class: Option<String>,
    pub input_preview: String,
}

pub fn run_detect(input: &InputSource) -> Result<DetectResult> {
    let text = read_input(input)?;
    let trimmed = text.trim();

    let candidates = codec::detect(trimmed);
    let document_class = detect_class(trimmed).ok().map(|c| c.name().to_string());

    let first_line = trimmed.lines().next().unwrap_or_default();
    let input_preview = match first_line.char_indices().nth(PREVIEW_LEN) {
        Some((idx, _)) => format!("{}...", &first_line[..idx]),
        None => first_line.to_string(),
    };

    Ok(DetectResult {
        schema_version: 1,
        candidates,
        document_class,
        input_preview,
    })
}
