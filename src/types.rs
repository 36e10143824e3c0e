use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => InputSource::Literal(s.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub alphabet: &'static str,
    pub line_widths: &'static [usize],
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetectCandidate {
    pub format: String,
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}
