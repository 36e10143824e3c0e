use std::fs::File;
use std::io::{self, Write};

use crate::error::Result;
use crate::types::OutputDest;

pub struct OutputConfig {
    pub dest: OutputDest,
}

/// Writes `text` followed by a newline.
pub fn write_output(text: &str, config: &OutputConfig) -> Result<()> {
    match &config.dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{}", text)?;
            Ok(())
        }
        OutputDest::Stdout => {
            let mut handle = io::stdout().lock();
            writeln!(handle, "{}", text)?;
            Ok(())
        }
    }
}
