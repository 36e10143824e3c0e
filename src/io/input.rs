use std::fs;
use std::io::{self, Read};

use is_terminal::IsTerminal;
use tracing::debug;

use crate::error::Result;
use crate::types::InputSource;

pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Reading from stdin; finish with Ctrl-D. Use -i to pass input directly.");
            }
            let mut buf = String::new();
            stdin.lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
        InputSource::File(path) => {
            debug!(path = %path.display(), "reading input file");
            Ok(fs::read_to_string(path)?)
        }
        InputSource::Literal(data) => Ok(data.clone()),
    }
}
