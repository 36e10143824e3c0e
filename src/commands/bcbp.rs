use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use super::GenBcbpCommand;
use crate::io::read_input;
use travelcodec::error::Result;
use travelcodec::types::InputSource;
use travelcodec::{generate_bcbp, generate_bcbp_with_rng, parse_bcbp, BoardingPass};

#[derive(Debug, Serialize)]
pub struct ParseBcbpResult {
    pub schema_version: u32,
    pub boarding_pass: BoardingPass,
}

pub fn run_gen_bcbp(cmd: &GenBcbpCommand) -> Result<String> {
    match cmd.seed {
        Some(seed) => generate_bcbp_with_rng(
            &mut StdRng::seed_from_u64(seed),
            &cmd.last_name,
            &cmd.first_name,
            &cmd.date,
            &cmd.from,
            &cmd.to,
        ),
        None => generate_bcbp(&cmd.last_name, &cmd.first_name, &cmd.date, &cmd.from, &cmd.to),
    }
}

pub fn run_parse_bcbp(input: &InputSource) -> Result<ParseBcbpResult> {
    let text = read_input(input)?;
    // trailing spaces are part of the record, line endings are not
    let data = text.trim_end_matches(['\r', '\n']);
    Ok(ParseBcbpResult {
        schema_version: 1,
        boarding_pass: parse_bcbp(data)?,
    })
}
