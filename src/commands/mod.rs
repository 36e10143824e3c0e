mod bcbp;
mod check;
mod detect;
mod info;
mod mrz;
mod verify;

pub use bcbp::{run_gen_bcbp, run_parse_bcbp};
pub use check::run_check_digit;
pub use detect::run_detect;
pub use info::{run_info, run_list};
pub use mrz::{run_expiry, run_gen_mrz, run_parse_mrz};
pub use verify::run_verify;

use serde::Serialize;

use crate::io::{write_output, OutputConfig};
use travelcodec::error::{CodecError, Result};
use travelcodec::types::{InputSource, OutputDest};
use travelcodec::{DocumentClass, PassportRecord};

pub trait CommandHandler {
    fn execute(&self) -> Result<()>;
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| CodecError::Io(e.into()))?;
    println!("{}", text);
    Ok(())
}

fn print_field(label: &str, value: &str) {
    let shown = if value.is_empty() { "-" } else { value };
    println!("{:<22} {}", format!("{}:", label), shown);
}

pub struct GenBcbpCommand {
    pub last_name: String,
    pub first_name: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub seed: Option<u64>,
    pub output: OutputDest,
}

impl CommandHandler for GenBcbpCommand {
    fn execute(&self) -> Result<()> {
        let encoded = run_gen_bcbp(self)?;
        let config = OutputConfig {
            dest: self.output.clone(),
        };
        write_output(&encoded, &config)
    }
}

pub struct ParseBcbpCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for ParseBcbpCommand {
    fn execute(&self) -> Result<()> {
        let result = run_parse_bcbp(&self.input)?;
        if self.json {
            return print_json(&result);
        }

        let pass = &result.boarding_pass;
        print_field("Format", &pass.format_code);
        print_field("Legs", &pass.total_leg);
        print_field("Last name", &pass.last_name);
        print_field("First name", &pass.first_name);
        print_field("PNR", &pass.pnr_code);
        print_field("From", &pass.from);
        print_field("To", &pass.to);
        print_field("Airline", &pass.airline);
        print_field("Flight", &pass.flight_number);
        print_field("Julian day", &pass.julian_day);
        print_field("Class", &pass.class);
        print_field("Seat", &pass.seat);
        print_field("Sequence", &pass.sequence);
        print_field("Status", &pass.status);
        Ok(())
    }
}

pub struct GenMrzCommand {
    pub class: DocumentClass,
    pub record: PassportRecord,
    pub output: OutputDest,
}

impl CommandHandler for GenMrzCommand {
    fn execute(&self) -> Result<()> {
        let encoded = run_gen_mrz(self.class, &self.record)?;
        let config = OutputConfig {
            dest: self.output.clone(),
        };
        write_output(&encoded, &config)
    }
}

pub struct ParseMrzCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for ParseMrzCommand {
    fn execute(&self) -> Result<()> {
        let result = run_parse_mrz(&self.input)?;
        if self.json {
            return print_json(&result);
        }

        let record = &result.record;
        let fields = record.fields();
        print_field("Class", record.class().name());
        print_field("Document type", &fields.document_type);
        print_field("Country", &fields.country);
        print_field("Name", &fields.name);
        print_field("Document number", &fields.document_number);
        print_field("Nationality", &fields.nationality);
        print_field("Date of birth", &fields.date_of_birth);
        print_field("Sex", &fields.sex);
        print_field("Expiry date", &fields.expiry_date);
        print_field("Check digits", if record.is_valid() { "valid" } else { "INVALID" });
        Ok(())
    }
}

pub struct VerifyCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for VerifyCommand {
    fn execute(&self) -> Result<()> {
        let result = run_verify(&self.input)?;
        if self.json {
            print_json(&result)?;
        } else if result.valid {
            println!("valid");
        } else if let Some(cause) = &result.cause {
            println!("invalid: {}", cause);
        } else {
            println!("invalid: check digit mismatch in {}", result.mismatches.join(", "));
        }

        match result.cause {
            Some(cause) => Err(cause),
            None if !result.valid => Err(CodecError::ChecksumMismatch),
            None => Ok(()),
        }
    }
}

pub struct ExpiryCommand {
    pub yymmdd: String,
    pub json: bool,
}

impl CommandHandler for ExpiryCommand {
    fn execute(&self) -> Result<()> {
        let result = run_expiry(&self.yymmdd)?;
        if self.json {
            print_json(&result)
        } else {
            let note = if result.expired { " (expired)" } else { "" };
            println!("{}{}", result.date, note);
            Ok(())
        }
    }
}

pub struct CheckDigitCommand {
    pub text: String,
}

impl CommandHandler for CheckDigitCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", run_check_digit(&self.text));
        Ok(())
    }
}

pub struct DetectCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for DetectCommand {
    fn execute(&self) -> Result<()> {
        let result = run_detect(&self.input)?;

        if self.json {
            return print_json(&result);
        }

        println!("Input: {}", result.input_preview);
        println!();
        if result.candidates.is_empty() {
            println!("No likely formats detected.");
            return Ok(());
        }
        println!("{:<8} {:<8} REASONS", "FORMAT", "CONF");
        println!("{}", "-".repeat(60));
        for c in &result.candidates {
            let conf = format!("{:.0}%", c.confidence * 100.0);
            println!("{:<8} {:<8} {}", c.format, conf, c.reasons.join("; "));
            for w in &c.warnings {
                println!("{:>8} warning: {}", "", w);
            }
        }
        if let Some(class) = &result.document_class {
            println!();
            println!("MRZ layout: {}", class);
        }
        Ok(())
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        let formats = run_list();
        if self.json {
            return print_json(&formats);
        }
        println!("{:<8} {:<12} DESCRIPTION", "NAME", "WIDTHS");
        println!("{}", "-".repeat(60));
        for f in formats {
            let widths: Vec<String> = f.line_widths.iter().map(|w| w.to_string()).collect();
            println!("{:<8} {:<12} {}", f.name, widths.join("/"), f.description);
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub format: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self) -> Result<()> {
        let meta = run_info(&self.format)?;
        if self.json {
            return print_json(&meta);
        }
        let widths: Vec<String> = meta.line_widths.iter().map(|w| w.to_string()).collect();
        println!("Name:        {}", meta.name);
        println!("Aliases:     {}", meta.aliases.join(", "));
        println!("Alphabet:    {}", meta.alphabet);
        println!("Line widths: {}", widths.join(", "));
        println!("Description: {}", meta.description);
        Ok(())
    }
}
