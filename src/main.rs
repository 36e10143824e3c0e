mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::CommandHandler;
use travelcodec::{error, types, PassportRecord};

const LOG_ENV: &str = "TRAVELCODEC_LOG";

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> error::Result<()> {
    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::GenBcbp {
            last_name,
            first_name,
            date,
            from,
            to,
            seed,
            out,
        } => Box::new(commands::GenBcbpCommand {
            last_name,
            first_name,
            date,
            from,
            to,
            seed,
            output: types::OutputDest::parse(&out),
        }),

        Command::ParseBcbp { r#in, json } => Box::new(commands::ParseBcbpCommand {
            input: types::InputSource::parse(&r#in),
            json,
        }),

        Command::GenMrz {
            class,
            country,
            name,
            number,
            nationality,
            dob,
            sex,
            expiry,
            personal_number,
            out,
        } => {
            let mut record = PassportRecord {
                personal_number,
                ..Default::default()
            };
            record.fields.country = country;
            record.fields.name = name;
            record.fields.document_number = number;
            record.fields.nationality = nationality;
            record.fields.date_of_birth = dob;
            record.fields.sex = sex;
            record.fields.expiry_date = expiry;

            Box::new(commands::GenMrzCommand {
                class: class.into(),
                record,
                output: types::OutputDest::parse(&out),
            })
        }

        Command::ParseMrz { r#in, json } => Box::new(commands::ParseMrzCommand {
            input: types::InputSource::parse(&r#in),
            json,
        }),

        Command::Verify { r#in, json } => Box::new(commands::VerifyCommand {
            input: types::InputSource::parse(&r#in),
            json,
        }),

        Command::Expiry { yymmdd, json } => Box::new(commands::ExpiryCommand { yymmdd, json }),

        Command::CheckDigit { text } => Box::new(commands::CheckDigitCommand { text }),

        Command::Detect { r#in, json } => Box::new(commands::DetectCommand {
            input: types::InputSource::parse(&r#in),
            json,
        }),

        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { format, json } => Box::new(commands::InfoCommand { format, json }),
    };

    handler.execute()
}
