use clap::{Parser, Subcommand, ValueEnum};

use travelcodec::DocumentClass;

#[derive(Parser)]
#[command(name = "travelcodec")]
#[command(about = "Boarding pass (BCBP) and travel document MRZ encode/decode CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Generate a boarding pass string with placeholder booking data")]
    GenBcbp {
        #[arg(long)]
        last_name: String,

        #[arg(long)]
        first_name: String,

        #[arg(long, help = "Flight date as YYYY-MM-DD")]
        date: String,

        #[arg(long, help = "Origin airport code")]
        from: String,

        #[arg(long, help = "Destination airport code")]
        to: String,

        #[arg(long, help = "Seed for the placeholder fields")]
        seed: Option<u64>,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,
    },

    #[command(about = "Decode a boarding pass string")]
    ParseBcbp {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Generate machine readable zone lines")]
    GenMrz {
        #[arg(long, default_value = "td3")]
        class: ClassArg,

        #[arg(long, help = "Issuing country code")]
        country: String,

        #[arg(long, help = "Holder name, surname first")]
        name: String,

        #[arg(long, help = "Document number")]
        number: String,

        #[arg(long)]
        nationality: String,

        #[arg(long, help = "Date of birth as YYYY-MM-DD or YYMMDD")]
        dob: String,

        #[arg(long, default_value = "")]
        sex: String,

        #[arg(long, help = "Expiry date as YYYY-MM-DD or YYMMDD")]
        expiry: String,

        #[arg(long, default_value = "")]
        personal_number: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,
    },

    #[command(about = "Decode machine readable zone lines")]
    ParseMrz {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Check the check digits of a machine readable zone")]
    Verify {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Decode an MRZ expiry date (YYMMDD)")]
    Expiry {
        yymmdd: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Compute the ICAO check digit of a field")]
    CheckDigit { text: String },

    #[command(about = "Detect whether input is a boarding pass or an MRZ")]
    Detect {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "List supported formats")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show format details")]
    Info {
        format: String,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ClassArg {
    Td1,
    Td2,
    Td3,
    MrvA,
    MrvB,
}

impl From<ClassArg> for DocumentClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Td1 => DocumentClass::Td1,
            ClassArg::Td2 => DocumentClass::Td2,
            ClassArg::Td3 => DocumentClass::Td3,
            ClassArg::MrvA => DocumentClass::VisaA,
            ClassArg::MrvB => DocumentClass::VisaB,
        }
    }
}
