pub mod codec;
pub mod error;
pub mod types;

pub use codec::bcbp::{generate_bcbp, generate_bcbp_with_rng, parse_bcbp, BoardingPass};
pub use codec::date::parse_mrz_expiry;
pub use codec::mrz::{
    generate_mrz, parse_mrz, DocumentClass, DocumentFields, ExpectedHash, PassportRecord, Td1Record, Td2Record,
    TravelDocumentRecord, VisaRecord,
};
pub use error::{CodecError, Result};
pub use types::{DetectCandidate, FormatMeta, InputSource, OutputDest};
