use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DocumentClass;
use crate::codec::date::parse_mrz_expiry;
use crate::error::Result;

/// Fields every MRZ layout carries. Values are filler-cleared; dates stay
/// in their `YYMMDD` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFields {
    pub document_type: String,
    pub country: String,
    pub name: String,
    pub document_number: String,
    pub document_number_check: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub date_of_birth_check: String,
    pub sex: String,
    pub expiry_date: String,
    pub expiry_date_check: String,
}

impl DocumentFields {
    /// Expiry as a calendar date, century taken from the system clock.
    pub fn expiry(&self) -> Result<NaiveDate> {
        parse_mrz_expiry(&self.expiry_date)
    }
}

/// Check digits recomputed from the raw lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedHash {
    pub is_valid: bool,
    pub document_number_check: String,
    pub date_of_birth_check: String,
    pub expiry_date_check: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_number_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_check: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Td1Record {
    #[serde(flatten)]
    pub fields: DocumentFields,
    pub additional_info_1: String,
    pub additional_info_2: String,
    pub composite_check: String,
    pub expected_hash: ExpectedHash,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Td2Record {
    #[serde(flatten)]
    pub fields: DocumentFields,
    pub additional_info: String,
    pub composite_check: String,
    pub expected_hash: ExpectedHash,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportRecord {
    #[serde(flatten)]
    pub fields: DocumentFields,
    pub personal_number: String,
    pub personal_number_check: String,
    pub composite_check: String,
    pub expected_hash: ExpectedHash,
}

/// MRV-A and MRV-B share a payload; neither has a composite check digit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaRecord {
    #[serde(flatten)]
    pub fields: DocumentFields,
    pub additional_info: String,
    pub expected_hash: ExpectedHash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "document_class")]
pub enum TravelDocumentRecord {
    #[serde(rename = "TD1")]
    Td1(Td1Record),
    #[serde(rename = "TD2")]
    Td2(Td2Record),
    #[serde(rename = "TD3")]
    Td3(PassportRecord),
    #[serde(rename = "MRV-A")]
    VisaA(VisaRecord),
    #[serde(rename = "MRV-B")]
    VisaB(VisaRecord),
}

impl TravelDocumentRecord {
    pub fn class(&self) -> DocumentClass {
        match self {
            TravelDocumentRecord::Td1(_) => DocumentClass::Td1,
            TravelDocumentRecord::Td2(_) => DocumentClass::Td2,
            TravelDocumentRecord::Td3(_) => DocumentClass::Td3,
            TravelDocumentRecord::VisaA(_) => DocumentClass::VisaA,
            TravelDocumentRecord::VisaB(_) => DocumentClass::VisaB,
        }
    }

    pub fn fields(&self) -> &DocumentFields {
        match self {
            TravelDocumentRecord::Td1(r) => &r.fields,
            TravelDocumentRecord::Td2(r) => &r.fields,
            TravelDocumentRecord::Td3(r) => &r.fields,
            TravelDocumentRecord::VisaA(r) | TravelDocumentRecord::VisaB(r) => &r.fields,
        }
    }

    pub fn expected_hash(&self) -> &ExpectedHash {
        match self {
            TravelDocumentRecord::Td1(r) => &r.expected_hash,
            TravelDocumentRecord::Td2(r) => &r.expected_hash,
            TravelDocumentRecord::Td3(r) => &r.expected_hash,
            TravelDocumentRecord::VisaA(r) | TravelDocumentRecord::VisaB(r) => &r.expected_hash,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.expected_hash().is_valid
    }

    /// Names of the check digits that disagree with their recomputed value.
    pub fn mismatched_checks(&self) -> Vec<&'static str> {
        let fields = self.fields();
        let expected = self.expected_hash();
        let mut out = Vec::new();
        let mut compare = |name: &'static str, read: &str, want: Option<&String>| {
            if want.is_some_and(|w| w != read) {
                out.push(name);
            }
        };

        compare("document number", fields.document_number_check.as_str(), Some(&expected.document_number_check));
        compare("date of birth", fields.date_of_birth_check.as_str(), Some(&expected.date_of_birth_check));
        compare("expiry date", fields.expiry_date_check.as_str(), Some(&expected.expiry_date_check));
        match self {
            TravelDocumentRecord::Td1(r) => compare("composite", r.composite_check.as_str(), expected.composite_check.as_ref()),
            TravelDocumentRecord::Td2(r) => compare("composite", r.composite_check.as_str(), expected.composite_check.as_ref()),
            TravelDocumentRecord::Td3(r) => {
                // a blank personal number may carry a filler instead of a digit
                if !(r.personal_number.is_empty() && r.personal_number_check.is_empty()) {
                    compare(
                        "personal number",
                        r.personal_number_check.as_str(),
                        expected.personal_number_check.as_ref(),
                    );
                }
                compare("composite", r.composite_check.as_str(), expected.composite_check.as_ref());
            }
            TravelDocumentRecord::VisaA(_) | TravelDocumentRecord::VisaB(_) => {}
        }
        out
    }
}
