use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed classification tag for a document's semantic type. Drives schema
/// selection; serialized names double as the `type` tag of extracted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    CapitalCall,
    LimitedPartnershipAgreement,
    EquityRound,
    ConvertibleLoanAgreement,
    ShareholderAgreement,
    GeneralInformation,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::CapitalCall,
        Category::LimitedPartnershipAgreement,
        Category::EquityRound,
        Category::ConvertibleLoanAgreement,
        Category::ShareholderAgreement,
        Category::GeneralInformation,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CapitalCall => "CapitalCall",
            Category::LimitedPartnershipAgreement => "LimitedPartnershipAgreement",
            Category::EquityRound => "EquityRound",
            Category::ConvertibleLoanAgreement => "ConvertibleLoanAgreement",
            Category::ShareholderAgreement => "ShareholderAgreement",
            Category::GeneralInformation => "GeneralInformation",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification namespace for column-mapping requests. Deliberately not
/// interchangeable with [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingCategory {
    Investment,
}

impl MappingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingCategory::Investment => "Investment",
        }
    }
}

impl fmt::Display for MappingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
