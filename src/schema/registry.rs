//! Static schema tables. The registry is built at compile time and shared
//! read-only across requests; adding a category means adding an enum value
//! and, when the category is extractable, a schema entry here.

use crate::domain::{Category, MappingCategory};

use super::descriptor::{FieldKind, FieldSpec, MappingSchema, RecordSchema};

pub static CATEGORY_NAMES: [&str; 7] = [
    "CapitalCall",
    "LimitedPartnershipAgreement",
    "EquityRound",
    "ConvertibleLoanAgreement",
    "ShareholderAgreement",
    "GeneralInformation",
    "Other",
];

pub static SECTOR_NAMES: [&str; 10] = [
    "Software",
    "Fintech",
    "Healthcare",
    "Ecommerce",
    "Energy",
    "Industrial",
    "ConsumerGoods",
    "Media",
    "DeepTech",
    "Other",
];

static METADATA_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "category",
        description: "Unique category of this document",
        required: true,
        kind: FieldKind::Enum(&CATEGORY_NAMES),
    },
    FieldSpec {
        name: "entities",
        description: "Unique entities mentioned in this document",
        required: true,
        kind: FieldKind::TextList,
    },
    FieldSpec {
        name: "summary",
        description: "A concise summary of this document, maximum of 250 characters",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "containsFinancials",
        description:
            "Whether the document contains any company performance metrics or financial data",
        required: true,
        kind: FieldKind::Boolean,
    },
];

static CAPITAL_CALL_FIELDS: [FieldSpec; 14] = [
    FieldSpec {
        name: "name",
        description: "Name of the investor",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "date",
        description: "Date of issuance of the capital call",
        required: false,
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "deadline",
        description: "Payment deadline of the capital call",
        required: false,
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "commitment",
        description: "Investor's share of the total commitment",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "equityShare",
        description: "Investor's share of equity, as a fraction between 0 and 1",
        required: false,
        kind: FieldKind::Fraction,
    },
    FieldSpec {
        name: "previousContributionToTarget",
        description: "Investor's share of previous contributions to the target",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "contributionToTarget",
        description: "Investor's share of the contribution to the target",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "organizationalExpenses",
        description: "Investor's share of organizational expenses",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "liquidityBuffer",
        description: "Investor's share of the liquidity buffer",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "platformFee",
        description: "Investor's share of the platform fee",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "adjustmentsFromPreviousCapitalCalls",
        description: "Investor's share of adjustments from previous capital calls",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "totalCapitalCalled",
        description: "Investor's share of the total capital called",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "outstandingCommitmentToTarget",
        description: "Investor's share of the outstanding commitment to the target",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "currency",
        description: "Currency of the amounts",
        required: false,
        kind: FieldKind::CurrencyCode,
    },
];

static CONVERTIBLE_LOAN_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        name: "date",
        description: "Date of the agreement",
        required: true,
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "loanAmount",
        description: "Total amount of the loan",
        required: true,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "currency",
        description: "Currency of the loan",
        required: true,
        kind: FieldKind::CurrencyCode,
    },
    FieldSpec {
        name: "interestRate",
        description: "Interest rate of the loan",
        required: true,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "valuationCap",
        description: "Maximum post-money valuation at which the loan converts to shares",
        required: true,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "valuationDiscount",
        description: "Discount on the post-money valuation at which the loan converts to shares",
        required: true,
        kind: FieldKind::Number,
    },
];

static EQUITY_ROUND_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        name: "roundName",
        description: "Name of the financing round",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "date",
        description: "Closing date of the round",
        required: false,
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "totalRoundSize",
        description: "Total size of the round",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "sharePrice",
        description: "Price per share in the round",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "otherInvestors",
        description: "Other investors participating in the round",
        required: false,
        kind: FieldKind::TextList,
    },
    FieldSpec {
        name: "currency",
        description: "Currency of the round amounts",
        required: false,
        kind: FieldKind::CurrencyCode,
    },
];

static KPI_FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        name: "asOfDate",
        description: "Date the KPIs refer to",
        required: false,
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "totalRevenue",
        description: "Total revenue for the period",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "recurringRevenue",
        description: "Recurring portion of the revenue",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "otherRevenue",
        description: "Non-recurring portion of the revenue",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "cashBalance",
        description: "Cash balance at the end of the period",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "burnRate",
        description: "Monthly net burn rate",
        required: false,
        kind: FieldKind::Number,
    },
    FieldSpec {
        name: "headcount",
        description: "Number of employees",
        required: false,
        kind: FieldKind::Integer,
    },
];

static GENERAL_INFORMATION_FIELDS: [FieldSpec; 10] = [
    FieldSpec {
        name: "companyName",
        description: "Name of the company",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "description",
        description: "What the company does",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "website",
        description: "Website URL of the company",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "currency",
        description: "Reporting currency of the company",
        required: false,
        kind: FieldKind::CurrencyCode,
    },
    FieldSpec {
        name: "investmentType",
        description: "Type of investment instrument held in the company",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "sector",
        description: "Sector the company operates in",
        required: false,
        kind: FieldKind::Enum(&SECTOR_NAMES),
    },
    FieldSpec {
        name: "businessModel",
        description: "Business model of the company",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "operatingCountries",
        description: "Countries the company operates in",
        required: false,
        kind: FieldKind::TextList,
    },
    FieldSpec {
        name: "founders",
        description: "Founders of the company",
        required: false,
        kind: FieldKind::TextList,
    },
    FieldSpec {
        name: "kpis",
        description:
            "Most recent operational KPIs, when the document reports performance metrics",
        required: false,
        kind: FieldKind::Object(&KPI_FIELDS),
    },
];

static INVESTMENT_MAPPING_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        name: "companyName",
        description: "Name of the portfolio company",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "currency",
        description: "Currency of the investment, usually a 3-letter code",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "type",
        description: "Type of the investment instrument",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "sector",
        description: "Sector the portfolio company operates in",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "businessModel",
        description: "Business model of the portfolio company",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "website",
        description: "Website URL of the portfolio company",
        required: false,
        kind: FieldKind::Text,
    },
];

pub static CAPITAL_CALL: RecordSchema = RecordSchema {
    category: Category::CapitalCall,
    description: "a single investor's share of a capital call",
    fields: &CAPITAL_CALL_FIELDS,
};

pub static CONVERTIBLE_LOAN_AGREEMENT: RecordSchema = RecordSchema {
    category: Category::ConvertibleLoanAgreement,
    description: "a convertible loan agreement",
    fields: &CONVERTIBLE_LOAN_FIELDS,
};

pub static EQUITY_ROUND: RecordSchema = RecordSchema {
    category: Category::EquityRound,
    description: "an equity financing round",
    fields: &EQUITY_ROUND_FIELDS,
};

pub static GENERAL_INFORMATION: RecordSchema = RecordSchema {
    category: Category::GeneralInformation,
    description: "a portfolio-company profile",
    fields: &GENERAL_INFORMATION_FIELDS,
};

pub static INVESTMENT_MAPPING: MappingSchema = MappingSchema {
    category: MappingCategory::Investment,
    description: "portfolio investment",
    fields: &INVESTMENT_MAPPING_FIELDS,
};

/// The record schema to populate for a category, or `None` for categories
/// that are valid classifications but have no extraction shape. The match is
/// exhaustive so a new category cannot silently fall through.
pub fn record_schema(category: Category) -> Option<&'static RecordSchema> {
    match category {
        Category::CapitalCall => Some(&CAPITAL_CALL),
        Category::ConvertibleLoanAgreement => Some(&CONVERTIBLE_LOAN_AGREEMENT),
        Category::EquityRound => Some(&EQUITY_ROUND),
        Category::GeneralInformation => Some(&GENERAL_INFORMATION),
        Category::LimitedPartnershipAgreement
        | Category::ShareholderAgreement
        | Category::Other => None,
    }
}

pub fn mapping_schema(category: MappingCategory) -> &'static MappingSchema {
    match category {
        MappingCategory::Investment => &INVESTMENT_MAPPING,
    }
}

pub fn metadata_fields() -> &'static [FieldSpec] {
    &METADATA_FIELDS
}
