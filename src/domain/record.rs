use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// A schema-conformant extraction result for one document. The `type` tag
/// carries the category the record was extracted for, so a serialized
/// response can be dispatched again without re-running inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DocumentRecord {
    CapitalCall(CapitalCallRecord),
    ConvertibleLoanAgreement(ConvertibleLoanRecord),
    EquityRound(EquityRoundRecord),
    GeneralInformation(CompanyProfileRecord),
}

impl DocumentRecord {
    pub fn category(&self) -> Category {
        match self {
            DocumentRecord::CapitalCall(_) => Category::CapitalCall,
            DocumentRecord::ConvertibleLoanAgreement(_) => Category::ConvertibleLoanAgreement,
            DocumentRecord::EquityRound(_) => Category::EquityRound,
            DocumentRecord::GeneralInformation(_) => Category::GeneralInformation,
        }
    }

    /// Builds a record from an already-conformed completion object by
    /// injecting the category tag and deserializing the matching variant.
    pub fn from_conformed(
        category: Category,
        mut value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "type".to_string(),
                serde_json::Value::String(category.as_str().to_string()),
            );
        }
        serde_json::from_value(value)
    }
}

/// A single investor's share of a capital call. Every field is optional:
/// absent means the property was not found in the document, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalCallRecord {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub commitment: Option<f64>,
    pub equity_share: Option<f64>,
    pub previous_contribution_to_target: Option<f64>,
    pub contribution_to_target: Option<f64>,
    pub organizational_expenses: Option<f64>,
    pub liquidity_buffer: Option<f64>,
    pub platform_fee: Option<f64>,
    pub adjustments_from_previous_capital_calls: Option<f64>,
    pub total_capital_called: Option<f64>,
    pub outstanding_commitment_to_target: Option<f64>,
    pub currency: Option<String>,
}

/// Details of a convertible loan agreement. No partial extraction for this
/// category: every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertibleLoanRecord {
    pub date: NaiveDate,
    pub loan_amount: f64,
    pub currency: String,
    pub interest_rate: f64,
    pub valuation_cap: f64,
    pub valuation_discount: f64,
}

/// A financing round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityRoundRecord {
    pub round_name: String,
    pub date: Option<NaiveDate>,
    pub total_round_size: Option<f64>,
    pub share_price: Option<f64>,
    pub other_investors: Option<Vec<String>>,
    pub currency: Option<String>,
}

/// Portfolio-company profile, with optional periodic KPIs when the document
/// carries performance metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfileRecord {
    pub company_name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub currency: Option<String>,
    pub investment_type: Option<String>,
    pub sector: Option<Sector>,
    pub business_model: Option<String>,
    pub operating_countries: Option<Vec<String>>,
    pub founders: Option<Vec<String>>,
    pub kpis: Option<OperationalKpis>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    Software,
    Fintech,
    Healthcare,
    Ecommerce,
    Energy,
    Industrial,
    ConsumerGoods,
    Media,
    DeepTech,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalKpis {
    pub as_of_date: Option<NaiveDate>,
    pub total_revenue: Option<f64>,
    pub recurring_revenue: Option<f64>,
    pub other_revenue: Option<f64>,
    pub cash_balance: Option<f64>,
    pub burn_rate: Option<f64>,
    pub headcount: Option<u64>,
}

/// Correspondence from canonical field names to source-file column headers.
/// Keys are exactly the canonical field set of the mapping schema; a `None`
/// value means no header matched. Duplicate header assignments are legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping(pub BTreeMap<String, Option<String>>);

impl ColumnMapping {
    pub fn get(&self, field: &str) -> Option<&Option<String>> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
