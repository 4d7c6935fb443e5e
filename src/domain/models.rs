use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::flatten::{flatten, lookup, FlatField};

const FIRST_ERROR_PATH: &str = "/errors/0/message";

/// Body POSTed to the upstream GraphQL endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportQuery {
    pub query: String,
    pub variables: ReportVariables,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportVariables {
    #[serde(rename = "ReportNumber")]
    pub report_number: String,
}

impl ReportQuery {
    /// The report number is carried through untouched: no trimming, no coercion.
    pub fn new(query: impl Into<String>, report_number: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: ReportVariables {
                report_number: report_number.into(),
            },
        }
    }
}

/// Everything the report page needs, built from one upstream response.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub report_number: String,
    pub data: Value,
    pub raw_data: String,
    pub fields: Vec<FlatField>,
    pub error_message: Option<String>,
}

impl ReportView {
    pub fn from_body(report_number: &str, body: &[u8]) -> Result<Self, serde_json::Error> {
        let data: Value = serde_json::from_slice(body)?;
        Self::from_value(report_number, data)
    }

    pub fn from_value(report_number: &str, data: Value) -> Result<Self, serde_json::Error> {
        let raw_data = serde_json::to_string_pretty(&data)?;
        let fields = flatten(&data);
        let error_message = lookup(&fields, FIRST_ERROR_PATH).map(str::to_owned);
        Ok(Self {
            report_number: report_number.to_owned(),
            data,
            raw_data,
            fields,
            error_message,
        })
    }
}
