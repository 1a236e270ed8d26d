use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Envelope shared by every `stats.nba.com` endpoint: tabular result sets.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsDocument {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<serde_json::Value>>,
}

impl StatsDocument {
    pub fn result_set(&self, name: &str) -> Result<&ResultSet, ReportError> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| ReportError::MissingResultSet { name: name.to_string() })
    }
}

impl ResultSet {
    /// Deserialize every row into `T`, keyed by the result set headers.
    pub fn rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, ReportError> {
        let expected = self.headers.len();
        self.row_set
            .iter()
            .map(|row| {
                if row.len() != expected {
                    return Err(ReportError::RowShape { name: self.name.clone(), expected, actual: row.len() });
                }
                let object: serde_json::Map<String, serde_json::Value> =
                    self.headers.iter().cloned().zip(row.iter().cloned()).collect();
                Ok(serde_json::from_value(serde_json::Value::Object(object))?)
            })
            .collect()
    }
}
