use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Request failed: {0}")]
    Request(#[from] ureq::Error),

    #[error("Failed to parse stats response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stats response has no result set named {name}")]
    MissingResultSet { name: String },

    #[error("Result set {name} has a row of {actual} values for {expected} headers")]
    RowShape { name: String, expected: usize, actual: usize },

    #[error("Webhook rejected the message with status {status}")]
    Webhook { status: u16 },

    #[error("Unknown display timezone: {0}")]
    Timezone(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
