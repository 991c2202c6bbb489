use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or downstream layers (record store, exports).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Data Error: {0}")]
    DataError(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("JSON Error: {0}")]
    JsonError(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
