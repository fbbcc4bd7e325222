use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedWallError {
    #[error("grid must have at least one column and one row, got {columns}x{rows}")]
    InvalidGrid { columns: u32, rows: u32 },
    #[error("display region must be finite and positive, got {width}x{height}")]
    InvalidRegion { width: f64, height: f64 },
    #[error("WebGL2 not supported")]
    ContextUnavailable,
    #[error("shader compile failed: {0}")]
    ShaderCompile(String),
    #[error("program link failed: {0}")]
    ProgramLink(String),
    #[error("WebGL resource allocation failed: {0}")]
    Allocation(&'static str),
}

impl From<LedWallError> for JsValue {
    fn from(err: LedWallError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedWallError>;
