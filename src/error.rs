use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Failures raised while turning raw loader records into typed samples.
///
/// These surface synchronously at load time; the chart core itself only ever
/// sees already-typed samples.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("malformed date `{raw}` (expected format `{format}`)")]
    MalformedDate { raw: String, format: &'static str },

    #[error("malformed value at record {index}: {reason}")]
    MalformedValue { index: usize, reason: String },

    #[error("malformed json input: {0}")]
    Json(String),
}
