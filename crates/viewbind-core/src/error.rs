use thiserror::Error as ThisError;

///
/// InjectError
///
/// Raised inside a generated `inject` method.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum InjectError {
    #[error("view {id} bound to field '{field}' is not a {expected}")]
    CastMismatch {
        id: i32,
        field: &'static str,
        expected: &'static str,
    },
}

///
/// DispatchError
///
/// One variant per dispatch step that can fail.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum DispatchError {
    #[error("no generated binder '{unit}' is registered")]
    UnitNotFound { unit: String },

    #[error("binder '{unit}' is registered for a host other than '{host}'")]
    HandleMismatch { unit: String, host: &'static str },

    #[error("binder '{unit}' failed: {source}")]
    Injection {
        unit: String,
        #[source]
        source: InjectError,
    },
}

impl DispatchError {
    /// Registry key of the unit the failed dispatch was aimed at.
    #[must_use]
    pub fn unit(&self) -> &str {
        match self {
            Self::UnitNotFound { unit }
            | Self::HandleMismatch { unit, .. }
            | Self::Injection { unit, .. } => unit,
        }
    }
}
