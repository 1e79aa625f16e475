use thiserror::Error;

use crate::checkout::CheckoutSummaryBuilderError;

/// Everything that can go wrong around the generator: configuration, user input
/// and session misuse. Generating preset amounts itself never fails.
#[derive(Debug, Error)]
pub enum RoundupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not find key {0} in vault configuration")]
    MissingVaultKey(String),
    #[error("Could not find nonprofit: {0}")]
    UnknownNonprofit(String),
    #[error("Nonprofit catalog is empty")]
    EmptyCatalog,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Preset index {index} is out of range, only {len} preset amounts are offered")]
    PresetOutOfRange { index: usize, len: usize },
    #[error("An amount cannot be chosen before a nonprofit is selected")]
    NoNonprofitSelected,
    #[error("Invalid generation parameters: {0}")]
    InvalidParameters(String),
    #[error(transparent)]
    Checkout(#[from] CheckoutSummaryBuilderError),
}
