use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("no account is selected")]
    MissingSelectedAccount,
    #[error("balance for {address} has not been loaded")]
    MissingBalance { address: String },
    #[error("invalid hex value: {value:?}")]
    InvalidHex { value: String },
}

pub type Result<T> = std::result::Result<T, SelectorError>;
