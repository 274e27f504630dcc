use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error(
        "Asset '{0}' not found in the registry. The embedded table and its accessors disagree."
    )]
    MissingAsset(String),
    #[error("Asset key '{0}' is registered more than once.")]
    DuplicateKey(String),
    #[error(
        "Invalid asset key: {0:?}. Keys must be non-empty relative paths inside the asset root."
    )]
    InvalidKey(String),
    #[error("Asset '{key}' is not valid UTF-8: {source}")]
    NotUtf8 {
        key: String,
        #[source]
        source: Utf8Error,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
