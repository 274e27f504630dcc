//! Playground tutorial sources as bytes
//!
//! Every tutorial contract, transaction and script is embedded at compile time
//! by the `assets` crate. [`AssetRegistry`] serves them by path and
//! [`Tutorials`] names them; the functions below cover the published contracts
//! using the embedded registry.

pub mod artifact;
pub mod error;
pub mod imports;
pub mod layout;
pub mod registry;

pub use artifact::{
    Artifact, FUNGIBLE_TOKENS_TUTORIAL, HELLO_WORLD_TUTORIAL, NON_FUNGIBLE_TOKENS_TUTORIAL,
    Tutorials,
};
pub use bytes::Bytes;
pub use error::{AssetError, Result};
pub use imports::{replace_imports, replace_literals};
pub use layout::{ArtifactKind, KeyLayout};
pub use registry::AssetRegistry;

/// The `HelloWorld` contract from the hello world tutorial.
/// Stored at `01-hello-world/contracts/HelloWorld.cdc`.
pub fn hello_world() -> Bytes {
    Tutorials::embedded().hello_world()
}

/// The resource-based variant of `HelloWorld` from the hello world tutorial.
/// Stored at `01-hello-world/contracts/HelloWorldResource.cdc`.
pub fn hello_world_resource() -> Bytes {
    Tutorials::embedded().hello_world_resource()
}

/// The `FungibleToken` contract from the fungible tokens tutorial.
/// Stored at `02-fungible-tokens/contracts/FungibleToken.cdc`.
pub fn fungible_token() -> Bytes {
    Tutorials::embedded().fungible_token()
}

/// The `NonFungibleToken` contract from the non-fungible tokens tutorial.
/// Stored at `03-non-fungible-tokens/contracts/NonFungibleToken.cdc`.
pub fn non_fungible_token() -> Bytes {
    Tutorials::embedded().non_fungible_token()
}
