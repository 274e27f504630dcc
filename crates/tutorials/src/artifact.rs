use crate::error::Result;
use crate::imports::{replace_imports, replace_literals};
use crate::layout::{ArtifactKind, KeyLayout};
use crate::registry::AssetRegistry;
use bytes::Bytes;
use std::collections::HashMap;

pub const HELLO_WORLD_TUTORIAL: &str = "01-hello-world";
pub const FUNGIBLE_TOKENS_TUTORIAL: &str = "02-fungible-tokens";
pub const NON_FUNGIBLE_TOKENS_TUTORIAL: &str = "03-non-fungible-tokens";

/// Every published tutorial artifact. The variant name is the artifact's file
/// stem, which is also the name of its accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Artifact {
    HelloWorld,
    HelloWorldResource,
    FungibleToken,
    NonFungibleToken,
}

impl Artifact {
    pub const ALL: [Artifact; 4] = [
        Artifact::HelloWorld,
        Artifact::HelloWorldResource,
        Artifact::FungibleToken,
        Artifact::NonFungibleToken,
    ];

    pub fn tutorial(self) -> &'static str {
        match self {
            Artifact::HelloWorld | Artifact::HelloWorldResource => HELLO_WORLD_TUTORIAL,
            Artifact::FungibleToken => FUNGIBLE_TOKENS_TUTORIAL,
            Artifact::NonFungibleToken => NON_FUNGIBLE_TOKENS_TUTORIAL,
        }
    }

    pub fn kind(self) -> ArtifactKind {
        ArtifactKind::Contract
    }

    pub fn name(self) -> &'static str {
        match self {
            Artifact::HelloWorld => "HelloWorld",
            Artifact::HelloWorldResource => "HelloWorldResource",
            Artifact::FungibleToken => "FungibleToken",
            Artifact::NonFungibleToken => "NonFungibleToken",
        }
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named accessors over a registry.
///
/// The registry is borrowed, so tests can hand in a registry of their own;
/// [`Tutorials::embedded`] wires up the one compiled into the binary.
#[derive(Debug, Clone)]
pub struct Tutorials<'a> {
    registry: &'a AssetRegistry,
    layout: KeyLayout,
}

impl Tutorials<'static> {
    pub fn embedded() -> Self {
        Self::new(AssetRegistry::embedded())
    }
}

impl<'a> Tutorials<'a> {
    pub fn new(registry: &'a AssetRegistry) -> Self {
        Self::with_layout(registry, KeyLayout::default())
    }

    pub fn with_layout(registry: &'a AssetRegistry, layout: KeyLayout) -> Self {
        Self { registry, layout }
    }

    pub fn registry(&self) -> &'a AssetRegistry {
        self.registry
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn key(&self, artifact: Artifact) -> String {
        self.layout.key(artifact.tutorial(), artifact.kind(), artifact.name())
    }

    /// Content of a published artifact. Panics if the registry lacks it,
    /// since every [`Artifact`] is expected to be embedded.
    pub fn artifact(&self, artifact: Artifact) -> Bytes {
        self.registry.must_get(&self.key(artifact))
    }

    pub fn try_artifact(&self, artifact: Artifact) -> Result<Bytes> {
        self.registry.get(&self.key(artifact))
    }

    pub fn hello_world(&self) -> Bytes {
        self.artifact(Artifact::HelloWorld)
    }

    pub fn hello_world_resource(&self) -> Bytes {
        self.artifact(Artifact::HelloWorldResource)
    }

    pub fn fungible_token(&self) -> Bytes {
        self.artifact(Artifact::FungibleToken)
    }

    pub fn non_fungible_token(&self) -> Bytes {
        self.artifact(Artifact::NonFungibleToken)
    }

    /// A transaction of `tutorial` by name, e.g. `tx_01_create_capability`.
    pub fn transaction(&self, tutorial: &str, name: &str) -> Result<Bytes> {
        self.source(tutorial, ArtifactKind::Transaction, name)
    }

    /// A script of `tutorial` by name, e.g. `script_01_get_balance`.
    pub fn script(&self, tutorial: &str, name: &str) -> Result<Bytes> {
        self.source(tutorial, ArtifactKind::Script, name)
    }

    pub fn source(&self, tutorial: &str, kind: ArtifactKind, name: &str) -> Result<Bytes> {
        self.registry.get(&self.layout.key(tutorial, kind, name))
    }

    /// Sorted names of the transactions shipped with `tutorial`.
    pub fn transactions(&self, tutorial: &str) -> Vec<&'a str> {
        self.names(tutorial, ArtifactKind::Transaction)
    }

    /// Sorted names of the scripts shipped with `tutorial`.
    pub fn scripts(&self, tutorial: &str) -> Vec<&'a str> {
        self.names(tutorial, ArtifactKind::Script)
    }

    pub fn names(&self, tutorial: &str, kind: ArtifactKind) -> Vec<&'a str> {
        let registry = self.registry;
        registry
            .list(&self.layout.dir(tutorial, kind))
            .into_iter()
            .filter_map(|key| self.layout.name_of(tutorial, kind, key))
            .collect()
    }

    /// Source text of `name` with its import addresses swapped per `addresses`.
    pub fn code_with_imports<S: AsRef<str>>(
        &self,
        tutorial: &str,
        kind: ArtifactKind,
        name: &str,
        addresses: &HashMap<String, S>,
    ) -> Result<String> {
        let no_replacements: HashMap<String, S> = HashMap::new();
        self.code_with_replacements(tutorial, kind, name, addresses, &no_replacements)
    }

    /// Like [`code_with_imports`](Self::code_with_imports), then replaces every
    /// occurrence of each key of `replacements`, e.g. the `getAccount(0x02)`
    /// placeholders tutorial transactions use for their recipients.
    pub fn code_with_replacements<S: AsRef<str>, R: AsRef<str>>(
        &self,
        tutorial: &str,
        kind: ArtifactKind,
        name: &str,
        addresses: &HashMap<String, S>,
        replacements: &HashMap<String, R>,
    ) -> Result<String> {
        let key = self.layout.key(tutorial, kind, name);
        let code = self.registry.get_str(&key)?;
        Ok(replace_literals(&replace_imports(code, addresses), replacements))
    }
}
