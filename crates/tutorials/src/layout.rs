use serde::Deserialize;

/// Kind of tutorial source, which decides the sub-directory it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Contract,
    Transaction,
    Script,
}

/// How registry keys are composed: `{root}/{tutorial}/{kind dir}/{name}.{extension}`.
///
/// The default matches a registry built from `cadence/` with no mount, so the
/// hello world contract lives at `01-hello-world/contracts/HelloWorld.cdc`.
/// Registries mounted under a prefix pair with [`KeyLayout::rooted`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyLayout {
    pub root: String,
    pub contracts_dir: String,
    pub transactions_dir: String,
    pub scripts_dir: String,
    pub extension: String,
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self {
            root: String::new(),
            contracts_dir: "contracts".to_string(),
            transactions_dir: "transactions".to_string(),
            scripts_dir: "scripts".to_string(),
            extension: "cdc".to_string(),
        }
    }
}

impl KeyLayout {
    pub fn rooted(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn kind_dir(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Contract => &self.contracts_dir,
            ArtifactKind::Transaction => &self.transactions_dir,
            ArtifactKind::Script => &self.scripts_dir,
        }
    }

    /// Directory holding every source of `kind` for `tutorial`.
    pub fn dir(&self, tutorial: &str, kind: ArtifactKind) -> String {
        join_segments([self.root.as_str(), tutorial, self.kind_dir(kind)])
    }

    pub fn key(&self, tutorial: &str, kind: ArtifactKind, name: &str) -> String {
        let file = if self.extension.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", name, self.extension.trim_start_matches('.'))
        };
        join_segments([self.dir(tutorial, kind).as_str(), file.as_str()])
    }

    /// Inverse of [`key`](Self::key) for keys inside `dir(tutorial, kind)`:
    /// returns the bare artifact name, or `None` for anything else
    /// (nested directories, foreign extensions).
    pub fn name_of<'k>(
        &self,
        tutorial: &str,
        kind: ArtifactKind,
        key: &'k str,
    ) -> Option<&'k str> {
        let dir = self.dir(tutorial, kind);
        let file = key.strip_prefix(dir.as_str())?.strip_prefix('/')?;
        if file.contains('/') {
            return None;
        }
        if self.extension.is_empty() {
            return Some(file);
        }
        file.strip_suffix(self.extension.trim_start_matches('.'))?
            .strip_suffix('.')
    }
}

// Empty segments and stray slashes are dropped so an empty root adds nothing.
fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
