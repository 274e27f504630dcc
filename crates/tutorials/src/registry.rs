//! Immutable key to content table backing every accessor.
//!
//! Keys are normalized relative paths (`01-hello-world/contracts/HelloWorld.cdc`).
//! Content is stored as [`Bytes`], so a lookup hands out a view of the
//! embedded data instead of a copy.

use crate::error::{AssetError, Result};
use bytes::Bytes;
use include_dir::Dir;
use itertools::Itertools;
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use path_clean::PathClean;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Component, Path};

static EMBEDDED: Lazy<AssetRegistry> = Lazy::new(|| {
    // A malformed embedded table is a packaging defect, not a runtime condition.
    AssetRegistry::from_dir(&assets::CADENCE, "")
        .unwrap_or_else(|e| panic!("Embedded tutorial table is malformed: {}", e))
});

#[derive(Clone, Default)]
pub struct AssetRegistry {
    entries: HashMap<String, Bytes>,
}

impl std::fmt::Debug for AssetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetRegistry")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl AssetRegistry {
    /// The registry built from the sources embedded by the `assets` crate.
    /// Built on first use and shared for the rest of the process.
    pub fn embedded() -> &'static AssetRegistry {
        &EMBEDDED
    }

    /// Builds a registry from `(key, content)` pairs.
    ///
    /// Every key is normalized first; two keys that normalize to the same path
    /// are rejected with [`AssetError::DuplicateKey`].
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Bytes>,
    {
        let mut map = HashMap::new();
        for (key, content) in entries {
            let key = normalize_key(key.as_ref())?;
            match map.entry(key) {
                Entry::Occupied(occupied) => {
                    return Err(AssetError::DuplicateKey(occupied.key().clone()));
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(content.into());
                }
            }
        }
        debug!("Built asset registry with {} entries", map.len());
        Ok(Self { entries: map })
    }

    /// Flattens an embedded directory tree into a registry.
    ///
    /// `mount` is prepended to every key; pass `""` to keep keys relative to
    /// the embedded root.
    pub fn from_dir(dir: &'static Dir<'static>, mount: &str) -> Result<Self> {
        let entries = assets::walk(dir)
            .into_iter()
            .map(|file| {
                let path = file.path().to_str().ok_or_else(|| {
                    AssetError::InvalidKey(file.path().to_string_lossy().into_owned())
                })?;
                let key = if mount.is_empty() {
                    path.to_string()
                } else {
                    format!("{}/{}", mount, path)
                };
                Ok((key, Bytes::from_static(file.contents())))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "Flattened embedded directory (mount {:?}) into {} entries",
            mount,
            entries.len()
        );
        Self::from_entries(entries)
    }

    /// Returns the content stored under `key`.
    ///
    /// A key that cannot name an entry (empty, absolute, escaping the root)
    /// is reported as missing like any other absent key.
    pub fn get(&self, key: &str) -> Result<Bytes> {
        self.entry(key).cloned()
    }

    /// Like [`get`](Self::get), but a missing key aborts the caller.
    ///
    /// Use only for keys that are part of the crate's own contract; absence
    /// means the embedded table and its accessors disagree.
    pub fn must_get(&self, key: &str) -> Bytes {
        match self.get(key) {
            Ok(content) => content,
            Err(e) => {
                warn!("Required asset lookup failed: {}", e);
                panic!("{}", e)
            }
        }
    }

    /// Borrows the content under `key` as UTF-8 text.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        let content = self.entry(key)?;
        std::str::from_utf8(content).map_err(|source| AssetError::NotUtf8 {
            key: key.to_string(),
            source,
        })
    }

    /// Like [`get_str`](Self::get_str), but any failure aborts the caller.
    pub fn must_get_str(&self, key: &str) -> &str {
        self.get_str(key).unwrap_or_else(|e| {
            warn!("Required asset lookup failed: {}", e);
            panic!("{}", e)
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entry(key).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).sorted().collect()
    }

    /// Sorted keys located below the directory `prefix` (at any depth).
    /// A prefix naming the root (`""`, `"."`, `"./"`) lists everything.
    pub fn list(&self, prefix: &str) -> Vec<&str> {
        if is_root(prefix) {
            return self.keys();
        }
        let Ok(dir) = normalize_key(prefix) else {
            return Vec::new();
        };
        let dir = format!("{}/", dir);
        self.entries
            .keys()
            .filter(|k| k.starts_with(&dir))
            .map(String::as_str)
            .sorted()
            .collect()
    }

    fn entry(&self, key: &str) -> Result<&Bytes> {
        trace!("Asset lookup: {}", key);
        if let Some(content) = self.entries.get(key) {
            return Ok(content);
        }
        normalize_key(key)
            .ok()
            .and_then(|normalized| self.entries.get(&normalized))
            .ok_or_else(|| AssetError::MissingAsset(key.to_string()))
    }
}

fn is_root(prefix: &str) -> bool {
    let unified = prefix.replace('\\', "/");
    Path::new(unified.trim_start_matches('/'))
        .clean()
        .components()
        .all(|c| matches!(c, Component::CurDir))
}

/// Normalizes a key to a `/`-separated relative path.
///
/// Backslashes are treated as separators, `.` segments and inner `..` are
/// resolved. Empty keys, absolute keys and keys escaping the root are rejected.
pub fn normalize_key(key: &str) -> Result<String> {
    let unified = key.replace('\\', "/");
    if unified.starts_with('/') {
        return Err(AssetError::InvalidKey(key.to_string()));
    }
    let cleaned = Path::new(&unified).clean();
    let mut parts = Vec::new();
    for component in cleaned.components() {
        match component {
            Component::Normal(part) => match part.to_str() {
                Some(part) => parts.push(part),
                None => return Err(AssetError::InvalidKey(key.to_string())),
            },
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(AssetError::InvalidKey(key.to_string()));
            }
        }
    }
    if parts.is_empty() {
        return Err(AssetError::InvalidKey(key.to_string()));
    }
    Ok(parts.iter().join("/"))
}
