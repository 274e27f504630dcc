//! Static tutorial sources for the playground tutorials
//!
//! This crate embeds the repository's `cadence/` directory so the sources
//! are included in the binary exactly once. It carries no lookup logic; the
//! `tutorials` crate builds its registry from [`CADENCE`].

use include_dir::{Dir, File, include_dir};

/// The embedded `cadence/` tree. Paths are relative to `cadence/`,
/// e.g. `01-hello-world/contracts/HelloWorld.cdc`.
pub static CADENCE: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/../../cadence");

/// Every file embedded under [`CADENCE`].
pub fn files() -> Vec<&'static File<'static>> {
    walk(&CADENCE)
}

/// Every file below `dir`, depth-first, directories in embedding order.
/// Paths stay relative to the embedded root, not to `dir`.
pub fn walk(dir: &'static Dir<'static>) -> Vec<&'static File<'static>> {
    let mut out = Vec::new();
    collect_files(dir, &mut out);
    out
}

fn collect_files(dir: &'static Dir<'static>, out: &mut Vec<&'static File<'static>>) {
    out.extend(dir.files());
    for sub in dir.dirs() {
        collect_files(sub, out);
    }
}
