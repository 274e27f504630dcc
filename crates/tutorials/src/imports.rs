//! Rewrites the placeholder addresses in Cadence import declarations.
//!
//! Tutorial sources import their contracts from fixed playground accounts
//! (`import FungibleToken from 0x01`). Before deploying to another network the
//! caller swaps those for real addresses.

use log::warn;
use std::collections::HashMap;

/// Replaces the address of every `import <Name> from <address>` line whose
/// imported name is in `addresses`.
///
/// Lines that are not address imports, string-path imports and imports of
/// names missing from the map are copied through unchanged, as are line
/// endings, the whitespace around `from` and anything trailing the address.
/// A mapped address that is empty leaves its line unchanged.
pub fn replace_imports<S: AsRef<str>>(code: &str, addresses: &HashMap<String, S>) -> String {
    let mut out = String::with_capacity(code.len());
    for line in code.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        match rewrite_import(body, addresses) {
            Some(rewritten) => out.push_str(&rewritten),
            None => out.push_str(body),
        }
        out.push_str(ending);
    }
    out
}

/// Replaces every occurrence of each key of `replacements` with its value,
/// e.g. `getAccount(0x01)` with `getAccount(0xf8d6e0586b0a20c7)`.
///
/// Longer patterns are applied first, so a pattern that contains another one
/// is not broken up by the shorter replacement.
pub fn replace_literals<S: AsRef<str>>(code: &str, replacements: &HashMap<String, S>) -> String {
    let mut patterns: Vec<_> = replacements
        .iter()
        .filter(|(pattern, _)| !pattern.is_empty())
        .collect();
    patterns.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    patterns
        .into_iter()
        .fold(code.to_string(), |code, (pattern, value)| {
            code.replace(pattern.as_str(), value.as_ref())
        })
}

/// Adds the `0x` prefix when it is missing. Returns `None` for an address
/// with no digits.
pub fn normalize_address(address: &str) -> Option<String> {
    let address = address.trim();
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    if digits.is_empty() {
        return None;
    }
    if digits.len() == address.len() {
        Some(format!("0x{}", address))
    } else {
        Some(address.to_string())
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

// Byte offset of the first `from` keyword that stands alone between whitespace.
fn find_from_keyword(rest: &str) -> Option<usize> {
    rest.match_indices("from").map(|(i, _)| i).find(|&i| {
        let before = rest[..i].chars().next_back();
        let after = rest[i + "from".len()..].chars().next();
        before.is_some_and(char::is_whitespace) && after.is_some_and(char::is_whitespace)
    })
}

fn rewrite_import<S: AsRef<str>>(line: &str, addresses: &HashMap<String, S>) -> Option<String> {
    let indent_len = line.len() - line.trim_start().len();
    let (indent, decl) = line.split_at(indent_len);
    let rest = decl.strip_prefix("import")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let from = find_from_keyword(rest)?;
    let names = &rest[..from];
    let after_from = &rest[from + "from".len()..];
    let target = after_from.trim_start();
    let separator = &after_from[..after_from.len() - target.len()];
    // String imports (`import Foo from "./Foo.cdc"`) have no address to swap.
    if !target.starts_with("0x") && !target.starts_with("0X") {
        return None;
    }

    let (name, address) = names
        .split(',')
        .map(str::trim)
        .find_map(|name| addresses.get(name).map(|address| (name, address)))?;
    let Some(address) = normalize_address(address.as_ref()) else {
        warn!("Empty address mapped for import of {}, leaving it unchanged", name);
        return None;
    };

    let old_len = target
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(target.len());
    let trailing = &target[old_len..];

    Some(format!(
        "{}import{}from{}{}{}",
        indent, names, separator, address, trailing
    ))
}
