//! Checkout map resolution
//!
//! This module handles:
//! - Recursive include expansion (depth-first, in declared order)
//! - Circular include detection
//! - Platform-conditional entry selection
//! - Top-level base stripping
//!
//! Resolution is pure apart from the injected [`MapFetcher`]: each recursive
//! call returns its contribution as a value and the caller appends it, so
//! there is no shared accumulator to reason about.

pub mod fetcher;

pub use fetcher::{MapFetcher, SvnMapFetcher};

use crate::config::CheckoutMap;
use crate::domain::{PathSpec, Platform};
use crate::error::{Result, SparsevnError};

/// The flattened outcome of resolving one top-level checkout map
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Flattened entries after platform filtering and base stripping.
    /// Order is deterministic (include order, then own entries) but carries
    /// no meaning; the planner re-sorts. Duplicates are allowed.
    pub entries: Vec<PathSpec>,

    /// The top-level map's `base`, to be appended to the checkout url
    pub url_suffix: Option<String>,

    /// Non-fatal anomalies found along the way, one line per map
    pub diagnostics: Vec<String>,
}

/// Resolve a top-level checkout map into a flat entry set.
///
/// `origin` names the document for diagnostics and cycle reporting. Only
/// this document's `base` takes effect: it is recorded as the url suffix and
/// stripped as a literal prefix from every entry of the final flattened set.
/// An include that cannot be fetched aborts the whole resolution.
pub fn resolve_map(
    doc: &CheckoutMap,
    origin: &str,
    platform: Platform,
    fetcher: &dyn MapFetcher,
) -> Result<Resolution> {
    let mut diagnostics = Vec::new();
    let mut stack = vec![origin.to_string()];

    let mut entries = resolve_includes(doc, origin, platform, fetcher, &mut stack, &mut diagnostics)?;

    let url_suffix = doc.base.clone();
    if let Some(base) = &url_suffix {
        entries = entries
            .into_iter()
            .map(|e| e.with_base_stripped(base))
            .collect();
    }

    Ok(Resolution {
        entries,
        url_suffix,
        diagnostics,
    })
}

/// Recursively resolve `doc`: includes first, own `files` entries after.
fn resolve_includes(
    doc: &CheckoutMap,
    origin: &str,
    platform: Platform,
    fetcher: &dyn MapFetcher,
    stack: &mut Vec<String>,
    diagnostics: &mut Vec<String>,
) -> Result<Vec<PathSpec>> {
    let mut collected = Vec::new();

    for name in doc.include_names() {
        if stack.contains(&name) {
            let mut chain = stack.clone();
            chain.push(name);
            return Err(SparsevnError::CircularInclude {
                chain: chain.join(" -> "),
            });
        }

        let nested = fetcher.fetch(&name)?;

        stack.push(name.clone());
        let contribution =
            resolve_includes(&nested, &name, platform, fetcher, stack, diagnostics)?;
        stack.pop();

        collected.extend(contribution);
    }

    collected.extend(files_entries(doc, origin, platform, diagnostics));
    Ok(collected)
}

/// Entries contributed by a single document's `files` section.
///
/// Anything other than a mapping (including an absent section) contributes
/// nothing and records a diagnostic; the document's includes have already
/// been processed at that point, so resolution carries on.
fn files_entries(
    doc: &CheckoutMap,
    origin: &str,
    platform: Platform,
    diagnostics: &mut Vec<String>,
) -> Vec<PathSpec> {
    let Some(files) = doc.files.as_ref().filter(|value| value.is_mapping()) else {
        diagnostics.push(format!(
            "checkout map '{origin}': files section is not a mapping, no entries taken from it"
        ));
        return Vec::new();
    };

    let mut entries = section_entries(files, "all");
    entries.extend(section_entries(files, platform.files_key()));
    entries
}

/// Entries under one platform key; a missing key or a non-list value
/// contributes nothing.
fn section_entries(files: &serde_yaml::Value, key: &str) -> Vec<PathSpec> {
    files
        .get(key)
        .and_then(serde_yaml::Value::as_sequence)
        .map(|seq| {
            seq.iter()
                .filter_map(serde_yaml::Value::as_str)
                .map(PathSpec::parse)
                .collect()
        })
        .unwrap_or_default()
}
