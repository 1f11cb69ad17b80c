//! Format-template cache - memoized padded symbol rendering
//!
//! Resolving a format request (splitting padding, matching the symbol
//! segment against declared variants) is assumed expensive relative to the
//! formatting calls that reuse it, so resolved templates are memoized in a
//! process-wide table. The read path takes a shared lock; a populate race
//! recomputes the same template twice, which is wasteful but never incorrect.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::{pool, Unit, UnitFamily};

/// Layout styles for rendering a unit symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolFormat {
    /// The symbol exactly as declared, e.g. `N⋅s`.
    Default,
    /// ASCII-only rendering, e.g. `N*s`, `degC`.
    Ascii,
}

/// A pre-parsed format request, decomposed into prefix padding, symbol body
/// and suffix padding. Output is always the three segments concatenated in
/// that order.
#[derive(Debug, Clone, PartialEq)]
struct FormatTemplate {
    pre_padding: String,
    format_body: String,
    post_padding: String,
}

impl FormatTemplate {
    fn render(&self) -> String {
        let mut buf = pool::acquire();
        buf.push_str(&self.pre_padding);
        buf.push_str(&self.format_body);
        buf.push_str(&self.post_padding);
        buf.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    /// Format-string lookups are shared across a unit family.
    Padded {
        family: &'static str,
        spec: String,
    },
    /// Symbol-layout lookups are keyed by the unit itself.
    Symbol {
        symbol: &'static str,
        format: SymbolFormat,
    },
}

#[derive(Debug, Clone)]
struct CacheEntry {
    template: FormatTemplate,
    /// Symbol of the declared unit the template resolved to; `None` when the
    /// body matched no declared symbol.
    bound_symbol: Option<&'static str>,
}

static TEMPLATES: LazyLock<RwLock<HashMap<CacheKey, CacheEntry>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn read_cache() -> RwLockReadGuard<'static, HashMap<CacheKey, CacheEntry>> {
    TEMPLATES.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_cache() -> RwLockWriteGuard<'static, HashMap<CacheKey, CacheEntry>> {
    TEMPLATES.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn get_or_create(key: CacheKey, build: impl FnOnce() -> CacheEntry) -> CacheEntry {
    if let Some(hit) = read_cache().get(&key) {
        return hit.clone();
    }
    // Built outside the write lock; a racing writer produces the same entry.
    let entry = build();
    write_cache().entry(key).or_insert_with(|| entry.clone());
    entry
}

/// Split a format string into leading whitespace, body and trailing
/// whitespace. An all-whitespace string is treated as padding with no body.
fn split_padding(spec: &str) -> (&str, &str, &str) {
    let body_start = spec.len() - spec.trim_start().len();
    let body_end = spec.trim_end().len();
    if body_start >= body_end {
        return (spec, "", "");
    }
    (
        &spec[..body_start],
        &spec[body_start..body_end],
        &spec[body_end..],
    )
}

fn resolve_padded<F: UnitFamily>(spec: &str) -> CacheEntry {
    let (pre, body, post) = split_padding(spec);
    let bound_symbol = F::VARIANTS
        .iter()
        .find_map(|unit| unit.symbol().filter(|symbol| *symbol == body));
    CacheEntry {
        template: FormatTemplate {
            pre_padding: pre.to_string(),
            format_body: body.to_string(),
            post_padding: post.to_string(),
        },
        bound_symbol,
    }
}

fn render_symbol(symbol: &str, format: SymbolFormat) -> String {
    match format {
        SymbolFormat::Default => symbol.to_string(),
        SymbolFormat::Ascii => symbol.replace('⋅', "*").replace('°', "deg"),
    }
}

impl<F: UnitFamily> Unit<F> {
    /// Render through a format string resolved against the family-level
    /// template cache.
    ///
    /// The format string decomposes into padding around a symbol segment; the
    /// segment is matched against the family's declared symbols. A format
    /// string that resolves to a different declared unit than `self`, or to
    /// no declared unit at all, is echoed back unchanged rather than treated
    /// as an error.
    pub fn format(&self, spec: &str) -> String {
        let key = CacheKey::Padded {
            family: F::NAME,
            spec: spec.to_string(),
        };
        let entry = get_or_create(key, || resolve_padded::<F>(spec));
        match (entry.bound_symbol, self.symbol()) {
            (Some(bound), Some(own)) if bound == own => entry.template.render(),
            _ => spec.to_string(),
        }
    }

    /// Render the symbol in the requested layout. The unit itself is the
    /// cache key on this path, so no mismatch fallback exists.
    pub fn format_symbol(&self, format: SymbolFormat) -> String {
        let Some(symbol) = self.symbol() else {
            return String::new();
        };
        let key = CacheKey::Symbol { symbol, format };
        let entry = get_or_create(key, || CacheEntry {
            template: FormatTemplate {
                pre_padding: String::new(),
                format_body: render_symbol(symbol, format),
                post_padding: String::new(),
            },
            bound_symbol: Some(symbol),
        });
        entry.template.render()
    }
}
