//! # Merge Engine
//!
//! Import files usually overlap with what is already stored. This module
//! decides what a snippet looks like when two records share an id.
//!
//! ## Reconciling Two Records
//!
//! [`merge_snippets`] combines an existing record `a` with an incoming record
//! `b`:
//!
//! | Field | Result |
//! |-------|--------|
//! | `id` | always `a`'s |
//! | `title`, `content`, unknown fields | from the newer record (older fields first, newer overlaid) |
//! | `createdAt` | the earlier of the two |
//! | `updatedAt` | the supplied timestamp, else now |
//! | `favorite` | `a || b` |
//! | `tags` | union, deduplicated by tag key, `a`'s tags first |
//!
//! "Newer" is `b` when `b.updatedAt >= a.updatedAt`; ties go to `b`. A missing
//! operand counts as an empty record with `updatedAt = 0` whose `createdAt`
//! is "now".
//!
//! The result always carries `a`'s id, so `merge_snippets(a, b)` and
//! `merge_snippets(b, a)` may differ. Pass the stored record first.
//!
//! ## Importing a Batch
//!
//! [`merge_imported_snippets`] folds a raw import payload into an existing
//! collection keyed by id, validating and normalizing each record and
//! delegating conflicts to a [`MergeStrategy`]. The collection keeps its
//! order: existing ids first, then new ids in import order.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::model::{now_millis, Snippet};
use crate::tags::dedup_tags;
use crate::validation::{normalize_imported_snippet, validate_imported_snippet, ImportLimits};

/// Resolves a conflict between a stored snippet and an incoming one.
pub trait MergeStrategy {
    fn merge(&self, current: &Snippet, incoming: &Snippet, now: i64) -> Snippet;
}

/// Shallow overlay: every field of the incoming record wins, unknown fields
/// from both sides are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay;

impl MergeStrategy for Overlay {
    fn merge(&self, current: &Snippet, incoming: &Snippet, _now: i64) -> Snippet {
        let mut extra = current.extra.clone();
        extra.extend(incoming.extra.clone());
        Snippet {
            extra,
            ..incoming.clone()
        }
    }
}

/// Field-by-field reconciliation via [`merge_snippets`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconcile;

impl MergeStrategy for Reconcile {
    fn merge(&self, current: &Snippet, incoming: &Snippet, now: i64) -> Snippet {
        merge_snippets(Some(current), Some(incoming), Some(now))
    }
}

impl<F> MergeStrategy for F
where
    F: Fn(&Snippet, &Snippet, i64) -> Snippet,
{
    fn merge(&self, current: &Snippet, incoming: &Snippet, now: i64) -> Snippet {
        self(current, incoming, now)
    }
}

/// Reconciles two records sharing an id. See the module docs for the rules.
///
/// Never fails: with both operands missing the result is an empty snippet
/// with no tags, not a favorite, created and updated "now".
pub fn merge_snippets(a: Option<&Snippet>, b: Option<&Snippet>, updated_at: Option<i64>) -> Snippet {
    let now = now_millis();
    let a_updated = a.map_or(0, |s| s.updated_at);
    let b_updated = b.map_or(0, |s| s.updated_at);
    let (older, newer) = if b_updated >= a_updated { (a, b) } else { (b, a) };

    let mut merged = newer.or(older).cloned().unwrap_or_else(Snippet::empty);
    if let (Some(older), Some(newer)) = (older, newer) {
        let mut extra = older.extra.clone();
        extra.extend(newer.extra.clone());
        merged.extra = extra;
    }

    let tags_a = a.map(|s| s.tags.as_slice()).unwrap_or_default();
    let tags_b = b.map(|s| s.tags.as_slice()).unwrap_or_default();

    merged.id = a.map(|s| s.id.clone()).unwrap_or_default();
    merged.created_at = a
        .map_or(now, |s| s.created_at)
        .min(b.map_or(now, |s| s.created_at));
    merged.updated_at = updated_at.unwrap_or(now);
    merged.favorite = a.is_some_and(|s| s.favorite) || b.is_some_and(|s| s.favorite);
    merged.tags = dedup_tags(tags_a.iter().chain(tags_b));
    merged
}

/// Outcome of folding an import payload into a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub snippets: Vec<Snippet>,
    pub added: usize,
    pub updated: usize,
    pub invalid: usize,
}

/// Folds `imported` into `existing` using the default [`ImportLimits`].
///
/// `imported` is the parsed import file; anything but an array is treated as
/// empty. `now` stamps every imported record and defaults to the clock.
/// Without a `merge` strategy conflicts use [`Overlay`].
pub fn merge_imported_snippets(
    existing: &[Snippet],
    imported: &Value,
    now: Option<i64>,
    merge: Option<&dyn MergeStrategy>,
) -> ImportReport {
    merge_imported_snippets_with_limits(existing, imported, now, merge, &ImportLimits::default())
}

/// [`merge_imported_snippets`] with explicit length limits.
pub fn merge_imported_snippets_with_limits(
    existing: &[Snippet],
    imported: &Value,
    now: Option<i64>,
    merge: Option<&dyn MergeStrategy>,
    limits: &ImportLimits,
) -> ImportReport {
    let now = now.unwrap_or_else(now_millis);
    let merge = merge.unwrap_or(&Overlay);

    let mut collection = KeyedSnippets::default();
    for snippet in existing.iter().filter(|s| !s.id.is_empty()) {
        collection.upsert(snippet.clone());
    }

    let mut report = ImportReport::default();
    let records = imported.as_array().map(Vec::as_slice).unwrap_or_default();

    for (pos, record) in records.iter().enumerate() {
        if let Err(err) = validate_imported_snippet(record, limits) {
            debug!(pos, %err, "skipping invalid imported record");
            report.invalid += 1;
            continue;
        }
        let normalized = match normalize_imported_snippet(record, now) {
            Ok(snippet) => snippet,
            Err(err) => {
                debug!(pos, %err, "skipping invalid imported record");
                report.invalid += 1;
                continue;
            }
        };

        match collection.get(&normalized.id) {
            None => {
                debug!(id = %normalized.id, "adding imported snippet");
                collection.upsert(normalized);
                report.added += 1;
            }
            Some(current) => {
                let merged = merge.merge(current, &normalized, now);
                if merged != *current {
                    debug!(id = %normalized.id, "imported snippet changed existing record");
                    report.updated += 1;
                }
                collection.upsert(merged);
            }
        }
    }

    report.snippets = collection.into_vec();
    report
}

/// An id-keyed collection that remembers first-insertion order.
#[derive(Default)]
struct KeyedSnippets {
    order: Vec<Snippet>,
    index: HashMap<String, usize>,
}

impl KeyedSnippets {
    fn get(&self, id: &str) -> Option<&Snippet> {
        self.index.get(id).map(|&pos| &self.order[pos])
    }

    /// Replaces in place when the id is known, appends otherwise.
    fn upsert(&mut self, snippet: Snippet) {
        match self.index.get(&snippet.id) {
            Some(&pos) => self.order[pos] = snippet,
            None => {
                self.index.insert(snippet.id.clone(), self.order.len());
                self.order.push(snippet);
            }
        }
    }

    fn into_vec(self) -> Vec<Snippet> {
        self.order
    }
}
