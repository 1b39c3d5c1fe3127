//! Quirk matrix plumbing shared by both mech kinds.
//!
//! A table is built in two passes: reduction produces a grid of `Cell`s
//! (quirk lists and label strings), then `to_string_matrix` flattens the
//! grid into display strings for the renderer. The `Cell` enum keeps the
//! formatting boundary exhaustive; there is no "other" cell kind.

use crate::mech::quirk::Quirk;
use std::collections::BTreeSet;

/// Label of the synthetic row (and the 1-D column entry) holding quirks
/// common to every variant.
pub const SHARED_LABEL: &str = "SHARED";

/// Placeholder for a cell whose quirk list reduced to nothing.
pub const EMPTY_CELL: &str = "--";

/// One cell of a pre-string quirk matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A (possibly reduced) quirk list: variant cells and shared cells.
    Quirks(Vec<Quirk>),
    /// A literal label: variant names, headers, the SHARED marker.
    Text(String),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Cell {
        Cell::Text(s.into())
    }
}

/// Render a quirk list as one "name: value" line per quirk, or the empty
/// placeholder.
pub fn quirks_string(quirks: &[Quirk]) -> String {
    if quirks.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        quirks
            .iter()
            .map(|q| q.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Flatten a cell grid into display strings. Row and column order are
/// preserved; the match is exhaustive over every cell kind a reduction can
/// produce.
pub fn to_string_matrix(matrix: Vec<Vec<Cell>>) -> Vec<Vec<String>> {
    matrix
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    Cell::Quirks(quirks) => quirks_string(&quirks),
                    Cell::Text(text) => text,
                })
                .collect()
        })
        .collect()
}

/// The canonical shared-quirk detector used by both reductions.
///
/// A quirk is shared iff it appears (by structural equality) in every one
/// of the given lists. The result is deduplicated and sorted by name.
/// Returns an empty vec for an empty input: no lists means nothing can be
/// common to all of them.
pub fn shared_quirks(lists: &[&[Quirk]]) -> Vec<Quirk> {
    if lists.is_empty() {
        return Vec::new();
    }
    let candidates: BTreeSet<&Quirk> = lists.iter().flat_map(|list| list.iter()).collect();
    candidates
        .into_iter()
        .filter(|quirk| lists.iter().all(|list| list.contains(*quirk)))
        .cloned()
        .collect()
}
