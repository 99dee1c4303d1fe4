//! Pivot of per-document count mappings into a rectangular table.
//!
//! Mappings may have different key sets. The header lists the union of all
//! keys in ascending order, so the column layout depends only on which keys
//! exist, never on the order they were seen in.

use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Label of the identity column in the report.
pub const PATH_LABEL: &str = "Caminho";

/// Rectangular grid of identities against term values.
///
/// Row 0 is the header; every row has the header's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityTable {
    rows: Vec<Vec<String>>,
}

impl IdentityTable {
    /// Header row: identity label followed by the sorted keys.
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Data rows, one per entry, in input order.
    pub fn body(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.header().len()
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len() - 1
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the table into its rows, header first.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// Build the identity table for `entries`.
///
/// Cells hold the stringified value, or an empty string when the entry's
/// mapping lacks that key.
///
/// ```
/// use indexmap::IndexMap;
/// use pdf_term_report::table::build_table;
///
/// let a: IndexMap<String, usize> = [("y".to_string(), 1)].into_iter().collect();
/// let b: IndexMap<String, usize> = [("x".to_string(), 2)].into_iter().collect();
/// let table = build_table(&[("a".to_string(), a), ("b".to_string(), b)], "Id");
///
/// assert_eq!(table.header(), ["Id", "x", "y"]);
/// assert_eq!(table.body()[0], ["a", "", "1"]);
/// assert_eq!(table.body()[1], ["b", "2", ""]);
/// ```
pub fn build_table<V: Display>(
    entries: &[(String, IndexMap<String, V>)],
    identity_label: &str,
) -> IdentityTable {
    let all_keys: BTreeSet<&str> = entries
        .iter()
        .flat_map(|(_, mapping)| mapping.keys().map(String::as_str))
        .collect();

    let mut rows = Vec::with_capacity(entries.len() + 1);

    let mut header = Vec::with_capacity(all_keys.len() + 1);
    header.push(identity_label.to_string());
    header.extend(all_keys.iter().map(|k| k.to_string()));
    rows.push(header);

    for (identity, mapping) in entries {
        let mut row = Vec::with_capacity(all_keys.len() + 1);
        row.push(identity.clone());
        row.extend(all_keys.iter().map(|key| {
            mapping
                .get(*key)
                .map(ToString::to_string)
                .unwrap_or_default()
        }));
        rows.push(row);
    }

    IdentityTable { rows }
}
