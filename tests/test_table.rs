//! Integration tests for the identity table and its PDF rendering.

use indexmap::IndexMap;
use pdf_term_report::writer::{ContentStreamBuilder, SimpleFontMetrics, Table};
use pdf_term_report::{build_table, CountMap, PATH_LABEL};
use proptest::prelude::*;

fn entry(identity: &str, pairs: &[(&str, usize)]) -> (String, CountMap) {
    (
        identity.to_string(),
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    )
}

// =============================================================================
// IDENTITY TABLE TESTS
// =============================================================================

mod identity_table_tests {
    use super::*;

    #[test]
    fn test_header_and_rows() {
        let table = build_table(
            &[
                entry("p1", &[("cat", 2), ("dog", 1)]),
                entry("p2", &[("cat", 0), ("dog", 1)]),
            ],
            PATH_LABEL,
        );

        assert_eq!(table.header(), ["Caminho", "cat", "dog"]);
        assert_eq!(table.body()[0], ["p1", "2", "1"]);
        assert_eq!(table.body()[1], ["p2", "0", "1"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.width(), 3);
    }

    #[test]
    fn test_columns_sorted_regardless_of_term_order() {
        let table = build_table(&[entry("p", &[("zebra", 1), ("apple", 2)])], PATH_LABEL);
        assert_eq!(table.header(), ["Caminho", "apple", "zebra"]);
        assert_eq!(table.body()[0], ["p", "2", "1"]);
    }

    #[test]
    fn test_missing_keys_become_empty_cells() {
        let table = build_table(
            &[entry("a", &[("x", 1)]), entry("b", &[("y", 2)])],
            "Id",
        );
        assert_eq!(table.rows(), [vec!["Id", "x", "y"], vec!["a", "1", ""], vec!["b", "", "2"]]);
    }

    #[test]
    fn test_no_entries_gives_header_only() {
        let table = build_table::<usize>(&[], PATH_LABEL);
        assert_eq!(table.header(), ["Caminho"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_values_are_stringified() {
        let mut values = IndexMap::new();
        values.insert("ratio".to_string(), 0.5f64);
        let table = build_table(&[("r".to_string(), values)], "Id");
        assert_eq!(table.body()[0], ["r", "0.5"]);
    }
}

// =============================================================================
// RENDERING TESTS
// =============================================================================

mod render_tests {
    use super::*;

    #[test]
    fn test_report_table_renders_every_cell() {
        let table = build_table(
            &[entry("/docs/a.pdf", &[("cat", 2)]), entry("/docs/b.pdf", &[("cat", 0)])],
            PATH_LABEL,
        );
        let pdf_table = Table::from_grid(table.rows());
        let metrics = SimpleFontMetrics::default();
        let layout = pdf_table.calculate_layout(&metrics);

        let mut builder = ContentStreamBuilder::new();
        pdf_table
            .render(&mut builder, 0.0, layout.total_height, &layout, &metrics)
            .unwrap();
        let content = String::from_utf8(builder.build().unwrap()).unwrap();

        for text in ["(Caminho) Tj", "(cat) Tj", "(/docs/a.pdf) Tj", "(2) Tj", "(0) Tj"] {
            assert!(content.contains(text), "missing {text}");
        }
        assert_eq!(layout.row_heights.len(), 3);
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

fn arb_entries() -> impl Strategy<Value = Vec<(String, CountMap)>> {
    prop::collection::vec(
        (
            "[a-z]{1,6}",
            prop::collection::vec(("[a-e]", 0usize..50), 0..5)
                .prop_map(|pairs| pairs.into_iter().collect::<CountMap>()),
        ),
        0..6,
    )
}

proptest! {
    #[test]
    fn prop_table_is_rectangular(entries in arb_entries()) {
        let table = build_table(&entries, PATH_LABEL);
        prop_assert_eq!(table.len(), entries.len());
        for row in table.rows() {
            prop_assert_eq!(row.len(), table.width());
        }
    }

    #[test]
    fn prop_header_is_sorted_union(entries in arb_entries()) {
        let table = build_table(&entries, PATH_LABEL);
        let keys = &table.header()[1..];
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        for (_, mapping) in &entries {
            for key in mapping.keys() {
                prop_assert!(keys.contains(key));
            }
        }
    }

    #[test]
    fn prop_key_order_does_not_change_table(entries in arb_entries()) {
        let reversed: Vec<(String, CountMap)> = entries
            .iter()
            .map(|(id, mapping)| {
                let mut flipped: Vec<_> = mapping.iter().map(|(k, v)| (k.clone(), *v)).collect();
                flipped.reverse();
                (id.clone(), flipped.into_iter().collect())
            })
            .collect();
        prop_assert_eq!(build_table(&entries, PATH_LABEL), build_table(&reversed, PATH_LABEL));
    }
}
