//! Element-wise sum of count mappings.

use crate::counting::CountMap;

/// Sum `mappings` key by key, treating absent keys as zero.
///
/// Keys appear in the order they are first seen. The values do not depend
/// on the order of `mappings`.
pub fn sum_mappings<'a, I>(mappings: I) -> CountMap
where
    I: IntoIterator<Item = &'a CountMap>,
{
    let mut totals = CountMap::new();
    for mapping in mappings {
        for (key, value) in mapping {
            *totals.entry(key.clone()).or_insert(0) += *value;
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, usize)]) -> CountMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_empty_input() {
        let none: Vec<CountMap> = Vec::new();
        assert!(sum_mappings(&none).is_empty());
    }

    #[test]
    fn test_sum_with_missing_keys() {
        let maps = vec![mapping(&[("x", 1)]), mapping(&[("x", 2), ("y", 3)])];
        let totals = sum_mappings(&maps);
        assert_eq!(totals, mapping(&[("x", 3), ("y", 3)]));
    }

    #[test]
    fn test_sum_is_commutative() {
        let a = mapping(&[("x", 1), ("z", 5)]);
        let b = mapping(&[("y", 2), ("x", 4)]);
        let ab = sum_mappings([&a, &b]);
        let ba = sum_mappings([&b, &a]);
        // IndexMap equality ignores insertion order
        assert_eq!(ab, ba);
        assert_eq!(ab["x"], 5);
    }

    #[test]
    fn test_zero_counts_survive() {
        let totals = sum_mappings(&[mapping(&[("x", 0)])]);
        assert_eq!(totals.get("x"), Some(&0));
    }
}
