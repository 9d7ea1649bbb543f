//! Insertion-ordered grouping.
//!
//! Groups come out in the order their keys were first seen, and members keep
//! their relative order. Keys compare with exact equality.

use std::collections::HashMap;
use std::hash::Hash;

/// Partitions `items` by `key`, preserving first-appearance order of keys.
pub fn group_by<T, K, I, F>(items: I, mut key: F) -> Vec<(K, Vec<T>)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let k = key(&item);
        match index.get(&k) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }

    groups
}

/// Counts items per key, preserving first-appearance order of keys.
pub fn count_by<T, K, I, F>(items: I, key: F) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    group_by(items, key)
        .into_iter()
        .map(|(k, members)| (k, members.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_keeps_first_seen_order() {
        let groups = group_by(["b1", "a1", "b2", "c1", "a2"], |s| s.as_bytes()[0]);

        let keys: Vec<u8> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![b'b', b'a', b'c']);
        assert_eq!(groups[0].1, vec!["b1", "b2"]);
        assert_eq!(groups[1].1, vec!["a1", "a2"]);
    }

    #[test]
    fn test_group_by_is_case_sensitive() {
        let groups = group_by(["Paris", "paris", "Paris"], |s| (*s).to_string());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_count_by_empty() {
        let counts = count_by(Vec::<u32>::new(), |v| *v);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_count_by() {
        let counts = count_by([1, 2, 1, 1, 3], |v| *v);
        assert_eq!(counts, vec![(1, 3), (2, 1), (3, 1)]);
    }
}
