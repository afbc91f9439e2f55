//! Integration tests for OrderedMap

use ordo_collections::{OrderedMap, OrderingPolicy};
use rstest::rstest;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_set_twice_then_new_key() {
    init_tracing();
    let mut m = OrderedMap::new();
    m.insert(1, "one");
    m.insert(1, "one");
    m.insert(2, "two");

    assert_eq!(m.keys(), vec![1, 2]);
    assert_eq!(m.values(), vec!["one", "two"]);
}

#[test]
fn test_from_entries_last_value_wins() {
    let m: OrderedMap<_, _> = vec![("one", 1), ("two", 2), ("two", 3)]
        .into_iter()
        .collect();

    assert_eq!(m.keys(), vec!["one", "two"]);
    assert_eq!(m.values(), vec![1, 3]);
}

#[test]
fn test_reinsert_keeps_position_without_comparator() {
    let mut m = OrderedMap::new();
    for key in ['a', 'b', 'c'] {
        m.insert(key, 0);
    }
    m.insert('b', 42);

    assert_eq!(m.keys(), vec!['a', 'b', 'c']);
    assert_eq!(m.get(&'b'), Some(&42));
}

#[rstest]
#[case(vec![3, 1, 2], vec![1, 2, 3])]
#[case(vec![1, 2, 3], vec![1, 2, 3])]
#[case(vec![9, -4, 0, 9], vec![-4, 0, 9])]
fn test_numeric_comparator_orders_keys(#[case] inserted: Vec<i32>, #[case] expected: Vec<i32>) {
    init_tracing();
    let mut m = OrderedMap::with_ordering(OrderingPolicy::by_key());
    for key in inserted {
        m.insert(key, ());
    }
    assert_eq!(m.keys(), expected);
}

#[rstest]
#[case::present("b", Some(2))]
#[case::absent("z", None)]
fn test_get_forms_agree(#[case] key: &str, #[case] expected: Option<i32>) {
    let m: OrderedMap<String, i32> = vec![("a".to_string(), 1), ("b".to_string(), 2)]
        .into_iter()
        .collect();

    assert_eq!(m.try_get(key), expected);
    assert_eq!(m.get_or_default(key), expected.unwrap_or_default());
    assert_eq!(m.contains_key(key), expected.is_some());
    assert_eq!(m.find(key).ok().copied(), expected);
}

#[test]
fn test_zero_value_is_distinguishable_from_absence() {
    let mut m = OrderedMap::new();
    m.insert("zero", 0u32);

    assert_eq!(m.get_or_default(&"zero"), m.get_or_default(&"missing"));
    assert_eq!(m.get(&"zero"), Some(&0));
    assert_eq!(m.get(&"missing"), None);
    assert!(m.find(&"missing").unwrap_err().is_key_not_found());
}

#[test]
fn test_round_trip_through_entries() {
    let m = OrderedMap::from_entries(
        vec![("c", 3), ("a", 1), ("b", 2)],
        OrderingPolicy::by_key(),
    );
    let rebuilt: OrderedMap<_, _> = m.to_entries().into_iter().collect();

    assert_eq!(rebuilt.to_entries(), m.to_entries());
}

#[test]
fn test_clone_is_independent() {
    let mut original: OrderedMap<_, _> = vec![(1, 'a'), (2, 'b')].into_iter().collect();
    let copy = original.clone();

    original.insert(3, 'c');
    original.remove(&1);

    assert_eq!(copy.keys(), vec![1, 2]);
    assert_eq!(original.keys(), vec![2, 3]);
}

#[test]
fn test_entry_comparator_over_values() {
    init_tracing();
    let mut scores: OrderedMap<&str, u32> = OrderedMap::with_comparator(
        |k1: &&str, v1: &u32, k2: &&str, v2: &u32| v2.cmp(v1).then_with(|| k1.cmp(k2)),
    );
    scores.insert("ada", 3);
    scores.insert("bob", 7);
    scores.insert("cy", 3);
    assert_eq!(scores.keys(), vec!["bob", "ada", "cy"]);

    scores.insert("ada", 9);
    assert_eq!(scores.keys(), vec!["ada", "bob", "cy"]);

    scores.remove(&"bob");
    assert_eq!(scores.keys(), vec!["ada", "cy"]);
}

#[test]
fn test_iteration_matches_snapshots() {
    let m: OrderedMap<_, _> = vec![("x", 1), ("y", 2), ("z", 3)].into_iter().collect();

    let borrowed: Vec<_> = m.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(borrowed, m.to_entries());

    let owned: Vec<_> = m.clone().into_iter().collect();
    assert_eq!(owned, m.to_entries());

    let mut visited = Vec::new();
    m.for_each(|k, v| visited.push(format!("{k}={v}")));
    assert_eq!(visited, vec!["x=1", "y=2", "z=3"]);
}

#[test]
fn test_clear_keeps_policy() {
    let mut m = OrderedMap::from_entries(vec![(2, ()), (1, ())], OrderingPolicy::by_key());
    m.clear();
    assert!(m.is_empty());

    m.insert(5, ());
    m.insert(4, ());
    assert_eq!(m.keys(), vec![4, 5]);
}
