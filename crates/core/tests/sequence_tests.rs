//! Integration tests for the sequence extension trait

use ordo_core::{Error, SequenceExt};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(vec![5], 5, 5)]
#[case(vec![2, 8, -3, 8], 8, -3)]
#[case(vec![-1, -1, -1], -1, -1)]
fn test_extremes(#[case] input: Vec<i32>, #[case] max: i32, #[case] min: i32) {
    assert_eq!(input.iter().copied().try_max("max"), Ok(max));
    assert_eq!(input.iter().copied().try_min("min"), Ok(min));
}

#[rstest]
#[case("try_max")]
#[case("try_min")]
fn test_empty_errors_carry_operation(#[case] operation: &str) {
    let result = match operation {
        "try_max" => Vec::<u8>::new().into_iter().try_max(operation),
        _ => Vec::<u8>::new().into_iter().try_min(operation),
    };
    assert_eq!(result, Err(Error::empty_input(operation)));
}

proptest! {
    #[test]
    fn prop_max_matches_std(values in prop::collection::vec(any::<i64>(), 1..64)) {
        let ours = values.iter().copied().try_max("max").unwrap();
        prop_assert_eq!(Some(ours), values.iter().copied().max());
    }

    #[test]
    fn prop_min_by_key_is_first_minimum(values in prop::collection::vec(0u8..8, 1..64)) {
        let (index, _) = values
            .iter()
            .copied()
            .enumerate()
            .try_min_by_key("min", |(_, v)| *v)
            .unwrap();
        let expected = values
            .iter()
            .position(|v| Some(v) == values.iter().min())
            .unwrap();
        prop_assert_eq!(index, expected);
    }
}
