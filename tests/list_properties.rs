// File: tests/list_properties.rs
use huhhh::error::HuhhhError;
use huhhh::model::parser::parse_index;
use huhhh::model::{Task, TaskList};
use proptest::prelude::*;

fn list_of(descriptions: &[String]) -> TaskList {
    descriptions
        .iter()
        .map(|d| Task::todo(d.as_str()))
        .collect::<Vec<_>>()
        .into()
}

proptest! {
    #[test]
    fn index_k_selects_the_kth_task(
        descriptions in prop::collection::vec("[a-z]{1,8}", 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let list = list_of(&descriptions);
        let k = pick.index(descriptions.len()) + 1;

        let index = parse_index(&k.to_string()).unwrap();
        prop_assert_eq!(list.get(index).unwrap().description(), descriptions[k - 1].as_str());
    }

    #[test]
    fn index_outside_range_is_rejected(
        descriptions in prop::collection::vec("[a-z]{1,8}", 0..10),
        k in prop_oneof![Just(0i64), -50i64..0, 10i64..1000],
    ) {
        let list = list_of(&descriptions);
        let index = parse_index(&k.to_string()).unwrap();
        prop_assert_eq!(
            list.get(index).unwrap_err(),
            HuhhhError::IndexOutOfBounds { size: descriptions.len() }
        );
    }

    #[test]
    fn find_returns_exactly_the_matching_subset_in_order(
        descriptions in prop::collection::vec("[a-c]{1,4}( [a-c]{1,4}){0,2}", 0..15),
        keyword in "[a-c]{1,3}",
    ) {
        let list = list_of(&descriptions);
        let matches = list.find_tasks(&keyword);
        let found: Vec<&str> = matches.iter().map(|t| t.description()).collect();
        let expected: Vec<&str> = descriptions
            .iter()
            .filter(|d| d.contains(keyword.as_str()))
            .map(String::as_str)
            .collect();
        prop_assert_eq!(found, expected);
    }
}
