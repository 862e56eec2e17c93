//! Binary search over a slice already sorted under the query's key.

use std::cmp::Ordering;

use crate::key::Query;
use crate::record::Record;

/// Classic iterative binary search over `[0, len - 1]`.
///
/// Returns the index of the first match the probe sequence reaches, or `None`
/// once the probe window closes. The slice must already be sorted under the
/// same key and name mode the query was built with; a violated precondition
/// silently yields wrong lookups, not a detectable error.
pub fn search(records: &[Record], query: &Query) -> Option<usize> {
    let mut left: isize = 0;
    let mut right = records.len() as isize - 1;

    while left <= right {
        let middle = (left + (right - left) / 2) as usize;
        let record = &records[middle];
        if query.matches(record) {
            return Some(middle);
        }
        match query.direction(record) {
            Ordering::Less => left = middle as isize + 1,
            _ => right = middle as isize - 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{NameOrdering, SortKey};
    use crate::sort::sort;
    use proptest::prelude::*;

    fn sorted_sample() -> Vec<Record> {
        let mut records = vec![
            Record::new(1, "Pen", 1.5, "Office"),
            Record::new(3, "Mug", 5.0, "Kitchen"),
            Record::new(2, "Lamp", 12.0, "Home"),
        ];
        sort(&mut records, SortKey::ById, NameOrdering::default());
        records
    }

    fn id_query(raw: &str) -> Query {
        SortKey::ById.parse_query(raw, NameOrdering::default()).unwrap()
    }

    #[test]
    fn finds_a_present_id() {
        let records = sorted_sample();
        let index = search(&records, &id_query("2")).unwrap();
        assert_eq!(records[index].name, "Lamp");
    }

    #[test]
    fn reports_absent_id_as_none() {
        assert_eq!(search(&sorted_sample(), &id_query("9")), None);
    }

    #[test]
    fn empty_slice_is_always_not_found() {
        assert_eq!(search(&[], &id_query("1")), None);
    }

    #[test]
    fn finds_by_price() {
        let mut records = sorted_sample();
        sort(&mut records, SortKey::ByPrice, NameOrdering::default());
        let query = SortKey::ByPrice.parse_query("5.0", NameOrdering::default()).unwrap();
        let index = search(&records, &query).unwrap();
        assert_eq!(records[index].id, 3);
    }

    #[test]
    fn finds_names_with_distinct_first_letters_in_faithful_mode() {
        let mut records = sorted_sample();
        sort(&mut records, SortKey::ByName, NameOrdering::FirstChar);
        for name in ["Pen", "Mug", "Lamp"] {
            let query = SortKey::ByName.parse_query(name, NameOrdering::FirstChar).unwrap();
            let index = search(&records, &query).unwrap();
            assert_eq!(records[index].name, name);
        }
    }

    #[test]
    fn shared_first_letters_can_hide_records_in_faithful_mode() {
        // Every first letter is 'P', so probe movement carries no signal and
        // records off the probe's fixed path become unreachable.
        let mut records = vec![
            Record::new(1, "Pad", 3.0, "Office"),
            Record::new(2, "Pen", 1.5, "Office"),
            Record::new(3, "Pin", 0.5, "Office"),
        ];
        sort(&mut records, SortKey::ByName, NameOrdering::FirstChar);
        let found = ["Pad", "Pen", "Pin"]
            .iter()
            .filter(|name| {
                let query =
                    SortKey::ByName.parse_query(name, NameOrdering::FirstChar).unwrap();
                search(&records, &query).is_some()
            })
            .count();
        assert!(found < 3, "some present record must be unreachable");
    }

    #[test]
    fn full_name_ordering_finds_every_shared_prefix_name() {
        let mut records = vec![
            Record::new(1, "Pad", 3.0, "Office"),
            Record::new(2, "Pen", 1.5, "Office"),
            Record::new(3, "Pin", 0.5, "Office"),
        ];
        sort(&mut records, SortKey::ByName, NameOrdering::Full);
        for name in ["Pad", "Pen", "Pin"] {
            let query = SortKey::ByName.parse_query(name, NameOrdering::Full).unwrap();
            let index = search(&records, &query).unwrap();
            assert_eq!(records[index].name, name);
        }
    }

    #[test]
    fn duplicate_ids_return_some_match() {
        let mut records = vec![
            Record::new(2, "A", 1.0, "x"),
            Record::new(2, "B", 2.0, "x"),
            Record::new(1, "C", 3.0, "x"),
        ];
        sort(&mut records, SortKey::ById, NameOrdering::default());
        let index = search(&records, &id_query("2")).unwrap();
        assert_eq!(records[index].id, 2);
    }

    fn records_strategy(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec(
            (-1000i64..1000, "[A-Za-z]{1,8}", 0.0f64..1000.0).prop_map(|(id, name, price)| {
                Record::new(id, name, price, "Generated")
            }),
            0..max_len,
        )
    }

    proptest! {
        #[test]
        fn every_present_id_is_findable(mut records in records_strategy(40)) {
            sort(&mut records, SortKey::ById, NameOrdering::default());
            let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
            for id in ids {
                let query = id_query(&id.to_string());
                let index = search(&records, &query);
                prop_assert!(index.is_some());
                prop_assert_eq!(records[index.unwrap()].id, id);
            }
        }

        #[test]
        fn absent_ids_are_not_found(mut records in records_strategy(40)) {
            sort(&mut records, SortKey::ById, NameOrdering::default());
            // 5000 is outside the generated id range.
            prop_assert_eq!(search(&records, &id_query("5000")), None);
        }
    }
}
