#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sorts::jagged::{self, Direction, RowKey};

fuzz_target!(|input: (Vec<Option<Vec<i32>>>, bool, bool)| {
    let (mut rows, by_max, descending) = input;
    let mut expected_rows = rows.clone();
    expected_rows.sort();

    let key = if by_max { RowKey::Max } else { RowKey::Sum };
    let direction = if descending {
        Direction::Descending
    } else {
        Direction::Ascending
    };

    jagged::order_rows(Some(&mut rows[..]), key, direction).unwrap();

    // Same rows, possibly reordered.
    let mut got_rows = rows.clone();
    got_rows.sort();
    assert_eq!(got_rows, expected_rows);

    let key_of = |row: &Option<Vec<i32>>| -> i64 {
        let row = row.as_deref().unwrap_or(&[]);
        match key {
            RowKey::Sum => row.iter().map(|&x| i64::from(x)).sum(),
            RowKey::Max => i64::from(row.iter().copied().max().unwrap_or(i32::MIN)),
        }
    };

    let keys: Vec<i64> = rows.iter().map(key_of).collect();
    match direction {
        Direction::Ascending => assert!(keys.windows(2).all(|w| w[0] <= w[1])),
        Direction::Descending => assert!(keys.windows(2).all(|w| w[0] >= w[1])),
    }
});
