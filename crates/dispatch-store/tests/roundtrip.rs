//! Property tests for the persist/load cycle.

use dispatch_store::Table;
use proptest::prelude::*;
use tempfile::TempDir;

const COLUMNS: [&str; 3] = ["Name", "Location", "Status"];

/// Fields drawn from the delimiter-free alphabet the wire format can
/// actually represent (no commas, no newlines, not all-blank).
fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .'-]{0,19}"
}

fn rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(field(), 3), 1..8)
}

proptest! {
    #[test]
    fn persist_then_load_preserves_rows_and_order(rows in rows()) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("table.csv");

        let mut table = Table::new(&COLUMNS);
        for row in &rows {
            table.append(row.clone());
        }
        table.persist(&path).expect("persist");

        let reloaded = Table::load(&path, &COLUMNS);
        prop_assert_eq!(reloaded.rows, rows);
    }

    #[test]
    fn remove_drops_exactly_one_row(rows in rows(), selector in any::<prop::sample::Index>()) {
        let mut table = Table::new(&COLUMNS);
        for row in &rows {
            table.append(row.clone());
        }
        let index = selector.index(rows.len());
        table.remove_at(index).expect("valid index");

        prop_assert_eq!(table.len(), rows.len() - 1);
        let mut expected = rows;
        expected.remove(index);
        prop_assert_eq!(table.rows, expected);
    }
}
