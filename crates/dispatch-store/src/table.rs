//! In-memory mirror of one comma-delimited file.
//!
//! Every workflow follows the same cycle: load the whole file into a
//! [`Table`], mutate rows in memory, then rewrite the whole file. After a
//! successful [`Table::persist`] the file is a complete snapshot of the
//! table; after a failed one, memory and disk may disagree (there is no
//! rollback).
//!
//! Fields are joined and split on the literal comma with no quoting or
//! escaping, so a field that itself contains a comma corrupts its record on
//! the next rewrite. That is the historical wire format of these files and
//! is kept as-is; the reader runs with quote handling disabled so quoted
//! text round-trips byte-for-byte.

use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use tracing::{debug, warn};

use crate::error::StoreError;

/// Ordered rows plus fixed display column names for one dataset file.
///
/// Rows are plain string fields; numeric columns are parsed on demand by
/// callers. Record identity for update and delete is the positional row
/// index, so a held index goes stale once an earlier row is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Load a table from `path`.
    ///
    /// Never fails past empty: a missing or unopenable file yields an empty
    /// table and the caller decides whether that means "start fresh".
    /// Blank lines are skipped, short rows are padded to the column count,
    /// and rows with extra trailing fields keep them so a rewrite does not
    /// drop data.
    pub fn load(path: &Path, columns: &[&str]) -> Self {
        let mut table = Self::new(columns);
        let mut reader = match ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_path(path)
        {
            Ok(reader) => reader,
            Err(error) => {
                debug!(path = %path.display(), %error, "no readable data, starting empty");
                return table;
            }
        };
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unreadable record");
                    continue;
                }
            };
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            if row.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            while row.len() < table.columns.len() {
                row.push(String::new());
            }
            table.rows.push(row);
        }
        debug!(path = %path.display(), rows = table.rows.len(), "loaded table");
        table
    }

    /// Rewrite the entire file from the in-memory rows.
    ///
    /// The rewrite goes through a sibling temp file followed by a rename,
    /// so a crash mid-write cannot leave the target truncated. On error the
    /// in-memory table is NOT rolled back and may now disagree with disk.
    pub fn persist(&self, path: &Path) -> Result<(), StoreError> {
        let tmp = sibling_temp_path(path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .from_path(&tmp)
            .map_err(|error| StoreError::csv(&tmp, &error))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|error| StoreError::csv(&tmp, &error))?;
        }
        writer
            .flush()
            .map_err(|source| StoreError::io(&tmp, source))?;
        drop(writer);
        std::fs::rename(&tmp, path).map_err(|source| StoreError::io(path, source))?;
        debug!(path = %path.display(), rows = self.rows.len(), "persisted table");
        Ok(())
    }

    /// Append a record positionally. Field-emptiness rules are caller
    /// policy, not a store invariant; see [`require_non_empty`].
    pub fn append(&mut self, record: Vec<String>) {
        self.rows.push(record);
    }

    /// Replace the given columns at `index`, leaving every other field and
    /// row untouched. The row is padded if an update targets a column
    /// beyond its current width.
    pub fn update_at(&mut self, index: usize, updates: &[(usize, String)]) -> Result<(), StoreError> {
        let rows = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, rows })?;
        for (column, value) in updates {
            if row.len() <= *column {
                row.resize(column + 1, String::new());
            }
            row[*column] = value.clone();
        }
        Ok(())
    }

    /// Remove the row at `index`, returning it. Remaining rows shift down,
    /// so any externally held index past this one is now stale.
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<String>, StoreError> {
        if index >= self.rows.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                rows: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    /// First row matching `predicate`, scanning in insertion order.
    pub fn find_first<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&[String]) -> bool,
    {
        self.rows.iter().position(|row| predicate(row))
    }

    /// Case-insensitive substring search across the given column positions;
    /// returns the first matching row.
    pub fn search(&self, term: &str, columns: &[usize]) -> Option<usize> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.find_first(|row| {
            columns.iter().any(|column| {
                row.get(*column)
                    .is_some_and(|field| field.to_lowercase().contains(&needle))
            })
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Create `path` with the given rows when it does not exist yet.
///
/// Returns true when the file was created. An existing file is never
/// touched, so seeding is safe to run before every read of the dataset.
pub fn ensure_seeded(
    path: &Path,
    columns: &[&str],
    rows: &[&[&str]],
) -> Result<bool, StoreError> {
    if path.exists() {
        return Ok(false);
    }
    let mut table = Table::new(columns);
    for row in rows {
        table.append(row.iter().map(|f| (*f).to_string()).collect());
    }
    table.persist(path)?;
    debug!(path = %path.display(), rows = rows.len(), "seeded dataset file");
    Ok(true)
}

/// Reject the first blank value among the fields an operation requires.
///
/// Applied by operations that need complete input; store mutations
/// themselves accept partial records (intake, for example, appends a
/// record whose tail columns are legitimately empty).
pub fn require_non_empty<'a, I>(fields: I) -> Result<(), StoreError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (column, value) in fields {
        if value.trim().is_empty() {
            return Err(StoreError::EmptyField {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn sibling_temp_path(path: &Path) -> Result<PathBuf, StoreError> {
    match path.file_name() {
        Some(name) => {
            let mut tmp_name = name.to_os_string();
            tmp_name.push(".tmp");
            Ok(path.with_file_name(tmp_name))
        }
        None => Err(StoreError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file path"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{Table, require_non_empty};

    fn sample() -> Table {
        let mut table = Table::new(&["Name", "Location", "Status"]);
        table.append(vec!["Ada".into(), "Ward 3".into(), "Pending".into()]);
        table.append(vec!["Grace".into(), "ER".into(), "Pending".into()]);
        table
    }

    #[test]
    fn update_touches_only_named_columns() {
        let mut table = sample();
        table
            .update_at(1, &[(2, "Dispatched".to_string())])
            .expect("valid index");
        assert_eq!(table.rows[1], vec!["Grace", "ER", "Dispatched"]);
        assert_eq!(table.rows[0][2], "Pending");
    }

    #[test]
    fn update_out_of_range_leaves_table_unchanged() {
        let mut table = sample();
        let before = table.clone();
        assert!(table.update_at(2, &[(0, "X".to_string())]).is_err());
        assert_eq!(table, before);
    }

    #[test]
    fn remove_shifts_following_rows() {
        let mut table = sample();
        let removed = table.remove_at(0).expect("valid index");
        assert_eq!(removed[0], "Ada");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0][0], "Grace");
    }

    #[test]
    fn search_is_case_insensitive_and_scoped() {
        let table = sample();
        assert_eq!(table.search("grace", &[0]), Some(1));
        assert_eq!(table.search("ward", &[0]), None);
        assert_eq!(table.search("WARD", &[0, 1]), Some(0));
        assert_eq!(table.search("  ", &[0]), None);
    }

    #[test]
    fn require_non_empty_names_the_blank_column() {
        let error = require_non_empty([("Name", "Ada"), ("Status", " ")]).unwrap_err();
        assert_eq!(error.to_string(), "Status must not be empty");
    }
}
