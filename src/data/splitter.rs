// ============================================================
// Layer 4 — Dataset Splitter
// ============================================================
// Two independent partitions of a flattened RecordTable:
//
//   split_test_set
//     Rows whose annotation cannot be trusted (see classifier.rs)
//     become a held-out test set. Everything sharing an `id`
//     with a held-out row is kept out of training.
//
//   split_validation_set
//     Splits by DOCUMENT TITLE rather than by row, so all the
//     questions about one article land on the same side. Splitting
//     rows directly would leak near-identical contexts from
//     training into validation.
//
// The title split shuffles with a seeded StdRng, so the same
// table and rate always produce the same partition.
//
// Reference: Rust Book §8 (Vectors, HashSet)
//            rand crate documentation (SeedableRng, SliceRandom)

use std::collections::HashSet;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::data::classifier::classify;
use crate::domain::record::RecordTable;
use crate::error::{DatasetError, Result};

/// Seed used by `split_validation_set`
pub const DEFAULT_SEED: u64 = 0;

/// Row counts behind one `split_test_set` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestSplitReport {
    pub ambiguous:        usize,
    pub inconsistent:     usize,
    pub train:            usize,
    /// Rows that share an id with a held-out row but were not
    /// flagged themselves. They end up in neither output.
    pub dropped_siblings: usize,
}

/// Output of `split_test_set_with_report`
#[derive(Debug, Clone)]
pub struct TestSplit {
    pub train:    RecordTable,
    pub held_out: RecordTable,
    pub report:   TestSplitReport,
}

/// Split into (train, held_out).
///
/// held_out = ambiguous rows followed by inconsistent rows.
/// train    = every row whose id is not in held_out.
pub fn split_test_set(table: &RecordTable) -> Result<(RecordTable, RecordTable)> {
    let split = split_test_set_with_report(table)?;
    Ok((split.train, split.held_out))
}

/// Same as `split_test_set`, also returning the row counts.
pub fn split_test_set_with_report(table: &RecordTable) -> Result<TestSplit> {
    // Every row needs its answer fields before anything is classified
    for record in table {
        if record.text.is_none() {
            return Err(DatasetError::MissingField { id: record.id.clone(), field: "text" });
        }
        if record.answer_start.is_none() {
            return Err(DatasetError::MissingField { id: record.id.clone(), field: "answer_start" });
        }
    }

    // ── Step 1: rows whose answer text occurs more than once ─────────────────
    let ambiguous = table.filter(|r| classify(r).ambiguous);
    let ambiguous_ids: HashSet<&str> = ambiguous.iter().map(|r| r.id.as_str()).collect();

    // ── Step 2: among questions with no ambiguous row, offset mismatches ─────
    let inconsistent = table
        .filter(|r| !ambiguous_ids.contains(r.id.as_str()))
        .filter(|r| classify(r).inconsistent);

    // ── Step 3: held-out = ambiguous ++ inconsistent ─────────────────────────
    let report_ambiguous    = ambiguous.len();
    let report_inconsistent = inconsistent.len();
    let held_out = ambiguous.concat(inconsistent);

    // ── Step 4: train = everything whose id never reached held-out ──────────
    let held_out_ids: HashSet<&str> = held_out.iter().map(|r| r.id.as_str()).collect();
    let train = table.filter(|r| !held_out_ids.contains(r.id.as_str()));

    let dropped_siblings = table.len() - train.len() - held_out.len();
    if dropped_siblings > 0 {
        tracing::warn!(
            "{} records share an id with a held-out record and were left out of both splits",
            dropped_siblings
        );
    }

    tracing::info!(
        "Test split: {} train, {} held out ({} ambiguous, {} inconsistent)",
        train.len(),
        held_out.len(),
        report_ambiguous,
        report_inconsistent,
    );

    let report = TestSplitReport {
        ambiguous:    report_ambiguous,
        inconsistent: report_inconsistent,
        train:        train.len(),
        dropped_siblings,
    };

    Ok(TestSplit { train, held_out, report })
}

/// Split into (train, validation) by title with the default seed.
///
/// `rate` is the share of titles sent to validation, in (0, 1).
pub fn split_validation_set(table: &RecordTable, rate: f64) -> Result<(RecordTable, RecordTable)> {
    split_validation_set_seeded(table, rate, DEFAULT_SEED)
}

/// Title-grouped split with an explicit seed.
pub fn split_validation_set_seeded(
    table: &RecordTable,
    rate:  f64,
    seed:  u64,
) -> Result<(RecordTable, RecordTable)> {
    let titles = table.unique_titles();
    let (train_titles, val_titles) = split_titles(titles, rate, seed)?;

    let val_titles: HashSet<&str> = val_titles.into_iter().collect();
    let validation = table.filter(|r| val_titles.contains(r.title.as_str()));
    let train = table.filter(|r| !val_titles.contains(r.title.as_str()));

    tracing::info!(
        "Validation split: {} train rows ({} titles), {} validation rows ({} titles)",
        train.len(),
        train_titles.len(),
        validation.len(),
        val_titles.len(),
    );

    Ok((train, validation))
}

/// Shuffle `titles` with a seeded RNG and move the first
/// ceil(rate * n) of them into the validation group.
///
/// Titles arrive sorted, so the result depends only on the set
/// of titles and the seed, never on row order.
fn split_titles(mut titles: Vec<&str>, rate: f64, seed: u64) -> Result<(Vec<&str>, Vec<&str>)> {
    // Also rejects NaN
    if !(rate > 0.0 && rate < 1.0) {
        return Err(DatasetError::InvalidRate { rate });
    }

    let total  = titles.len();
    let n_val  = ((total as f64) * rate).ceil() as usize;
    if n_val == 0 || n_val >= total {
        return Err(DatasetError::EmptySplit { titles: total, rate });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    titles.shuffle(&mut rng);

    // split_off(n) leaves [0..n) in `titles` and returns [n..)
    let train = titles.split_off(n_val);

    tracing::debug!("Title split: {} train, {} validation", train.len(), titles.len());
    Ok((train, titles))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;

    fn answered(title: &str, id: &str, context: &str, text: &str, start: usize) -> Record {
        Record::answered(title, context, "q?", id, text, start)
    }

    fn titled(n_titles: usize, rows_per_title: usize) -> RecordTable {
        (0..n_titles)
            .flat_map(|t| {
                (0..rows_per_title).map(move |r| {
                    answered(&format!("doc-{t:02}"), &format!("{t}-{r}"), "abc", "b", 1)
                })
            })
            .collect()
    }

    #[test]
    fn test_held_out_orders_ambiguous_before_inconsistent() {
        let table = RecordTable::new(vec![
            answered("A", "1", "the dog ran", "dog", 0), // inconsistent
            answered("A", "2", "cat and cat", "cat", 0), // ambiguous
            answered("B", "3", "the dog ran", "dog", 4), // clean
        ]);
        let (train, held_out) = split_test_set(&table).unwrap();
        assert_eq!(held_out.ids(), vec!["2", "1"]);
        assert_eq!(train.ids(), vec!["3"]);
    }

    #[test]
    fn test_siblings_of_ambiguous_row_are_dropped() {
        let table = RecordTable::new(vec![
            answered("A", "1", "cat and cat", "cat", 0), // ambiguous
            answered("A", "1", "cat and cat", "and", 4), // clean sibling
            answered("A", "2", "cat and cat", "and", 4), // clean
        ]);
        let split = split_test_set_with_report(&table).unwrap();
        assert_eq!(split.held_out.len(), 1);
        assert_eq!(split.train.ids(), vec!["2"]);
        assert_eq!(split.report.dropped_siblings, 1);
    }

    #[test]
    fn test_siblings_of_inconsistent_row_are_dropped() {
        let table = RecordTable::new(vec![
            answered("A", "1", "the dog ran", "dog", 4), // clean
            answered("A", "1", "the dog ran", "ran", 0), // inconsistent
        ]);
        let split = split_test_set_with_report(&table).unwrap();
        assert_eq!(split.held_out.len(), 1);
        assert_eq!(split.held_out.get(0).unwrap().text.as_deref(), Some("ran"));
        assert!(split.train.is_empty());
        assert_eq!(split.report.dropped_siblings, 1);
    }

    #[test]
    fn test_train_and_held_out_ids_disjoint() {
        let table = RecordTable::new(vec![
            answered("A", "1", "x y x", "x", 0),
            answered("A", "1", "x y x", "y", 2),
            answered("A", "2", "x y x", "y", 0),
            answered("B", "3", "x y x", "y", 2),
        ]);
        let (train, held_out) = split_test_set(&table).unwrap();
        let held: HashSet<_> = held_out.ids().into_iter().collect();
        assert!(train.ids().iter().all(|id| !held.contains(id)));
    }

    #[test]
    fn test_missing_answer_field_is_error() {
        let table = RecordTable::new(vec![Record::unanswered("A", "ctx", "q", "7")]);
        let err = split_test_set(&table).unwrap_err();
        assert!(matches!(err, DatasetError::MissingField { field: "text", .. }));
    }

    #[test]
    fn test_empty_table_splits_into_empty_tables() {
        let (train, held_out) = split_test_set(&RecordTable::default()).unwrap();
        assert!(train.is_empty());
        assert!(held_out.is_empty());
    }

    #[test]
    fn test_correct_split_sizes() {
        let table = titled(10, 3);
        let (train, val) = split_validation_set(&table, 0.2).unwrap();
        assert_eq!(val.unique_titles().len(), 2);
        assert_eq!(train.unique_titles().len(), 8);
        assert_eq!(val.len(), 6);
        assert_eq!(train.len(), 24);
    }

    #[test]
    fn test_validation_count_rounds_up() {
        // ceil(0.25 * 5) = 2
        let (_, val) = split_validation_set(&titled(5, 1), 0.25).unwrap();
        assert_eq!(val.len(), 2);
    }

    #[test]
    fn test_no_title_on_both_sides() {
        let table = titled(7, 4);
        let (train, val) = split_validation_set(&table, 0.3).unwrap();
        let train_titles: HashSet<_> = train.titles().into_iter().collect();
        assert!(val.titles().iter().all(|t| !train_titles.contains(t)));
        assert_eq!(train.len() + val.len(), table.len());
    }

    #[test]
    fn test_same_seed_same_partition() {
        let table = titled(20, 2);
        let first = split_validation_set(&table, 0.2).unwrap();
        let second = split_validation_set(&table, 0.2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rows_keep_original_order() {
        let table = titled(6, 3);
        let (train, _) = split_validation_set(&table, 0.5).unwrap();
        let positions: Vec<_> = train
            .iter()
            .map(|r| table.iter().position(|o| o.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rate_out_of_range_rejected() {
        let table = titled(4, 1);
        for rate in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = split_validation_set(&table, rate).unwrap_err();
            assert!(matches!(err, DatasetError::InvalidRate { .. }));
        }
    }

    #[test]
    fn test_single_title_cannot_be_split() {
        let err = split_validation_set(&titled(1, 5), 0.2).unwrap_err();
        assert!(matches!(err, DatasetError::EmptySplit { titles: 1, .. }));
    }

    #[test]
    fn test_empty_dataset() {
        let err = split_validation_set(&RecordTable::default(), 0.2).unwrap_err();
        assert!(matches!(err, DatasetError::EmptySplit { titles: 0, .. }));
    }
}
