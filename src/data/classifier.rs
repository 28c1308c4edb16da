// ============================================================
// Layer 4 — Row Classifier
// ============================================================
// Decides whether a record's answer annotation can be trusted.
//
//   ambiguous    — the answer text appears more than once in the
//                  context, so the offset could point at any copy
//   inconsistent — the answer text appears at most once, but the
//                  stated answer_start is not where it actually is
//                  (or the text is not in the context at all)
//
// Offsets are counted in characters, matching how SQuAD
// annotates `answer_start`. str::find returns a byte offset,
// so it is converted before comparing.
//
// Reference: Rust Book §8 (Strings: UTF-8 and indexing)

use crate::domain::record::{Record, RecordTable};

/// Result of classifying one record.
/// `inconsistent` is only ever true when `ambiguous` is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowClass {
    pub ambiguous:    bool,
    pub inconsistent: bool,
}

impl RowClass {
    /// True when the record should not be used for training
    pub fn is_flagged(&self) -> bool {
        self.ambiguous || self.inconsistent
    }
}

/// Non-overlapping occurrences of `needle` in `haystack`.
/// An empty needle never occurs.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Character offset of the first occurrence of `needle`,
/// or None when it does not occur (or is empty).
pub fn first_char_index(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}

/// Classify a single record. Never fails: a record without
/// answer fields is treated as an empty answer, which is never
/// found and therefore inconsistent.
pub fn classify(record: &Record) -> RowClass {
    let text = record.text.as_deref().unwrap_or("");

    if count_occurrences(&record.context, text) > 1 {
        return RowClass {
            ambiguous:    true,
            inconsistent: false,
        };
    }

    let found = first_char_index(&record.context, text);
    RowClass {
        ambiguous:    false,
        inconsistent: record.answer_start.is_none() || found != record.answer_start,
    }
}

/// Classify every row, in table order
pub fn classify_table(table: &RecordTable) -> Vec<RowClass> {
    table.iter().map(classify).collect()
}
