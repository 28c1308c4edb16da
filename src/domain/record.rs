// ============================================================
// Layer 3 — Record and RecordTable
// ============================================================
// A Record is one flattened row of the dataset: one
// (question, answer) pair together with its paragraph context
// and document title.
//
// A question with N answers becomes N records that share the
// same `id`, so `id` is NOT a unique row key.
//
// RecordTable is an ordered Vec<Record>. Row positions are just
// Vec indices, so every table built by filtering or concatenating
// is numbered contiguously from 0.
//
// Reference: Rust Book §8 (Vectors)
//            Rust Book §13 (Iterators)

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One flattened row. The answer fields are `None` for
/// datasets loaded without answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub question: String,
    pub id: String,
}

impl Record {
    /// Build a record that carries an answer span
    pub fn answered(
        title:        impl Into<String>,
        context:      impl Into<String>,
        question:     impl Into<String>,
        id:           impl Into<String>,
        text:         impl Into<String>,
        answer_start: usize,
    ) -> Self {
        Self {
            title:        title.into(),
            context:      context.into(),
            answer_start: Some(answer_start),
            text:         Some(text.into()),
            question:     question.into(),
            id:           id.into(),
        }
    }

    /// Build a record with no answer fields
    pub fn unanswered(
        title:    impl Into<String>,
        context:  impl Into<String>,
        question: impl Into<String>,
        id:       impl Into<String>,
    ) -> Self {
        Self {
            title:        title.into(),
            context:      context.into(),
            answer_start: None,
            text:         None,
            question:     question.into(),
            id:           id.into(),
        }
    }

    pub fn has_answer(&self) -> bool {
        self.text.is_some() && self.answer_start.is_some()
    }
}

/// Ordered collection of records with column access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// The `id` column, in row order
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    /// The `title` column, in row order
    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.title.as_str()).collect()
    }

    /// Distinct titles, sorted
    pub fn unique_titles(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.title.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// New table of the rows matching `keep`, in their original order
    pub fn filter<F>(&self, mut keep: F) -> RecordTable
    where
        F: FnMut(&Record) -> bool,
    {
        self.records.iter().filter(|r| keep(*r)).cloned().collect()
    }

    /// `self` followed by `other`
    pub fn concat(mut self, other: RecordTable) -> RecordTable {
        self.records.extend(other.records);
        self
    }
}

impl FromIterator<Record> for RecordTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordTable {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
