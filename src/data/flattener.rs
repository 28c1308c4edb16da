// ============================================================
// Layer 4 — Flattener
// ============================================================
// Turns nested documents into a flat RecordTable.
//
//   Document → Paragraph → QuestionBlock → Answer
//       └──────────── one Record per leaf ───────────┘
//
// Rows come out in traversal order (document, paragraph,
// question, answer). Nothing is sorted, deduplicated or
// validated here; offset checks belong to the classifier.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::domain::record::{Record, RecordTable};
use crate::domain::squad::Document;
use crate::error::{DatasetError, Result};

/// One record per (question, answer) pair.
///
/// A QuestionBlock with no `answers` key is malformed input in
/// this mode. An empty `answers` list is allowed and yields no rows.
pub fn flatten_with_answers(documents: &[Document]) -> Result<RecordTable> {
    let mut records = Vec::new();

    for (d, doc) in documents.iter().enumerate() {
        for (p, paragraph) in doc.paragraphs.iter().enumerate() {
            for (q, qa) in paragraph.qas.iter().enumerate() {
                let answers = qa.answers.as_ref().ok_or_else(|| DatasetError::MalformedInput {
                    path:   format!("data[{d}].paragraphs[{p}].qas[{q}]"),
                    reason: format!("question '{}' has no `answers` key", qa.id),
                })?;

                records.extend(answers.iter().map(|answer| {
                    Record::answered(
                        doc.title.as_str(),
                        paragraph.context.as_str(),
                        qa.question.as_str(),
                        qa.id.as_str(),
                        answer.text.as_str(),
                        answer.answer_start,
                    )
                }));
            }
        }
    }

    tracing::debug!("Flattened {} documents into {} answer records", documents.len(), records.len());
    Ok(RecordTable::new(records))
}

/// One record per QuestionBlock, without answer fields.
/// Any `answers` present in the input are ignored.
pub fn flatten_without_answers(documents: &[Document]) -> RecordTable {
    let table: RecordTable = documents
        .iter()
        .flat_map(|doc| {
            doc.paragraphs.iter().flat_map(move |paragraph| {
                paragraph.qas.iter().map(move |qa| {
                    Record::unanswered(
                        doc.title.as_str(),
                        paragraph.context.as_str(),
                        qa.question.as_str(),
                        qa.id.as_str(),
                    )
                })
            })
        })
        .collect();

    tracing::debug!("Flattened {} documents into {} question records", documents.len(), table.len());
    table
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::squad::{Answer, Paragraph, QuestionBlock};

    fn sample_documents() -> Vec<Document> {
        vec![
            Document::new(
                "Alpha",
                vec![
                    Paragraph::new(
                        "alpha one",
                        vec![
                            QuestionBlock::new(
                                "a1",
                                "first?",
                                vec![Answer::new("alpha", 0), Answer::new("one", 6)],
                            ),
                            QuestionBlock::new("a2", "second?", vec![Answer::new("one", 6)]),
                        ],
                    ),
                    Paragraph::new(
                        "alpha two",
                        vec![QuestionBlock::new("a3", "third?", vec![Answer::new("two", 6)])],
                    ),
                ],
            ),
            Document::new(
                "Beta",
                vec![Paragraph::new(
                    "beta",
                    vec![QuestionBlock::new("b1", "fourth?", vec![])],
                )],
            ),
        ]
    }

    #[test]
    fn test_one_record_per_answer() {
        let table = flatten_with_answers(&sample_documents()).unwrap();
        // 2 + 1 + 1 + 0 answers
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_traversal_order_preserved() {
        let table = flatten_with_answers(&sample_documents()).unwrap();
        assert_eq!(table.ids(), vec!["a1", "a1", "a2", "a3"]);
        let texts: Vec<_> = table.iter().map(|r| r.text.as_deref().unwrap()).collect();
        assert_eq!(texts, vec!["alpha", "one", "one", "two"]);
    }

    #[test]
    fn test_record_fields_copied_from_every_level() {
        let table = flatten_with_answers(&sample_documents()).unwrap();
        let last = table.get(3).unwrap();
        assert_eq!(last.title, "Alpha");
        assert_eq!(last.context, "alpha two");
        assert_eq!(last.question, "third?");
        assert_eq!(last.answer_start, Some(6));
    }

    #[test]
    fn test_missing_answers_key_is_malformed() {
        let docs = vec![Document::new(
            "Gamma",
            vec![Paragraph::new("c", vec![QuestionBlock::unanswered("g1", "?")])],
        )];
        let err = flatten_with_answers(&docs).unwrap_err();
        match err {
            DatasetError::MalformedInput { path, .. } => {
                assert_eq!(path, "data[0].paragraphs[0].qas[0]")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_without_answers_one_record_per_question() {
        let table = flatten_without_answers(&sample_documents());
        assert_eq!(table.ids(), vec!["a1", "a2", "a3", "b1"]);
        assert!(table.iter().all(|r| !r.has_answer()));
    }
}
