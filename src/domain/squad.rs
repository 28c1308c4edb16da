// ============================================================
// Layer 3 — SQuAD Domain Types
// ============================================================
// The nested shape of a SQuAD-style dataset file:
//
//   { "data": [ Document ] }
//     Document      → title + paragraphs
//       Paragraph   → context + qas
//         QuestionBlock → id + question + answers
//           Answer  → text + answer_start
//
// These structs mirror the JSON one-to-one so serde can
// report exactly which key is missing when a file is malformed.
//
// Reference: Rust Book §5 (Structs)
//            serde documentation (derive, field attributes)

use serde::Deserialize;

/// Top-level wrapper: the whole file is `{ "data": [...] }`.
/// Extra keys such as `version` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SquadFile {
    pub data: Vec<Document>,
}

/// One source document (usually one Wikipedia article).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    /// Groups records for the validation split
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paragraph {
    /// The passage every answer offset points into
    pub context: String,
    pub qas: Vec<QuestionBlock>,
}

/// A question and its annotated answers.
///
/// `answers` is optional because inference-only datasets omit
/// it. Loading with answers treats its absence as malformed input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionBlock {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub answers: Option<Vec<Answer>>,
}

/// An answer span. `answer_start` is a character offset into
/// the paragraph context, not a byte offset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Answer {
    pub text: String,
    pub answer_start: usize,
}

// ─── Question-only view ──────────────────────────────────────────────────────
// Inference files are read through this narrower schema. It has
// no answer level at all, so whatever sits under `answers` is
// skipped unread.

/// `{ "data": [...] }` read without answers
#[derive(Debug, Deserialize)]
pub struct QuestionsFile {
    pub data: Vec<QuestionsDocument>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsDocument {
    pub title: String,
    pub paragraphs: Vec<QuestionsParagraph>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsParagraph {
    pub context: String,
    pub qas: Vec<QuestionOnly>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionOnly {
    pub id: String,
    pub question: String,
}

impl QuestionsFile {
    /// Convert into documents whose questions carry no answers
    pub fn into_documents(self) -> Vec<Document> {
        self.data
            .into_iter()
            .map(|doc| Document {
                title: doc.title,
                paragraphs: doc
                    .paragraphs
                    .into_iter()
                    .map(|p| Paragraph {
                        context: p.context,
                        qas: p
                            .qas
                            .into_iter()
                            .map(|q| QuestionBlock::unanswered(q.id, q.question))
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Document {
    pub fn new(title: impl Into<String>, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            title: title.into(),
            paragraphs,
        }
    }
}

impl Paragraph {
    pub fn new(context: impl Into<String>, qas: Vec<QuestionBlock>) -> Self {
        Self {
            context: context.into(),
            qas,
        }
    }
}

impl QuestionBlock {
    /// A question with annotated answers
    pub fn new(id: impl Into<String>, question: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answers: Some(answers),
        }
    }

    /// A question from an inference-only dataset
    pub fn unanswered(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answers: None,
        }
    }
}

impl Answer {
    pub fn new(text: impl Into<String>, answer_start: usize) -> Self {
        Self {
            text: text.into(),
            answer_start,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_key_is_optional() {
        let json = r#"{"id": "q1", "question": "Who?"}"#;
        let q: QuestionBlock = serde_json::from_str(json).unwrap();
        assert!(q.answers.is_none());
    }

    #[test]
    fn test_missing_context_is_rejected() {
        let json = r#"{"qas": []}"#;
        let err = serde_json::from_str::<Paragraph>(json).unwrap_err();
        assert!(err.to_string().contains("context"));
    }

    #[test]
    fn test_question_view_skips_answers() {
        let json = r#"{"data": [{"title": "T", "paragraphs": [{"context": "c", "qas": [
            {"id": "1", "question": "q", "answers": [{"text": "c"}]},
            {"id": "2", "question": "q", "answers": [{"text": "c", "answer_start": -1}]}
        ]}]}]}"#;
        let file: QuestionsFile = serde_json::from_str(json).unwrap();
        let docs = file.into_documents();
        let qas = &docs[0].paragraphs[0].qas;
        assert_eq!(qas.len(), 2);
        assert!(qas.iter().all(|q| q.answers.is_none()));
    }

    #[test]
    fn test_extra_top_level_keys_ignored() {
        let json = r#"{"version": "1.1", "data": []}"#;
        let file: SquadFile = serde_json::from_str(json).unwrap();
        assert!(file.data.is_empty());
    }
}
