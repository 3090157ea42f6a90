//! Request bodies accepted by the trivia endpoints.
//!
//! Clients are loose about types: `difficulty` and `category` arrive as
//! either JSON numbers or numeric strings, and blank strings stand in for
//! missing values.

use fsnd_core::error::CoreError;
use fsnd_core::listing::non_blank;
use fsnd_core::quiz::ALL_CATEGORIES;
use fsnd_core::types::DbId;
use fsnd_db::models::question::CreateQuestion;
use serde::{Deserialize, Deserializer};

/// Body of `POST /questions`.
///
/// The presence of the `searchTerm` key selects search mode; otherwise the
/// body describes a question to create.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionPayload {
    #[serde(rename = "searchTerm", default, deserialize_with = "present_string")]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub category: Option<i64>,
}

/// What a `POST /questions` body asks for.
#[derive(Debug)]
pub enum QuestionRequest {
    Search(String),
    Create(CreateQuestion),
}

impl QuestionPayload {
    /// Decide between search and create, validating the create fields.
    pub fn into_request(self) -> Result<QuestionRequest, CoreError> {
        if let Some(term) = self.search_term {
            return Ok(QuestionRequest::Search(term));
        }

        let question = required_text("question", self.question.as_deref())?;
        let answer = required_text("answer", self.answer.as_deref())?;
        let difficulty = self
            .difficulty
            .ok_or_else(|| missing("difficulty"))
            .and_then(|d| {
                i32::try_from(d).map_err(|_| {
                    CoreError::Validation(format!("difficulty {d} is out of range"))
                })
            })?;
        let category = self.category.ok_or_else(|| missing("category"))?;

        Ok(QuestionRequest::Create(CreateQuestion {
            question,
            answer,
            category,
            difficulty,
        }))
    }
}

/// Body of `POST /quizzes`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizPayload {
    #[serde(default)]
    pub previous_questions: Option<Vec<DbId>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The category the player picked. The client also sends a `type` label,
/// which is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "flexible_int")]
    pub id: Option<i64>,
}

impl QuizPayload {
    pub fn previous_questions(&self) -> &[DbId] {
        self.previous_questions.as_deref().unwrap_or_default()
    }

    /// Selected category id, [`ALL_CATEGORIES`] when absent.
    pub fn category_id(&self) -> DbId {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.id)
            .unwrap_or(ALL_CATEGORIES)
    }
}

fn missing(field: &str) -> CoreError {
    CoreError::Validation(format!("{field} is required"))
}

fn required_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    non_blank(value).ok_or_else(|| missing(field))
}

/// Maps a present key to `Some`, even when its value is `null`.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(Some(value.unwrap_or_default()))
}

/// Accepts `3`, `"3"`, `null` and `""`.
fn flexible_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(n)) => Ok(Some(n)),
        Some(IntOrString::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{s}' is not an integer"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> QuestionPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn search_term_key_selects_search_even_when_empty() {
        let request = payload(json!({ "searchTerm": "" })).into_request().unwrap();
        assert_matches!(request, QuestionRequest::Search(term) if term.is_empty());

        let request = payload(json!({ "searchTerm": null })).into_request().unwrap();
        assert_matches!(request, QuestionRequest::Search(_));
    }

    #[test]
    fn create_accepts_numeric_strings() {
        let request = payload(json!({
            "question": "Q1",
            "answer": "A1",
            "difficulty": "2",
            "category": 1,
        }))
        .into_request()
        .unwrap();

        assert_matches!(
            request,
            QuestionRequest::Create(CreateQuestion { difficulty: 2, category: 1, .. })
        );
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let err = payload(json!({
            "question": "  ",
            "answer": "A1",
            "difficulty": 1,
            "category": 1,
        }))
        .into_request()
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("question"));

        let err = payload(json!({
            "question": "Q",
            "answer": "A",
            "difficulty": "",
            "category": 1,
        }))
        .into_request()
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("difficulty"));
    }

    #[test]
    fn non_numeric_string_fails_to_deserialize() {
        let result = serde_json::from_value::<QuestionPayload>(json!({ "category": "art" }));
        assert!(result.is_err());
    }

    #[test]
    fn quiz_defaults_to_all_categories() {
        let quiz: QuizPayload = serde_json::from_value(json!({})).unwrap();
        assert_eq!(quiz.category_id(), ALL_CATEGORIES);
        assert!(quiz.previous_questions().is_empty());

        let quiz: QuizPayload = serde_json::from_value(json!({
            "previous_questions": [4, 9],
            "quiz_category": { "type": "Art", "id": "2" },
        }))
        .unwrap();
        assert_eq!(quiz.category_id(), 2);
        assert_eq!(quiz.previous_questions(), &[4, 9]);
    }
}
