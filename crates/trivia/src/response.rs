//! Response bodies for the trivia endpoints.
//!
//! Every success body carries `"success": true`; error bodies are produced
//! by [`crate::error::AppError`].

use std::collections::BTreeMap;

use fsnd_core::types::DbId;
use fsnd_db::models::category::Category;
use fsnd_db::models::question::Question;
use serde::Serialize;

/// Label used for `current_category` when no category filter applies.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Category id to type, serialized as a JSON object keyed by id.
pub type CategoryMap = BTreeMap<DbId, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// `GET /categories`
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// A page of questions, shared by listing, search and category filtering.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: String,
    /// Only the unfiltered listing includes the category map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
}

/// `{ "success": true, "id": N }` for create and delete.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub success: bool,
    pub id: DbId,
}

/// `POST /quizzes`. `question` is `null` once the scope is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_map_serializes_with_string_keys() {
        let map = category_map(vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ]);
        let body = serde_json::to_value(CategoriesResponse { success: true, categories: map })
            .unwrap();
        assert_eq!(
            body,
            json!({ "success": true, "categories": { "1": "Science", "2": "Art" } })
        );
    }

    #[test]
    fn filtered_page_omits_categories() {
        let body = serde_json::to_value(QuestionsResponse {
            success: true,
            questions: vec![],
            total_questions: 0,
            current_category: ALL_CATEGORIES_LABEL.into(),
            categories: None,
        })
        .unwrap();
        assert!(body.get("categories").is_none());
    }

    #[test]
    fn exhausted_quiz_serializes_null_question() {
        let body = serde_json::to_value(QuizResponse { success: true, question: None }).unwrap();
        assert_eq!(body["question"], serde_json::Value::Null);
    }
}
