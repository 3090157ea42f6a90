pub mod health;

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{categories, questions, quizzes};
use crate::state::AppState;

/// Build the trivia route tree.
///
/// ```text
/// GET    /categories                  -> categories::list
/// GET    /categories/{id}/questions   -> categories::questions
/// GET    /questions                   -> questions::list
/// POST   /questions                   -> questions::create_or_search
/// DELETE /questions/{id}              -> questions::delete
/// POST   /quizzes                     -> quizzes::next_question
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list))
        .route("/categories/{id}/questions", get(categories::questions))
        .route(
            "/questions",
            get(questions::list).post(questions::create_or_search),
        )
        .route("/questions/{id}", delete(questions::delete))
        .route("/quizzes", axum::routing::post(quizzes::next_question))
}
