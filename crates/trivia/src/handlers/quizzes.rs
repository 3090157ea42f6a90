//! Handler for quiz play.

use axum::extract::State;
use axum::Json;
use fsnd_core::error::CoreError;
use fsnd_core::quiz::{category_filter, pick_next};
use fsnd_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::payload::QuizPayload;
use crate::response::QuizResponse;
use crate::state::AppState;

/// POST /quizzes
///
/// Returns one question from the chosen category (or all categories) that
/// is not in `previous_questions`, or `null` when none remain.
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuizPayload>,
) -> AppResult<Json<QuizResponse>> {
    let category = category_filter(payload.category_id());
    if let Some(id) = category {
        CategoryRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Category",
                id,
            }))?;
    }

    let previous = payload.previous_questions();
    let candidates = QuestionRepo::quiz_candidate_ids(&state.pool, category, previous).await?;
    let picked = pick_next(
        &candidates,
        previous,
        state.config.quiz_selection,
        &mut rand::rng(),
    );

    let question = match picked {
        Some(id) => QuestionRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };
    tracing::debug!(
        ?category,
        asked = previous.len(),
        remaining = candidates.len(),
        question_id = ?question.as_ref().map(|q| q.id),
        "Quiz question picked"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
