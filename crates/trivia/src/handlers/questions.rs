//! Handlers for the `/questions` resource.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fsnd_core::error::CoreError;
use fsnd_core::search::contains_pattern;
use fsnd_core::types::DbId;
use fsnd_db::models::question::CreateQuestion;
use fsnd_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::payload::{QuestionPayload, QuestionRequest};
use crate::query::PageParams;
use crate::response::{category_map, IdResponse, QuestionsResponse, ALL_CATEGORIES_LABEL};
use crate::state::AppState;

/// GET /questions?page=N
///
/// An empty page is a 404, so clients can detect the end of the listing.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<QuestionsResponse>> {
    let page = params.page()?;

    let questions = QuestionRepo::list_page(&state.pool, page.limit(), page.offset()).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "page {} is beyond the last page",
            page.number()
        )));
    }
    let total_questions = QuestionRepo::count(&state.pool).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: ALL_CATEGORIES_LABEL.into(),
        categories: Some(category_map(categories)),
    }))
}

/// POST /questions
///
/// Searches when the body has a `searchTerm` key, creates otherwise.
pub async fn create_or_search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(payload): AppJson<QuestionPayload>,
) -> AppResult<Response> {
    match payload.into_request()? {
        QuestionRequest::Search(term) => Ok(search(&state, &term, &params).await?.into_response()),
        QuestionRequest::Create(input) => Ok(create(&state, &input).await?.into_response()),
    }
}

async fn search(
    state: &AppState,
    term: &str,
    params: &PageParams,
) -> AppResult<Json<QuestionsResponse>> {
    let page = params.page()?;
    let pattern = contains_pattern(term);

    let questions =
        QuestionRepo::search_page(&state.pool, &pattern, page.limit(), page.offset()).await?;
    let total_questions = QuestionRepo::count_search(&state.pool, &pattern).await?;
    tracing::debug!(term, total_questions, "Question search");

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: ALL_CATEGORIES_LABEL.into(),
        categories: None,
    }))
}

async fn create(state: &AppState, input: &CreateQuestion) -> AppResult<Json<IdResponse>> {
    let question = QuestionRepo::create(&state.pool, input)
        .await
        .map_err(AppError::Unprocessable)?;
    tracing::info!(question_id = question.id, category = question.category, "Question created");
    Ok(Json(IdResponse {
        success: true,
        id: question.id,
    }))
}

/// DELETE /questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<IdResponse>> {
    QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    let deleted = QuestionRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::Unprocessable)?;
    if !deleted {
        // Removed by a concurrent request between the lookup and the delete.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }

    tracing::info!(question_id = id, "Question deleted");
    Ok(Json(IdResponse { success: true, id }))
}
