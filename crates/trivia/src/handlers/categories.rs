//! Handlers for `/categories` and per-category question listings.

use axum::extract::State;
use axum::Json;
use fsnd_core::error::CoreError;
use fsnd_core::types::DbId;
use fsnd_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::{category_map, CategoriesResponse, QuestionsResponse};
use crate::state::AppState;

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CategoriesResponse>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions?page=N
pub async fn questions(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<QuestionsResponse>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    let page = params.page()?;

    let questions =
        QuestionRepo::list_by_category_page(&state.pool, id, page.limit(), page.offset()).await?;
    let total_questions = QuestionRepo::count_by_category(&state.pool, id).await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category.kind,
        categories: None,
    }))
}
