use crate::core::catalog::CatalogService;
use crate::domain::model::{Chapter, CourseDetail, CourseSummary, SortKey};
use crate::utils::error::CatalogError;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses/{course_id}", get(get_course))
        .route(
            "/courses/{course_id}/{chapter_ordinal}",
            get(get_chapter).post(rate_chapter),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ListParams {
    domain: Option<String>,
    // Unknown sort keys fail extraction and surface as a 400.
    sort_by: Option<SortKey>,
}

#[derive(Debug, Deserialize)]
struct RateParams {
    rating: i64,
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CourseSummary>>, CatalogError> {
    let courses = state
        .catalog
        .list_courses(params.domain, params.sort_by)
        .await?;
    Ok(Json(courses.into_iter().map(CourseSummary::from).collect()))
}

async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseDetail>, CatalogError> {
    let course = state.catalog.get_course(&course_id).await?;
    Ok(Json(CourseDetail::from(course)))
}

async fn get_chapter(
    State(state): State<AppState>,
    Path((course_id, chapter_ordinal)): Path<(String, u32)>,
) -> Result<Json<Chapter>, CatalogError> {
    let chapter = state
        .catalog
        .get_chapter(&course_id, chapter_ordinal)
        .await?;
    Ok(Json(chapter))
}

async fn rate_chapter(
    State(state): State<AppState>,
    Path((course_id, chapter_ordinal)): Path<(String, u32)>,
    Query(params): Query<RateParams>,
) -> Result<Json<Chapter>, CatalogError> {
    let chapter = state
        .catalog
        .rate_chapter(&course_id, chapter_ordinal, params.rating)
        .await?;
    Ok(Json(chapter))
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            CatalogError::CourseNotFound | CatalogError::ChapterNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            CatalogError::InvalidCourseId { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            _ => {
                // Store and decoding failures are surfaced to the operator,
                // never to the client.
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
