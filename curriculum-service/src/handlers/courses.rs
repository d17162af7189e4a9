use crate::dtos::CourseSummary;
use crate::models::CourseYear;
use crate::startup::AppState;
use axum::{extract::State, Json};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use service_core::error::AppError;

/// Year-level labels recognized by the published-curriculum lookup.
const YEAR_LEVELS: [&str; 4] = ["1st Year", "2nd Year", "3rd Year", "4th Year"];

/// GET /backend-courses: every year document, sorted by the top-level
/// `description` field ascending.
///
/// `description` only exists on the embedded entries, never on the year
/// document itself, so the store compares a missing key for every document
/// and hands the collection back in natural order. The sort key is kept
/// as-is because existing consumers depend on this route's historical
/// contract; see DESIGN.md.
pub async fn list_backend_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseYear>>, AppError> {
    let options = FindOptions::builder()
        .sort(doc! { "description": 1 })
        .build();

    let mut cursor = state
        .db
        .courses()
        .find(doc! {}, options)
        .await
        .map_err(AppError::from)?;

    let mut years = Vec::new();
    while let Some(year) = cursor.try_next().await.map_err(AppError::from)? {
        years.push(year);
    }

    tracing::info!(count = years.len(), "listed backend courses");
    Ok(Json(years))
}

/// GET /courses: one `{name, specialization}` record per course entry,
/// across every year document, in document order then entry order.
pub async fn list_course_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseSummary>>, AppError> {
    let mut cursor = state
        .db
        .courses()
        .find(doc! {}, None)
        .await
        .map_err(AppError::from)?;

    let mut years = Vec::new();
    while let Some(year) = cursor.try_next().await.map_err(AppError::from)? {
        years.push(year);
    }

    let summaries = CourseSummary::flatten(&years);
    tracing::info!(count = summaries.len(), "listed course summaries");
    Ok(Json(summaries))
}

/// GET /bsis-bsit-courses: year documents carrying at least one of the four
/// year-level labels as a document field, unmodified, in store order.
pub async fn list_year_level_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseYear>>, AppError> {
    let clauses: Vec<Document> = YEAR_LEVELS
        .iter()
        .map(|label| {
            let mut clause = Document::new();
            clause.insert(*label, doc! { "$exists": true });
            clause
        })
        .collect();

    let mut cursor = state
        .db
        .courses()
        .find(doc! { "$or": clauses }, None)
        .await
        .map_err(AppError::from)?;

    let mut years = Vec::new();
    while let Some(year) = cursor.try_next().await.map_err(AppError::from)? {
        years.push(year);
    }

    tracing::info!(count = years.len(), "listed year-level courses");
    Ok(Json(years))
}
