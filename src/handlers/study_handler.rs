use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{GenerateStudyMaterialRequest, PaginationParams, SubmitQuizScoreRequest},
        response::{GenerateStudyMaterialResponse, QuizResultListResponse, QuizResultResponse},
    },
};

#[post("/api/study/generate")]
pub async fn generate_study_material(
    state: web::Data<AppState>,
    request: web::Json<GenerateStudyMaterialRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let material = state
        .study_material_service
        .generate(&request.resource_id, request.kind, request.force_regenerate)
        .await?;

    Ok(HttpResponse::Ok().json(GenerateStudyMaterialResponse {
        cached: material.cached,
        content: material.content,
    }))
}

#[post("/api/study/quiz/score")]
pub async fn submit_quiz_score(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizScoreRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let result = state
        .quiz_score_service
        .submit_score(
            &auth.0.sub,
            &request.resource_id,
            request.score,
            request.total_questions,
        )
        .await?;

    Ok(HttpResponse::Created().json(QuizResultResponse::from(result)))
}

#[get("/api/study/quiz/scores")]
pub async fn list_quiz_scores(
    state: web::Data<AppState>,
    params: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let params = params.into_inner();
    params.validate()?;

    let (results, total) = state
        .quiz_score_service
        .list_user_results(&auth.0.sub, params.offset(), params.limit())
        .await?;

    Ok(HttpResponse::Ok().json(QuizResultListResponse {
        items: results.into_iter().map(QuizResultResponse::from).collect(),
        total,
    }))
}

#[get("/api/health")]
pub async fn health_check(db: web::Data<crate::db::Database>) -> Result<HttpResponse, AppError> {
    db.health_check().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}
