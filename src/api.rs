// HTTP JSON API over the calculation engine. Payload leaf values are
// strings, matching what an HTML form submits, so every request goes through
// the same validation path as the other front ends.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::core::engine::GradeEngine;
use crate::core::scale::GRADE_POINTS;
use crate::domain::model::{SemesterEntry, SubjectEntry};
use crate::utils::error::GpaError;

#[derive(Debug, Clone, Deserialize)]
pub struct GpaRequest {
    #[serde(default)]
    pub student: String,

    /// Declared subject count; when present, exactly that many entries are
    /// consumed and extras are ignored.
    #[serde(default)]
    pub num_subjects: Option<String>,

    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CgpaRequest {
    #[serde(default)]
    pub num_semesters: Option<String>,

    #[serde(default)]
    pub semesters: Vec<SemesterEntry>,
}

/// Exactly one of `result` / `error` is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcResponse {
    pub result: Option<f64>,
    pub error: Option<String>,
}

impl CalcResponse {
    fn ok(value: f64) -> Self {
        Self {
            result: Some(value),
            error: None,
        }
    }

    fn rejected(error: &GpaError) -> Self {
        Self {
            result: None,
            error: Some(error.to_string()),
        }
    }
}

fn error_status(error: &GpaError) -> StatusCode {
    if error.is_validation() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub fn create_router() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/scale", get(get_scale))
        .route("/v1/gpa", post(post_gpa))
        .route("/v1/cgpa", post(post_cgpa))
}

pub async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

pub async fn get_scale() -> Json<Vec<(String, f64)>> {
    Json(
        GRADE_POINTS
            .iter()
            .map(|(grade, points)| (grade.to_string(), *points))
            .collect(),
    )
}

pub async fn post_gpa(Json(request): Json<GpaRequest>) -> (StatusCode, Json<CalcResponse>) {
    let engine = GradeEngine::new();
    match engine.gpa(
        &request.student,
        request.num_subjects.as_deref(),
        &request.subjects,
    ) {
        Ok(value) => (StatusCode::OK, Json(CalcResponse::ok(value))),
        Err(e) => {
            tracing::debug!("GPA request rejected: {e}");
            (error_status(&e), Json(CalcResponse::rejected(&e)))
        }
    }
}

pub async fn post_cgpa(Json(request): Json<CgpaRequest>) -> (StatusCode, Json<CalcResponse>) {
    let engine = GradeEngine::new();
    match engine.cgpa(request.num_semesters.as_deref(), &request.semesters) {
        Ok(value) => (StatusCode::OK, Json(CalcResponse::ok(value))),
        Err(e) => {
            tracing::debug!("CGPA request rejected: {e}");
            (error_status(&e), Json(CalcResponse::rejected(&e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(grade: &str, credit: &str) -> SubjectEntry {
        SubjectEntry {
            grade: grade.to_string(),
            credit: credit.to_string(),
        }
    }

    #[tokio::test]
    async fn test_post_gpa_ok() {
        let request = GpaRequest {
            student: "Ada".to_string(),
            num_subjects: Some("2".to_string()),
            subjects: vec![subject("A", "3"), subject("B", "3")],
        };

        let (status, Json(response)) = post_gpa(Json(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.result, Some(3.5));
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_post_gpa_validation_failure() {
        let request = GpaRequest {
            student: String::new(),
            num_subjects: None,
            subjects: vec![subject("A", "-3")],
        };

        let (status, Json(response)) = post_gpa(Json(request)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.result.is_none());
        assert_eq!(response.error.as_deref(), Some("Credit 1 must be positive"));
    }

    #[tokio::test]
    async fn test_post_gpa_missing_entry() {
        let request = GpaRequest {
            student: String::new(),
            num_subjects: Some("3".to_string()),
            subjects: vec![subject("A", "3")],
        };

        let (status, Json(response)) = post_gpa(Json(request)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.as_deref(), Some("Grade 2 is missing"));
    }

    #[tokio::test]
    async fn test_post_cgpa_ok() {
        let request = CgpaRequest {
            num_semesters: None,
            semesters: vec![
                SemesterEntry {
                    gpa: "3.5".to_string(),
                    credits: "15".to_string(),
                },
                SemesterEntry {
                    gpa: "3.8".to_string(),
                    credits: "12".to_string(),
                },
            ],
        };

        let (status, Json(response)) = post_cgpa(Json(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.result, Some(3.63));
    }

    #[tokio::test]
    async fn test_post_cgpa_out_of_range() {
        let request = CgpaRequest {
            num_semesters: None,
            semesters: vec![SemesterEntry {
                gpa: "4.5".to_string(),
                credits: "15".to_string(),
            }],
        };

        let (status, Json(response)) = post_cgpa(Json(request)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.error.as_deref(),
            Some("GPA 1 must be between 0 and 4")
        );
    }

    #[tokio::test]
    async fn test_healthz() {
        let Json(body) = healthz().await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_get_scale_lists_the_table() {
        let Json(table) = get_scale().await;
        assert_eq!(table.len(), 10);
        assert_eq!(table[0], ("A+".to_string(), 4.0));
    }
}
