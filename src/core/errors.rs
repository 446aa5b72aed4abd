//! # Application Error Handling System
//!
//! 드라이버 디렉터리 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 모든 계층(검증, 서비스, 리포지토리)은 `AppError`를 반환하며,
//! HTTP 계층에서는 `actix_web::ResponseError` 구현을 통해 자동으로 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! ### 1. 입력 계층 에러 (400)
//! - `ValidationError`: 필드 단위 검증 실패 (위반 목록 전체를 포함)
//! - `InvalidId`: ObjectId 형식이 아닌 식별자
//! - `InvalidLocation`: 근처 검색 좌표 범위 오류
//! - `InvalidTaxiType`: 근처 검색 택시 종류 오류
//! - `BadRequest`: 파싱할 수 없는 JSON 본문이나 쿼리 문자열
//!
//! ### 2. 비즈니스 계층 에러
//! - `NotFound` (404): 해당 드라이버 없음
//! - `ConflictError` (409): 번호판 중복
//!
//! ### 3. 인프라 계층 에러 (500)
//! - `DatabaseError`: MongoDB 연결, 타임아웃, 디코딩 오류
//! - `InternalError`: 그 밖의 예상하지 못한 오류
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | `error` + `details` 위반 목록 |
//! | `InvalidId` / `InvalidLocation` / `InvalidTaxiType` / `BadRequest` | 400 Bad Request | `error` |
//! | `NotFound` | 404 Not Found | `error` |
//! | `ConflictError` | 409 Conflict | `error` |
//! | `DatabaseError` / `InternalError` | 500 Internal Server Error | 고정 메시지 (내부 정보 비노출) |

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dto::validation::FieldViolation;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`만으로 적절한 HTTP 응답이 만들어지도록 합니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(doc! { "plate": plate }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 위반된 모든 필드를 선언 순서대로 담습니다. 첫 번째 위반만 담지 않습니다.
    #[error("Validation failed: {} field violation(s)", .0.len())]
    ValidationError(Vec<FieldViolation>),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (번호판 유니크 제약 위반)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 저장소가 기대하는 식별자 형식(ObjectId)이 아님
    ///
    /// `NotFound`와 반드시 구분되어야 합니다. 호출자는 이 구분으로 400과 404를 가릅니다.
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// 근처 검색 좌표가 범위를 벗어남
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// 근처 검색 택시 종류가 허용 목록에 없음
    #[error("Invalid taxi type: {0}")]
    InvalidTaxiType(String),

    /// 요청 본문/쿼리 파싱 실패
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 연결 실패, 타임아웃, BSON 디코딩 실패 등 분류되지 않은 저장소 오류입니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 필드 위반으로 검증 에러를 만듭니다.
    pub fn validation(violation: FieldViolation) -> Self {
        AppError::ValidationError(vec![violation])
    }

    /// 클라이언트에게 내부 정보를 노출하면 안 되는 에러인지 확인합니다.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::InternalError(_))
    }

    /// 클라이언트에게 전달할 메시지
    ///
    /// 인프라 계층 에러는 원본 메시지 대신 고정 문구를 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(_) => "Validation failed".to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidId(_)
            | AppError::InvalidLocation(_)
            | AppError::InvalidTaxiType(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Validation failed",
    ///   "code": 400,
    ///   "details": [
    ///     { "field": "first_name", "rule": "length", "params": { "min": 2, "max": 50 }, "message": "..." }
    ///   ]
    /// }
    /// ```
    ///
    /// 5xx 에러는 원본 메시지를 서버 로그에만 남기고 응답에는 고정 문구만 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if self.is_internal() {
            log::error!("❌ 요청 처리 중 내부 오류: {}", self);
        }

        let mut body = serde_json::json!({
            "error": self.public_message(),
            "code": status.as_u16(),
        });

        if let AppError::ValidationError(violations) = self {
            body["details"] = serde_json::json!(violations);
        }

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 인프라 에러에 작업 이름과 식별자를 덧붙이는 확장 trait
///
/// `DatabaseError`/`InternalError`의 메시지 앞에만 컨텍스트를 붙이고,
/// 검증, 조회, 충돌 같은 클라이언트 에러는 그대로 통과시킵니다.
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// self.repository.delete(id).await
///     .with_context(|| format!("delete_driver id={}", id))?;
/// // Database error: delete_driver id=65f1...: connection refused
/// ```
pub trait ErrorContext<T> {
    /// 고정 문자열 컨텍스트를 붙입니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ErrorContext<T> for AppResult<T> {
    fn context(self, msg: &str) -> AppResult<T> {
        self.with_context(|| msg.to_string())
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|error| match error {
            AppError::DatabaseError(message) => {
                AppError::DatabaseError(format!("{}: {}", f(), message))
            }
            AppError::InternalError(message) => {
                AppError::InternalError(format!("{}: {}", f(), message))
            }
            other => other,
        })
    }
}
