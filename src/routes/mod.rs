//! API 라우트 설정 모듈
//!
//! 드라이버 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 서비스 및 MongoDB 상태
//! - `/api/v1/drivers/*` - 드라이버 API ([`crate::handlers::drivers`] 참고)
//!
//! 리터럴 경로(`/nearby`, `/plate/{plate}`)는 `/{id}`보다 먼저 등록해야 합니다.
//! actix-web은 등록 순서대로 매칭하므로 순서가 바뀌면 `nearby`가 ID로 해석됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(driver_service))
//!     .app_data(web::Data::new(database))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::config::Environment;
use crate::core::errors::AppError;
use crate::db::Database;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_driver_routes(cfg);
}

/// 드라이버 라우트를 설정합니다
///
/// JSON 본문과 쿼리 문자열 파싱 실패도 다른 에러와 같은 `{ error, code }` 형식으로 응답합니다.
///
/// ```bash
/// curl -X POST http://localhost:9000/api/v1/drivers \
///   -H "Content-Type: application/json" \
///   -d '{"first_name":"Ahmet","last_name":"Yilmaz","plate":"34 ABC 123","taxi_type":"sari","car_brand":"Fiat","car_model":"Egea","lat":41.0082,"lon":28.9784}'
///
/// curl "http://localhost:9000/api/v1/drivers/nearby?lat=41.0&lon=29.0&taxiType=sari"
/// ```
pub fn configure_driver_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/drivers")
            .app_data(json_config())
            .app_data(query_config())
            .service(handlers::drivers::create_driver)
            .service(handlers::drivers::list_drivers)
            // 리터럴 경로 먼저
            .service(handlers::drivers::find_nearby_drivers)
            .service(handlers::drivers::get_driver_by_plate)
            .service(handlers::drivers::update_driver_location)
            .service(handlers::drivers::get_driver)
            .service(handlers::drivers::update_driver)
            .service(handlers::drivers::delete_driver),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(
        |err: error::QueryPayloadError, _req: &HttpRequest| {
            AppError::BadRequest(err.to_string()).into()
        },
    )
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// MongoDB에 ping을 보내 연결 상태를 함께 보고합니다. ping이 실패하면 503을 반환합니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "taxihub_driver_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "environment": "development",
///   "database": "up"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(database: Option<web::Data<Database>>) -> HttpResponse {
    let database_status = match database {
        Some(database) => match database.ping().await {
            Ok(()) => "up",
            Err(e) => {
                log::warn!("⚠️ 헬스체크 MongoDB ping 실패: {}", e);
                "down"
            }
        },
        None => "not_configured",
    };

    let (mut response, status) = if database_status == "down" {
        (HttpResponse::ServiceUnavailable(), "unhealthy")
    } else {
        (HttpResponse::Ok(), "healthy")
    };

    response.json(json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": Environment::current().as_str(),
        "database": database_status,
    }))
}
