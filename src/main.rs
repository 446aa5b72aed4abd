//! TaxiHub 드라이버 디렉터리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결과 인덱스를 준비한 뒤 드라이버 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use taxihub_driver_service::config::{
    CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig,
};
use taxihub_driver_service::db::Database;
use taxihub_driver_service::repositories::drivers::{DriverRepository, MongoDriverRepository};
use taxihub_driver_service::routes::configure_all_routes;
use taxihub_driver_service::services::drivers::DriverService;
use taxihub_driver_service::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_start, print_sub_task,
};

const BOOT_STEPS: u8 = 3;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("🚕 TaxiHub Driver Service");
    info!("🚀 TaxiHub 드라이버 서비스 시작중...");

    let (database, driver_service) = initialize_services().await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(database, driver_service).await
}

/// MongoDB 연결, 인덱스 생성, 서비스 조립을 수행합니다.
///
/// 연결이나 인덱스 생성에 실패하면 서버를 띄우지 않습니다.
async fn initialize_services(
) -> Result<(Database, DriverService), taxihub_driver_service::core::errors::AppError> {
    print_step_start(1, BOOT_STEPS, "Connecting to MongoDB");
    info!("📡 데이터베이스 연결 중...");

    let database_config = DatabaseConfig::from_env();
    let database = Database::new(&database_config).await?;
    print_sub_task("database", database.database_name());

    print_step_start(2, BOOT_STEPS, "Ensuring driver indexes");
    let repository = Arc::new(MongoDriverRepository::new(&database));
    repository.ensure_indexes().await?;
    print_sub_task("drivers", "plate_unique, location_2dsphere, created_at_desc, taxi_type");

    print_step_start(3, BOOT_STEPS, "Wiring services");
    let driver_service = DriverService::new(repository);
    print_sub_task("DriverService", "OK");

    Ok((database, driver_service))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    database: Database,
    driver_service: DriverService,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    print_startup_summary(
        &bind_address,
        Environment::current().as_str(),
        database.database_name(),
    );
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    if allowed_origins.is_empty() {
        info!("🌍 CORS: 모든 Origin 허용");
    } else {
        info!("🌍 CORS 허용 Origin: {:?}", allowed_origins);
    }

    let database = web::Data::new(database);
    let driver_service = web::Data::new(driver_service);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(driver_service.clone())
            .app_data(database.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `info,actix_web=info`를 사용합니다.
///
/// ```bash
/// RUST_LOG=taxihub_driver_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 허용 목록이 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
