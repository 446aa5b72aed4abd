//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 요청 기한, Rate Limiting, CORS 설정을 환경 변수에서 읽습니다.
//! 값을 해석할 수 없으면 에러 로그를 남기고 기본값을 사용합니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::error;

/// 환경 변수를 읽어 파싱합니다. 없거나 해석할 수 없으면 `default`.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    parse_or(key, env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값 9000)
    pub fn port() -> u16 {
        env_or("PORT", 9000)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값 "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port`
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
///
/// # Environment Variables
///
/// | 변수 | 기본값 |
/// |------|--------|
/// | `MONGODB_URI` | `mongodb://localhost:27017` |
/// | `MONGODB_DATABASE` | `taxihub` |
/// | `MONGODB_MAX_POOL_SIZE` | `10` |
/// | `MONGODB_MIN_POOL_SIZE` | `5` |
/// | `MONGODB_MAX_IDLE_SECS` | `30` |
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub max_idle_time: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database_name: "taxihub".to_string(),
            max_pool_size: 10,
            min_pool_size: 5,
            max_idle_time: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_pool_size = env_or("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size).max(1);
        let min_pool_size = env_or("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size).min(max_pool_size);

        Self {
            uri: env::var("MONGODB_URI").unwrap_or(defaults.uri),
            database_name: env::var("MONGODB_DATABASE").unwrap_or(defaults.database_name),
            max_pool_size,
            min_pool_size,
            max_idle_time: Duration::from_secs(env_or(
                "MONGODB_MAX_IDLE_SECS",
                defaults.max_idle_time.as_secs(),
            )),
        }
    }
}

/// 요청 처리 기한
pub struct RequestConfig;

impl RequestConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// 서비스 호출 하나에 허용되는 최대 시간 (`REQUEST_TIMEOUT_SECS`, 기본값 30초)
    pub fn timeout() -> Duration {
        Duration::from_secs(env_or("REQUEST_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS).max(1))
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100u64).max(1),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200u32).max(1),
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분, 기본값 `*`)
    ///
    /// 빈 목록은 모든 Origin 허용을 뜻합니다.
    pub fn allowed_origins() -> Vec<String> {
        parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()))
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|origin| origin == "*") {
        Vec::new()
    } else {
        origins
    }
}
