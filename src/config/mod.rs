//! # Configuration Module
//!
//! 드라이버 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 서버, 데이터베이스, 요청 기한, Rate Limiting, CORS 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, Environment, ServerConfig};
//!
//! let env = Environment::current();
//! let database_config = DatabaseConfig::from_env();
//! println!("Server will bind to {}", ServerConfig::bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="9000"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export MONGODB_DATABASE="taxihub"
//!
//! # 요청 기한 (초)
//! export REQUEST_TIMEOUT_SECS="30"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```
//!
//! `PROFILE=dev|prod`이면 `.env.dev` / `.env.prod` 파일을 먼저 읽습니다.

pub mod data_config;

pub use data_config::*;
