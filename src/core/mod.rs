//! # Core Module
//!
//! 서비스 전 계층이 공유하는 핵심 타입을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 검증, 조회, 충돌, 인프라 오류를 포괄하는 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//! - **자동 변환**: `thiserror` 기반 에러 메시지 관리
//!
//! ## 의존성 주입
//!
//! 전역 서비스 로케이터를 두지 않습니다. 데이터베이스 핸들은 부트스트랩(`main.rs`)에서
//! 한 번 생성되어 리포지토리 생성자로, 리포지토리는 다시 서비스 생성자로 전달됩니다.
//!
//! ```rust,ignore
//! let database = Database::new(&DatabaseConfig::from_env()).await?;
//! let repository: Arc<dyn DriverRepository> = Arc::new(MongoDriverRepository::new(&database));
//! let service = DriverService::new(repository);
//! ```

pub mod errors;
