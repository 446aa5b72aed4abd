//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `DriverRepository` trait 뒤에 MongoDB 구현과 테스트용 인메모리 구현을 둡니다.
//! 서비스는 `Arc<dyn DriverRepository>`만 알고 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::drivers::{DriverRepository, MongoDriverRepository};
//!
//! let repository = MongoDriverRepository::new(&database);
//! repository.ensure_indexes().await?;
//! let driver = repository.find_by_plate("34ABC123").await?;
//! ```

pub mod drivers;
