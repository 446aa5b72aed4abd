//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 리포지토리를 받습니다. 전역 싱글톤이나 서비스 로케이터는 없습니다.
//!
//! # Features
//!
//! - 드라이버 생명주기 관리 (등록, 조회, 수정, 위치 갱신, 삭제)
//! - 페이지 파라미터 보정
//! - 반경 5km 근처 검색과 거리 정렬
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::drivers::DriverService;
//!
//! let service = DriverService::new(repository);
//! let driver = service.get_driver_by_plate("34 ABC 123").await?;
//! ```

pub mod drivers;
