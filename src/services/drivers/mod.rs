//! 드라이버 디렉터리 비즈니스 로직 모듈
//!
//! [`DriverService`](driver_service::DriverService)가 검증, 부분 수정 병합,
//! 페이지 보정, 근처 검색 규칙을 담당하고 영속성은 `DriverRepository`에 위임합니다.

pub mod driver_service;

pub use driver_service::{DriverService, MAX_PAGE_SIZE, NEARBY_RADIUS_KM};
