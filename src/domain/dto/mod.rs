//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 계층과 서비스 계층 사이의 데이터 계약을 정의합니다.
//!
//! ## 모듈 구성
//!
//! - [`validation`] - 필드 단위 위반(`FieldViolation`)과 `validator` 결과 변환
//! - [`drivers`] - 드라이버 요청/응답 DTO
//!
//! ## 검증 흐름
//!
//! ```text
//! JSON ─serde─▶ Request DTO ─validator─▶ Vec<FieldViolation>  (실패)
//!                               │
//!                               └──────▶ NewDriver / DriverPatch / Location  (성공)
//! ```
//!
//! 검증 규칙은 `#[validate(...)]` 속성으로 컴파일 타임에 고정되며, 실행 중에 규칙을 등록하지 않습니다.

pub mod validation;
pub mod drivers;
