//! # 드라이버 응답 DTO 모듈
//!
//! 서버 → 클라이언트 응답 구조를 정의합니다.

pub mod driver_response;

pub use driver_response::*;
