//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 번호판 정규화 등 문자열 처리
//! - [`geo`] - 대원 거리 계산과 표시용 반올림
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::geo::haversine_km;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let km = haversine_km(&from, &to);
//! print_boxed_title("TaxiHub Driver Service");
//! ```

pub mod string_utils;
pub mod geo;
pub mod display_terminal;
