//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! ## 엔티티 설계 원칙
//!
//! - **식별성**: 드라이버는 생성 시 할당된 ObjectId로 식별되며, 이 값은 바뀌지 않습니다.
//! - **값 객체**: `Location`은 불변이며 항상 통째로 교체됩니다.
//! - **닫힌 열거형**: `TaxiType`은 `sari`, `turkuaz`, `siyah` 외의 값을 표현할 수 없습니다.

pub mod drivers;

pub use drivers::*;
