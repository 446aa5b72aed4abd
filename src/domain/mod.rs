//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 드라이버 애그리거트와 요청/응답 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 드라이버 애그리거트와 값 객체 (Location, TaxiType)
//! └── DTOs          - 요청 검증/변환, 응답 형태
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 저장소 형식과 무관한 순수 도메인 타입입니다. MongoDB 문서 형태(GeoJSON 위치, BSON 시각)는
//! 리포지토리 계층에서 별도 문서 타입으로 변환합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! 신뢰할 수 없는 입력을 검증된 도메인 값(`NewDriver`, `DriverPatch`, `Location`)으로
//! 변환하거나, 필드 단위 위반 목록으로 거부합니다.

pub mod entities;
pub mod dto;
