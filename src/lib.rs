//! TaxiHub 드라이버 디렉터리 서비스
//!
//! 택시 드라이버 등록, 조회, 부분 수정, 위치 갱신, 삭제와
//! 반경 5km 근처 드라이버 검색을 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **드라이버 관리**: 번호판 유니크 제약을 가진 CRUD
//! - **필드 단위 검증**: 위반된 모든 필드를 한 번에 보고
//! - **근처 검색**: MongoDB `2dsphere` 인덱스 + `$geoNear`, 가까운 순 최대 50명
//! - **생성자 주입**: 전역 레지스트리 없이 `Arc<dyn DriverRepository>`를 서비스에 전달
//! - **MongoDB**: 드라이버 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 요청 기한
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 페이지 보정, 거리 필터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / 인메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use taxihub_driver_service::repositories::drivers::InMemoryDriverRepository;
//! use taxihub_driver_service::services::drivers::DriverService;
//!
//! let service = DriverService::new(Arc::new(InMemoryDriverRepository::new()));
//! let id = service.create_driver(request).await?;
//! let nearby = service.find_nearby_drivers(41.0, 29.0, Some("sari")).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
