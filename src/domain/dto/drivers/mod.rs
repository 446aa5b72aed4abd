//! # Driver Data Transfer Objects Module
//!
//! 드라이버 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! drivers/
//! ├── request/                 # 클라이언트 → 서버
//! │   ├── create_driver.rs     # 등록
//! │   ├── update_driver.rs     # 부분 수정
//! │   ├── update_location.rs   # 위치 갱신
//! │   └── queries.rs           # 목록/근처 검색 쿼리
//! └── response/                # 서버 → 클라이언트
//!     └── driver_response.rs
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
