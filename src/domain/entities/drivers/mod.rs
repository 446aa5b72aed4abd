//! Drivers Entity Module
//!
//! 드라이버 도메인의 핵심 엔티티와 값 객체를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::drivers::{Driver, Location, NewDriver, TaxiType};
//!
//! let driver = Driver::new(NewDriver {
//!     first_name: "Ahmet".to_string(),
//!     last_name: "Yilmaz".to_string(),
//!     plate: "34ABC123".to_string(),
//!     taxi_type: TaxiType::Sari,
//!     car_brand: "Fiat".to_string(),
//!     car_model: "Egea".to_string(),
//!     location: Location::new(41.0, 29.0)?,
//! });
//! ```

pub mod driver;

pub use driver::{
    now_millis, Driver, DriverPatch, DriverWithDistance, Location, NewDriver, PaginatedDrivers,
    TaxiType,
};
