//! # 드라이버 응답 DTO
//!
//! 도메인 엔티티를 API 응답 JSON으로 바꿉니다. 시각은 RFC 3339 문자열로 내보냅니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::drivers::{
    Driver, DriverWithDistance, Location, PaginatedDrivers, TaxiType,
};

/// 응답용 위치
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationResponse {
    pub lat: f64,
    pub lon: f64,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            lat: location.lat,
            lon: location.lon,
        }
    }
}

/// 드라이버 응답 DTO
///
/// ```json
/// {
///   "id": "65f1c0d2a4b3e1f2c3d4e5f6",
///   "first_name": "Ahmet",
///   "last_name": "Yilmaz",
///   "plate": "34ABC123",
///   "taxi_type": "sari",
///   "car_brand": "Fiat",
///   "car_model": "Egea",
///   "location": { "lat": 41.0, "lon": 29.0 },
///   "created_at": "2024-03-13T10:00:00.123Z",
///   "updated_at": "2024-03-13T10:00:00.123Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub plate: String,
    pub taxi_type: TaxiType,
    pub car_brand: String,
    pub car_model: String,
    pub location: LocationResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        let Driver {
            id,
            first_name,
            last_name,
            plate,
            taxi_type,
            car_brand,
            car_model,
            location,
            created_at,
            updated_at,
        } = driver;

        Self {
            id: id.to_hex(),
            first_name,
            last_name,
            plate,
            taxi_type,
            car_brand,
            car_model,
            location: location.into(),
            created_at,
            updated_at,
        }
    }
}

/// 근처 검색 결과 항목 (시각 필드 없음, 거리는 소수 첫째 자리까지)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverWithDistanceResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub plate: String,
    pub taxi_type: TaxiType,
    pub car_brand: String,
    pub car_model: String,
    pub location: LocationResponse,
    pub distance_km: f64,
}

impl From<DriverWithDistance> for DriverWithDistanceResponse {
    fn from(found: DriverWithDistance) -> Self {
        let distance_km = found.display_distance_km();
        let driver = found.driver;

        Self {
            id: driver.id.to_hex(),
            first_name: driver.first_name,
            last_name: driver.last_name,
            plate: driver.plate,
            taxi_type: driver.taxi_type,
            car_brand: driver.car_brand,
            car_model: driver.car_model,
            location: driver.location.into(),
            distance_km,
        }
    }
}

/// 페이지 단위 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDriversResponse {
    pub drivers: Vec<DriverResponse>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl From<PaginatedDrivers> for ListDriversResponse {
    fn from(page: PaginatedDrivers) -> Self {
        Self {
            drivers: page.drivers.into_iter().map(DriverResponse::from).collect(),
            total_count: page.total_count,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

/// 근처 검색 응답: 결과와 검색 지점
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyDriversResponse {
    pub drivers: Vec<DriverWithDistanceResponse>,
    pub location: LocationResponse,
}

/// 생성 응답 (`201 Created`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDriverResponse {
    pub id: String,
}

/// 단순 메시지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
