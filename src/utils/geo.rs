//! # 지리 계산 유틸리티
//!
//! 대원 거리(haversine)와 표시용 반올림을 제공합니다.
//! 지구 반지름은 MongoDB 구면 기하(`$geoNear` spherical)와 같은 값을 사용해
//! 인메모리 저장소와 MongoDB 저장소가 같은 거리를 돌려주도록 합니다.

use crate::domain::entities::drivers::Location;

/// 지구 반지름 (km)
pub const EARTH_RADIUS_KM: f64 = 6378.1;

/// 두 위치 사이의 대원 거리 (km)
pub fn haversine_km(from: &Location, to: &Location) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// 소수 첫째 자리 반올림 (`(d * 10).round() / 10`)
///
/// 문자열 포맷을 거치지 않습니다. 0.05처럼 이진 표현이 애매한 값은
/// 부동소수점 오차만큼 어긋날 수 있습니다.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// km → m
pub fn km_to_meters(km: f64) -> f64 {
    km * 1000.0
}

/// m → km
pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}
