//! Driver Entity Implementation
//!
//! 택시 드라이버 애그리거트와 값 객체(위치, 택시 종류)를 정의합니다.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 허용되는 택시 종류 (닫힌 집합)
///
/// - `sari`: 노란 택시 (일반)
/// - `turkuaz`: 청록 택시 (중간 등급)
/// - `siyah`: 검은 택시 (고급)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxiType {
    Sari,
    Turkuaz,
    Siyah,
}

impl TaxiType {
    /// 모든 허용 값 (검증 메시지와 파라미터에 사용)
    pub const ALL: [TaxiType; 3] = [TaxiType::Sari, TaxiType::Turkuaz, TaxiType::Siyah];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxiType::Sari => "sari",
            TaxiType::Turkuaz => "turkuaz",
            TaxiType::Siyah => "siyah",
        }
    }

    /// 허용 값을 공백으로 구분한 문자열 (`"sari turkuaz siyah"`)
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(TaxiType::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TaxiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxiType {
    type Err = String;

    /// 대소문자를 구분합니다. `"Sari"`는 허용되지 않습니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sari" => Ok(TaxiType::Sari),
            "turkuaz" => Ok(TaxiType::Turkuaz),
            "siyah" => Ok(TaxiType::Siyah),
            other => Err(format!(
                "{} (must be one of: {})",
                other,
                Self::allowed_values().replace(' ', ", ")
            )),
        }
    }
}

/// 위치 값 객체
///
/// 한 번 생성되면 변경되지 않으며, 위치 변경은 항상 새 값으로 통째로 교체합니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const MIN_LAT: f64 = -90.0;
    pub const MAX_LAT: f64 = 90.0;
    pub const MIN_LON: f64 = -180.0;
    pub const MAX_LON: f64 = 180.0;

    /// 범위를 검사한 뒤 위치를 생성합니다.
    ///
    /// 범위를 벗어나거나 유한하지 않은 값이면 어느 좌표가 잘못됐는지 설명하는 메시지를 반환합니다.
    pub fn new(lat: f64, lon: f64) -> Result<Self, String> {
        if !lat.is_finite() || !(Self::MIN_LAT..=Self::MAX_LAT).contains(&lat) {
            return Err(format!("latitude {} must be between -90 and 90", lat));
        }
        if !lon.is_finite() || !(Self::MIN_LON..=Self::MAX_LON).contains(&lon) {
            return Err(format!("longitude {} must be between -180 and 180", lon));
        }
        Ok(Self { lat, lon })
    }
}

/// 드라이버 엔티티
///
/// 식별자와 생성 시각은 생성 이후 절대 바뀌지 않습니다.
/// 번호판 유니크 제약은 저장소 경계(유니크 인덱스)에서 보장됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    /// 공백이 제거된 번호판 (unique)
    pub plate: String,
    pub taxi_type: TaxiType,
    pub car_brand: String,
    pub car_model: String,
    pub location: Location,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 검증을 통과한 생성 요청 값
///
/// 검증 계층이 만들어 내며, 서비스는 이 값으로만 새 드라이버를 만듭니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDriver {
    pub first_name: String,
    pub last_name: String,
    pub plate: String,
    pub taxi_type: TaxiType,
    pub car_brand: String,
    pub car_model: String,
    pub location: Location,
}

/// 검증을 통과한 부분 수정 값
///
/// `None`인 필드는 저장된 값을 그대로 둡니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub taxi_type: Option<TaxiType>,
    pub car_brand: Option<String>,
    pub car_model: Option<String>,
    pub location: Option<Location>,
}

impl DriverPatch {
    pub fn is_empty(&self) -> bool {
        *self == DriverPatch::default()
    }
}

/// 현재 시각을 밀리초 단위로 잘라 반환합니다.
///
/// BSON datetime 정밀도와 맞추어 저장 후 다시 읽은 값이 그대로 일치하도록 합니다.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl Driver {
    /// 검증된 생성 값으로 새 드라이버를 만듭니다.
    ///
    /// 식별자를 할당하고 생성/수정 시각을 같은 값으로 설정합니다.
    pub fn new(new_driver: NewDriver) -> Self {
        let now = now_millis();

        let NewDriver {
            first_name,
            last_name,
            plate,
            taxi_type,
            car_brand,
            car_model,
            location,
        } = new_driver;

        Self {
            id: ObjectId::new(),
            first_name,
            last_name,
            plate,
            taxi_type,
            car_brand,
            car_model,
            location,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    /// 요청에 포함된 필드만 덮어쓰고 수정 시각을 갱신합니다.
    pub fn apply_patch(&mut self, patch: DriverPatch) {
        let DriverPatch {
            first_name,
            last_name,
            taxi_type,
            car_brand,
            car_model,
            location,
        } = patch;

        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(taxi_type) = taxi_type {
            self.taxi_type = taxi_type;
        }
        if let Some(car_brand) = car_brand {
            self.car_brand = car_brand;
        }
        if let Some(car_model) = car_model {
            self.car_model = car_model;
        }
        if let Some(location) = location {
            self.location = location;
        }

        self.touch();
    }

    /// 위치를 통째로 교체하고 수정 시각을 갱신합니다.
    pub fn relocate(&mut self, location: Location) {
        self.location = location;
        self.touch();
    }

    /// 수정 시각을 갱신합니다.
    ///
    /// 같은 밀리초 안에 연속으로 수정되어도 이전 값보다 항상 커집니다.
    fn touch(&mut self) {
        let now = now_millis();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::milliseconds(1)
        };
    }
}

/// 근처 검색 결과 투영 (저장되지 않음)
#[derive(Debug, Clone, PartialEq)]
pub struct DriverWithDistance {
    pub driver: Driver,
    /// 검색 지점으로부터의 대원 거리 (km, 전체 정밀도)
    pub distance_km: f64,
}

impl DriverWithDistance {
    /// 표시용 거리 (소수 첫째 자리 반올림)
    pub fn display_distance_km(&self) -> f64 {
        crate::utils::geo::round_to_tenth(self.distance_km)
    }
}

/// 페이지 단위 목록 조회 결과 (매 조회마다 다시 계산)
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDrivers {
    pub drivers: Vec<Driver>,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    /// `ceil(total_count / page_size)`
    pub total_pages: u64,
}

impl PaginatedDrivers {
    pub fn new(drivers: Vec<Driver>, page: u64, page_size: u64, total_count: u64) -> Self {
        Self {
            drivers,
            page,
            page_size,
            total_count,
            total_pages: total_count.div_ceil(page_size.max(1)),
        }
    }
}
