//! # 드라이버 생성 요청 DTO
//!
//! 모든 필드를 `Option`으로 받아 누락된 필드도 JSON 파싱 에러가 아닌
//! `required` 위반으로 보고합니다. 덕분에 한 번의 요청으로 잘못된 필드를 모두 알 수 있습니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `first_name`, `last_name` | 필수, 2-50자 |
//! | `plate` | 필수, 공백 제거 후 `^[0-9]{2}[A-Za-z]{1,3}[0-9]{1,4}$` |
//! | `taxi_type` | 필수, `sari` / `turkuaz` / `siyah` |
//! | `car_brand` | 필수, 2-30자 |
//! | `car_model` | 필수, 1-30자 |
//! | `lat` / `lon` | 필수, -90..90 / -180..180 (`0.0`도 유효) |
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "first_name": "Ahmet",
//!   "last_name": "Yilmaz",
//!   "plate": "34 ABC 123",
//!   "taxi_type": "sari",
//!   "car_brand": "Fiat",
//!   "car_model": "Egea",
//!   "lat": 41.0082,
//!   "lon": 28.9784
//! }
//! ```

use serde::Deserialize;
use validator::Validate;

use super::rules::{validate_plate, validate_taxi_type};
use crate::core::errors::AppError;
use crate::domain::dto::validation::OrderedValidate;
use crate::domain::entities::drivers::{Location, NewDriver, TaxiType};
use crate::utils::string_utils::normalize_plate;

/// 새 드라이버 등록 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateDriverRequest {
    #[validate(required, length(min = 2, max = 50))]
    pub first_name: Option<String>,

    #[validate(required, length(min = 2, max = 50))]
    pub last_name: Option<String>,

    /// 공백이 섞여 있어도 됩니다. 저장 전에 모두 제거됩니다.
    #[validate(required, custom(function = "validate_plate"))]
    pub plate: Option<String>,

    #[validate(required, custom(function = "validate_taxi_type"))]
    pub taxi_type: Option<String>,

    #[validate(required, length(min = 2, max = 30))]
    pub car_brand: Option<String>,

    #[validate(required, length(min = 1, max = 30))]
    pub car_model: Option<String>,

    #[validate(required, range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[validate(required, range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
}

impl OrderedValidate for CreateDriverRequest {
    const FIELD_ORDER: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "plate",
        "taxi_type",
        "car_brand",
        "car_model",
        "lat",
        "lon",
    ];
}

impl CreateDriverRequest {
    /// 검증 후 도메인 생성 값으로 변환합니다.
    ///
    /// 검증에 실패하면 위반된 모든 필드를 선언 순서대로 담은
    /// `AppError::ValidationError`를 반환합니다.
    pub fn into_new_driver(self) -> Result<NewDriver, AppError> {
        self.validate_ordered()?;

        let (
            Some(first_name),
            Some(last_name),
            Some(plate),
            Some(taxi_type),
            Some(car_brand),
            Some(car_model),
            Some(lat),
            Some(lon),
        ) = (
            self.first_name,
            self.last_name,
            self.plate,
            self.taxi_type,
            self.car_brand,
            self.car_model,
            self.lat,
            self.lon,
        )
        else {
            return Err(AppError::InternalError(
                "검증을 통과한 생성 요청에 누락된 필드가 있습니다".to_string(),
            ));
        };

        let taxi_type = taxi_type
            .parse::<TaxiType>()
            .map_err(AppError::InvalidTaxiType)?;
        let location = Location::new(lat, lon).map_err(AppError::InvalidLocation)?;

        Ok(NewDriver {
            first_name,
            last_name,
            plate: normalize_plate(&plate),
            taxi_type,
            car_brand,
            car_model,
            location,
        })
    }
}
