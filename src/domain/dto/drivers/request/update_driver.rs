//! # 드라이버 부분 수정 요청 DTO
//!
//! 모든 필드가 선택 사항이며, 값이 있는 필드만 같은 규칙으로 검증합니다.
//! 번호판은 등록 이후 바꿀 수 없으므로 이 요청에 포함되지 않습니다.
//!
//! 위치는 `lat`과 `lon`이 모두 있을 때만 교체됩니다.
//! 하나만 보내면 범위 검사는 하되 위치는 그대로 둡니다.
//! 명시적인 `null`은 필드를 보내지 않은 것과 같게 취급합니다.

use serde::Deserialize;
use validator::Validate;

use super::rules::validate_taxi_type;
use crate::core::errors::AppError;
use crate::domain::dto::validation::OrderedValidate;
use crate::domain::entities::drivers::{DriverPatch, Location, TaxiType};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 2, max = 50))]
    pub first_name: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_taxi_type"))]
    pub taxi_type: Option<String>,

    #[validate(length(min = 2, max = 30))]
    pub car_brand: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub car_model: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
}

impl OrderedValidate for UpdateDriverRequest {
    const FIELD_ORDER: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "taxi_type",
        "car_brand",
        "car_model",
        "lat",
        "lon",
    ];
}

impl UpdateDriverRequest {
    /// 검증 후 부분 수정 값으로 변환합니다.
    pub fn into_patch(self) -> Result<DriverPatch, AppError> {
        self.validate_ordered()?;

        let taxi_type = self
            .taxi_type
            .map(|value| value.parse::<TaxiType>())
            .transpose()
            .map_err(AppError::InvalidTaxiType)?;

        let location = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                Some(Location::new(lat, lon).map_err(AppError::InvalidLocation)?)
            }
            _ => None,
        };

        Ok(DriverPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            taxi_type,
            car_brand: self.car_brand,
            car_model: self.car_model,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_is_empty_patch() {
        let patch = UpdateDriverRequest::default().into_patch().unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_explicit_null_is_absent() {
        let request: UpdateDriverRequest =
            serde_json::from_str(r#"{"first_name": null, "taxi_type": "turkuaz"}"#).unwrap();
        let patch = request.into_patch().unwrap();

        assert_eq!(patch.first_name, None);
        assert_eq!(patch.taxi_type, Some(TaxiType::Turkuaz));
    }

    #[test]
    fn test_plate_is_not_part_of_update() {
        let request: UpdateDriverRequest =
            serde_json::from_str(r#"{"plate": "06XYZ456"}"#).unwrap();
        assert!(request.into_patch().unwrap().is_empty());
    }

    #[test]
    fn test_location_requires_both_coordinates() {
        let only_lat = UpdateDriverRequest {
            lat: Some(41.5),
            ..UpdateDriverRequest::default()
        };
        assert_eq!(only_lat.into_patch().unwrap().location, None);

        let both = UpdateDriverRequest {
            lat: Some(41.5),
            lon: Some(29.5),
            ..UpdateDriverRequest::default()
        };
        assert_eq!(
            both.into_patch().unwrap().location,
            Some(Location { lat: 41.5, lon: 29.5 })
        );
    }

    #[test]
    fn test_single_coordinate_is_still_range_checked() {
        let request = UpdateDriverRequest {
            lon: Some(-180.5),
            ..UpdateDriverRequest::default()
        };

        match request.into_patch() {
            Err(AppError::ValidationError(violations)) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "lon");
                assert_eq!(violations[0].rule, "range");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_present_fields_use_create_rules() {
        let request = UpdateDriverRequest {
            last_name: Some("Y".to_string()),
            taxi_type: Some("gold".to_string()),
            ..UpdateDriverRequest::default()
        };

        match request.into_patch() {
            Err(AppError::ValidationError(violations)) => {
                let rules: Vec<&str> = violations.iter().map(|v| v.rule.as_str()).collect();
                assert_eq!(rules, vec!["length", "invalid_taxi_type"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
