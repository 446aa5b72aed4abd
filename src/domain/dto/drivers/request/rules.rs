//! 드라이버 요청 DTO가 공유하는 커스텀 검증 규칙

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::domain::dto::validation::rule_error;
use crate::domain::entities::drivers::TaxiType;
use crate::utils::string_utils::normalize_plate;

/// 터키 번호판 형식: 지역 코드 2자리 + 영문 1-3자 + 숫자 1-4자리
static PLATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Za-z]{1,3}[0-9]{1,4}$").expect("plate regex is valid")
});

/// 번호판 형식 검증
///
/// 공백을 모두 제거한 뒤 형식을 확인합니다. `"34 ABC 123"`도 통과합니다.
pub fn validate_plate(plate: &str) -> Result<(), ValidationError> {
    if !PLATE_REGEX.is_match(&normalize_plate(plate)) {
        return Err(rule_error(
            "invalid_plate",
            "번호판은 지역 코드 2자리, 영문 1-3자, 숫자 1-4자리 형식이어야 합니다 (예: 34 ABC 123)",
        ));
    }
    Ok(())
}

/// 택시 종류 검증 (`sari`, `turkuaz`, `siyah`, 대소문자 구분)
pub fn validate_taxi_type(taxi_type: &str) -> Result<(), ValidationError> {
    if taxi_type.parse::<TaxiType>().is_err() {
        let mut error = rule_error(
            "invalid_taxi_type",
            "택시 종류는 sari, turkuaz, siyah 중 하나여야 합니다",
        );
        error.add_param("allowed".into(), &TaxiType::allowed_values());
        return Err(error);
    }
    Ok(())
}
