//! # 필드 검증 결과 변환
//!
//! `validator` derive가 만들어 낸 `ValidationErrors`를 API가 노출하는
//! 순서 있는 `FieldViolation` 목록으로 바꿉니다.
//!
//! `ValidationErrors`는 내부적으로 `HashMap`이라 순서가 없습니다.
//! 각 요청 타입은 `FIELD_ORDER`로 필드 선언 순서를 알려 주고,
//! 같은 필드 안에서는 속성에 선언된 규칙 순서를 그대로 따릅니다.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::core::errors::AppError;

/// 필드 하나에 대한 규칙 위반
///
/// ```json
/// { "field": "lat", "rule": "range", "params": { "min": -90.0, "max": 90.0 }, "message": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    /// 위반된 규칙 코드 (`required`, `length`, `range`, `invalid_plate`, `invalid_taxi_type`)
    pub rule: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, serde_json::Value>,
    pub message: String,
}

impl FieldViolation {
    /// 필수 필드 누락 위반
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            rule: "required".to_string(),
            params: BTreeMap::new(),
            message: default_message(field, "required", &BTreeMap::new()),
        }
    }

    /// `validator`의 단일 에러를 위반 값으로 변환합니다.
    ///
    /// 입력값 자체(`value` 파라미터)는 응답에 다시 싣지 않습니다.
    pub fn from_validation_error(field: &str, error: &ValidationError) -> Self {
        let params: BTreeMap<String, serde_json::Value> = error
            .params
            .iter()
            .filter(|(key, _)| **key != "value")
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();

        let rule = error.code.to_string();
        let message = match &error.message {
            Some(message) => message.to_string(),
            None => default_message(field, &rule, &params),
        };

        Self {
            field: field.to_string(),
            rule,
            params,
            message,
        }
    }
}

/// 속성에 메시지가 지정되지 않은 규칙의 기본 메시지
fn default_message(
    field: &str,
    rule: &str,
    params: &BTreeMap<String, serde_json::Value>,
) -> String {
    let min = params.get("min");
    let max = params.get("max");

    match (rule, min, max) {
        ("required", _, _) => format!("{}은(는) 필수입니다", field),
        ("length", Some(min), Some(max)) => {
            format!("{}은(는) {}-{}자 사이여야 합니다", field, min, max)
        }
        ("range", Some(min), Some(max)) => {
            format!("{}은(는) {} 이상 {} 이하여야 합니다", field, min, max)
        }
        _ => format!("{}이(가) 올바르지 않습니다", field),
    }
}

/// `ValidationErrors`를 `field_order` 순서대로 펼칩니다.
///
/// `field_order`에 없는 필드의 위반은 이름순으로 뒤에 붙습니다.
pub fn collect_violations(errors: &ValidationErrors, field_order: &[&str]) -> Vec<FieldViolation> {
    let all = errors.errors();
    let mut violations = Vec::new();

    for field in field_order {
        if let Some(ValidationErrorsKind::Field(field_errors)) = all.get(*field) {
            violations.extend(
                field_errors
                    .iter()
                    .map(|error| FieldViolation::from_validation_error(field, error)),
            );
        }
    }

    let mut rest: Vec<(&str, &Vec<ValidationError>)> = all
        .iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(field_errors) => Some((&**field, field_errors)),
            _ => None,
        })
        .filter(|(field, _)| !field_order.contains(field))
        .collect();
    rest.sort_by(|a, b| a.0.cmp(b.0));

    for (field, field_errors) in rest {
        violations.extend(
            field_errors
                .iter()
                .map(|error| FieldViolation::from_validation_error(field, error)),
        );
    }

    violations
}

/// 필드 선언 순서를 아는 검증
///
/// 요청 DTO는 `FIELD_ORDER`만 선언하면 `validate_ordered()`로
/// 순서가 보장된 `AppError::ValidationError`를 얻습니다.
pub trait OrderedValidate: Validate {
    const FIELD_ORDER: &'static [&'static str];

    fn validate_ordered(&self) -> Result<(), AppError> {
        self.validate().map_err(|errors| {
            AppError::ValidationError(collect_violations(&errors, Self::FIELD_ORDER))
        })
    }
}

/// 커스텀 검증 함수용 에러 생성 헬퍼
pub(crate) fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
