//! # 문자열 유틸리티
//!
//! 번호판 정규화처럼 여러 계층에서 함께 쓰는 문자열 처리 함수들입니다.

/// 번호판 정규화
///
/// 앞뒤뿐 아니라 중간의 공백까지 모두 제거합니다. 대소문자는 바꾸지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_plate;
///
/// assert_eq!(normalize_plate(" 34 ABC 123 "), "34ABC123");
/// ```
pub fn normalize_plate(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("34ABC123"), "34ABC123");
        assert_eq!(normalize_plate("34 ABC 123"), "34ABC123");
        assert_eq!(normalize_plate("  06 xyz\t456\n"), "06xyz456");
        assert_eq!(normalize_plate(""), "");
        assert_eq!(normalize_plate("   "), "");
    }
}
