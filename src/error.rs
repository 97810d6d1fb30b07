//! 계산 함수들이 공통으로 돌려주는 오류 타입.

use std::fmt;

use thiserror::Error;

/// 입력값이 지켜야 하는 물리/수학적 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// 0보다 커야 함
    Positive,
    /// 0 이상이어야 함
    NonNegative,
    /// 0이 아니어야 함
    NonZero,
    /// 유한한 수여야 함 (NaN/무한대 불가)
    Finite,
    /// 닫힌 구간 [min, max]
    Range { min: f64, max: f64 },
    /// 다른 파라미터보다 작아야 함
    LessThan(&'static str),
    /// 다른 양보다 커야 함
    GreaterThan(&'static str),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Positive => write!(f, "0보다 커야 합니다"),
            Constraint::NonNegative => write!(f, "0 이상이어야 합니다"),
            Constraint::NonZero => write!(f, "0이 아니어야 합니다"),
            Constraint::Finite => write!(f, "유한한 숫자여야 합니다"),
            Constraint::Range { min, max } => write!(f, "{min}~{max} 범위여야 합니다"),
            Constraint::LessThan(other) => write!(f, "{other}보다 작아야 합니다"),
            Constraint::GreaterThan(other) => write!(f, "{other}보다 커야 합니다"),
        }
    }
}

/// 화학식 해석 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// 빈 문자열
    #[error("화학식이 비어 있습니다")]
    EmptyFormula,
    /// 원소표에 없는 기호
    #[error("알 수 없는 원소: {0}")]
    UnknownElement(String),
    /// 원자 개수를 읽을 수 없음
    #[error("원자 개수를 해석할 수 없습니다: {0}")]
    InvalidCount(String),
}

/// 공식 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 입력값이 물리적 정의역을 벗어남
    #[error("입력 오류: {parameter}은(는) {constraint}")]
    Domain {
        parameter: &'static str,
        constraint: Constraint,
    },
    /// 미지수 풀이에서 알려진 값의 개수가 맞지 않음
    #[error("{}", determinacy_message(.law, .expected, .actual))]
    Determinacy {
        law: &'static str,
        expected: usize,
        actual: usize,
    },
    /// 화학식 해석 실패
    #[error("화학식 오류: {0}")]
    Parse(#[from] FormulaError),
}

impl CalcError {
    pub(crate) fn domain(parameter: &'static str, constraint: Constraint) -> Self {
        CalcError::Domain {
            parameter,
            constraint,
        }
    }

    /// 오류가 가리키는 파라미터 이름. 정의역 오류일 때만 존재한다.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            CalcError::Domain { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }
}

fn determinacy_message(law: &str, expected: &usize, actual: &usize) -> String {
    if actual < expected {
        format!("{law}: 값이 부족합니다 (필요 {expected}개, 입력 {actual}개)")
    } else {
        format!("{law}: 값이 너무 많습니다 (필요 {expected}개, 입력 {actual}개)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinacy_message_distinguishes_under_and_over() {
        let under = CalcError::Determinacy {
            law: "ohms_law",
            expected: 2,
            actual: 1,
        };
        let over = CalcError::Determinacy {
            law: "ohms_law",
            expected: 2,
            actual: 3,
        };
        assert!(under.to_string().contains("부족"));
        assert!(over.to_string().contains("많습니다"));
    }

    #[test]
    fn domain_error_names_parameter() {
        let err = CalcError::domain("mass", Constraint::Positive);
        assert_eq!(err.parameter(), Some("mass"));
        assert!(err.to_string().contains("mass"));
    }
}
