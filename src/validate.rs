//! 정의역 검사 도우미. 모든 검사는 NaN을 거부한다.

use crate::error::{CalcError, Constraint};

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::domain(name, Constraint::Finite))
    }
}

/// 계산된 값 검사. 유한한 입력끼리의 곱셈·나눗셈도 무한대로 넘칠 수 있다.
pub(crate) fn finite_result(name: &'static str, value: f64) -> Result<f64, CalcError> {
    finite(name, value)
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::domain(name, Constraint::Positive))
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::domain(name, Constraint::NonNegative))
    }
}

pub(crate) fn non_zero(name: &'static str, value: f64) -> Result<f64, CalcError> {
    finite(name, value)?;
    if value != 0.0 {
        Ok(value)
    } else {
        Err(CalcError::domain(name, Constraint::NonZero))
    }
}

pub(crate) fn in_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64, CalcError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(CalcError::domain(name, Constraint::Range { min, max }))
    }
}

/// 양의 정수(양자수 등) 검사.
pub(crate) fn at_least_one(name: &'static str, value: u32) -> Result<f64, CalcError> {
    if value >= 1 {
        Ok(f64::from(value))
    } else {
        Err(CalcError::domain(name, Constraint::Positive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_rejected_everywhere() {
        assert!(positive("x", f64::NAN).is_err());
        assert!(non_negative("x", f64::NAN).is_err());
        assert!(non_zero("x", f64::NAN).is_err());
        assert!(in_range("x", f64::NAN, 0.0, 1.0).is_err());
        assert!(finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn overflowed_result_is_a_domain_error() {
        assert_eq!(
            finite_result("current", 1e308 / 1e-10),
            Err(CalcError::domain("current", Constraint::Finite))
        );
        assert_eq!(finite_result("current", 2.5), Ok(2.5));
    }

    #[test]
    fn range_is_inclusive() {
        assert_eq!(in_range("pH", 0.0, 0.0, 14.0), Ok(0.0));
        assert_eq!(in_range("pH", 14.0, 0.0, 14.0), Ok(14.0));
        assert!(in_range("pH", 14.01, 0.0, 14.0).is_err());
    }
}
