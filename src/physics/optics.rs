use crate::error::CalcError;
use crate::solver;
use crate::validate;

/// 얇은 렌즈 식 변수. 선언 순서가 미지수 탐색 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LensVariable {
    FocalLength,
    ObjectDistance,
    ImageDistance,
}

/// 얇은 렌즈 입력. 거리 단위는 서로 같기만 하면 된다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LensInput {
    pub focal_length: Option<f64>,
    pub object_distance: Option<f64>,
    pub image_distance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensResult {
    pub focal_length: f64,
    pub object_distance: f64,
    pub image_distance: f64,
    pub solved_for: LensVariable,
}

impl LensResult {
    /// 배율 m = −di/do
    pub fn magnification(&self) -> f64 {
        -self.image_distance / self.object_distance
    }
}

/// 1/f = 1/do + 1/di 에서 비어 있는 하나를 구한다.
///
/// 주어진 값은 0이 아니어야 하고, 계산된 역수 합이 0이면(물체가 초점에 있음) 오류다.
pub fn lens_equation(input: LensInput) -> Result<LensResult, CalcError> {
    let unknown = solver::locate_unknown(
        "lens_equation",
        2,
        [
            (LensVariable::FocalLength, input.focal_length),
            (LensVariable::ObjectDistance, input.object_distance),
            (LensVariable::ImageDistance, input.image_distance),
        ],
    )?;
    let known = |name: &'static str, v: Option<f64>| -> Result<f64, CalcError> {
        v.map_or(Ok(0.0), |x| validate::non_zero(name, x))
    };
    let f = known("focal_length", input.focal_length)?;
    let d_o = known("object_distance", input.object_distance)?;
    let d_i = known("image_distance", input.image_distance)?;

    let mut out = LensResult {
        focal_length: f,
        object_distance: d_o,
        image_distance: d_i,
        solved_for: unknown,
    };
    match unknown {
        LensVariable::FocalLength => {
            let sum = validate::non_zero("1/object_distance + 1/image_distance", 1.0 / d_o + 1.0 / d_i)?;
            out.focal_length = validate::finite_result("focal_length", 1.0 / sum)?;
        }
        LensVariable::ObjectDistance => {
            let diff = validate::non_zero("1/focal_length - 1/image_distance", 1.0 / f - 1.0 / d_i)?;
            out.object_distance = validate::finite_result("object_distance", 1.0 / diff)?;
        }
        LensVariable::ImageDistance => {
            let diff = validate::non_zero("1/focal_length - 1/object_distance", 1.0 / f - 1.0 / d_o)?;
            out.image_distance = validate::finite_result("image_distance", 1.0 / diff)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn converging_lens_image() {
        let r = lens_equation(LensInput {
            focal_length: Some(10.0),
            object_distance: Some(30.0),
            image_distance: None,
        })
        .unwrap();
        assert_eq!(r.solved_for, LensVariable::ImageDistance);
        assert_abs_diff_eq!(r.image_distance, 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.magnification(), -0.5, epsilon = 1e-9);
    }

    #[test]
    fn solve_focal_and_object() {
        let f = lens_equation(LensInput {
            object_distance: Some(30.0),
            image_distance: Some(15.0),
            ..Default::default()
        })
        .unwrap();
        assert_abs_diff_eq!(f.focal_length, 10.0, epsilon = 1e-9);
        let o = lens_equation(LensInput {
            focal_length: Some(10.0),
            image_distance: Some(15.0),
            ..Default::default()
        })
        .unwrap();
        assert_abs_diff_eq!(o.object_distance, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn object_at_focal_point() {
        let err = lens_equation(LensInput {
            focal_length: Some(10.0),
            object_distance: Some(10.0),
            image_distance: None,
        })
        .unwrap_err();
        assert!(matches!(err, CalcError::Domain { .. }));
    }

    #[test]
    fn known_zero_distance_is_rejected() {
        let err = lens_equation(LensInput {
            focal_length: Some(10.0),
            object_distance: Some(0.0),
            image_distance: None,
        })
        .unwrap_err();
        assert_eq!(err.parameter(), Some("object_distance"));
    }

    #[test]
    fn three_knowns_is_over_determined() {
        let err = lens_equation(LensInput {
            focal_length: Some(10.0),
            object_distance: Some(30.0),
            image_distance: Some(15.0),
        })
        .unwrap_err();
        assert!(matches!(err, CalcError::Determinacy { actual: 3, .. }));
    }
}
