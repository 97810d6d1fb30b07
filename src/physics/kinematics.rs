use crate::constants::Constants;
use crate::error::CalcError;
use crate::validate;

/// 등가속도 운동 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionResult {
    /// 나중 속도 [m/s]
    pub final_velocity: f64,
    /// 변위 [m]
    pub displacement: f64,
}

/// v = v0 + at, x = v0·t + ½at²
pub fn constant_acceleration(
    initial_velocity: f64,
    acceleration: f64,
    time: f64,
) -> Result<MotionResult, CalcError> {
    let v0 = validate::finite("initial_velocity", initial_velocity)?;
    let a = validate::finite("acceleration", acceleration)?;
    let t = validate::finite("time", time)?;
    Ok(MotionResult {
        final_velocity: validate::finite_result("final_velocity", v0 + a * t)?,
        displacement: validate::finite_result("displacement", v0 * t + 0.5 * a * t * t)?,
    })
}

/// 포물선 운동 결과 (발사점과 착지점 높이가 같은 경우).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileResult {
    pub v0x: f64,
    pub v0y: f64,
    /// 체공 시간 [s]
    pub flight_time: f64,
    /// 최고 높이 [m]
    pub max_height: f64,
    /// 수평 도달 거리 [m]
    pub range: f64,
}

/// 초기 속력과 발사각(도)으로 포물선 운동을 계산한다. g 는 표준 중력.
pub fn projectile_motion(
    c: &Constants,
    initial_speed: f64,
    angle_deg: f64,
) -> Result<ProjectileResult, CalcError> {
    validate::finite("initial_speed", initial_speed)?;
    validate::finite("angle", angle_deg)?;
    let g = validate::positive("standard_gravity", c.standard_gravity)?;
    let theta = c.degrees_to_radians(angle_deg);
    let v0x = initial_speed * theta.cos();
    let v0y = initial_speed * theta.sin();
    let flight_time = validate::finite_result("flight_time", 2.0 * v0y / g)?;
    Ok(ProjectileResult {
        v0x,
        v0y,
        flight_time,
        max_height: validate::finite_result("max_height", v0y * v0y / (2.0 * g))?,
        range: validate::finite_result("range", v0x * flight_time)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn car_accelerating_from_rest() {
        let r = constant_acceleration(0.0, 2.0, 5.0).unwrap();
        assert_eq!(r.final_velocity, 10.0);
        assert_eq!(r.displacement, 25.0);
        assert!(constant_acceleration(f64::NAN, 2.0, 5.0).is_err());
    }

    #[test]
    fn forty_five_degree_launch() {
        let c = Constants::default();
        let r = projectile_motion(&c, 20.0, 45.0).unwrap();
        assert_abs_diff_eq!(r.v0x, r.v0y, epsilon = 1e-9);
        assert_abs_diff_eq!(r.range, 400.0 / 9.807, epsilon = 1e-6);
        assert_abs_diff_eq!(r.max_height, 100.0 / 9.807, epsilon = 1e-6);
    }

    #[test]
    fn horizontal_launch_has_no_flight() {
        let c = Constants::default();
        let r = projectile_motion(&c, 10.0, 0.0).unwrap();
        assert_eq!(r.flight_time, 0.0);
        assert_eq!(r.range, 0.0);
    }
}
