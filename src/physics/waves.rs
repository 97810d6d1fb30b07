use crate::constants::Constants;
use crate::error::CalcError;
use crate::validate;

/// v = fλ
pub fn wave_speed(frequency: f64, wavelength: f64) -> Result<f64, CalcError> {
    validate::positive("frequency", frequency)?;
    validate::positive("wavelength", wavelength)?;
    validate::finite_result("wave_speed", frequency * wavelength)
}

/// 단진동 변위 x = A·cos(ωt + φ). φ 는 라디안.
pub fn simple_harmonic_position(
    amplitude: f64,
    angular_frequency: f64,
    time: f64,
    phase_rad: f64,
) -> Result<f64, CalcError> {
    validate::finite("amplitude", amplitude)?;
    validate::finite("angular_frequency", angular_frequency)?;
    validate::finite("time", time)?;
    validate::finite("phase", phase_rad)?;
    validate::finite_result("position", amplitude * (angular_frequency * time + phase_rad).cos())
}

/// 단진자 주기 T = 2π√(L/g)
pub fn pendulum_period(c: &Constants, length: f64) -> Result<f64, CalcError> {
    validate::positive("length", length)?;
    let g = validate::positive("standard_gravity", c.standard_gravity)?;
    validate::finite_result("period", 2.0 * c.pi * (length / g).sqrt())
}

/// 용수철 진자 주기 T = 2π√(m/k)
pub fn spring_period(c: &Constants, mass: f64, spring_constant: f64) -> Result<f64, CalcError> {
    validate::positive("mass", mass)?;
    validate::positive("spring_constant", spring_constant)?;
    validate::finite_result("period", 2.0 * c.pi * (mass / spring_constant).sqrt())
}

/// 도플러 효과 f' = f(v + vo)/(v − vs).
///
/// 관측자/음원 속도는 서로 가까워지는 방향이 양수다.
pub fn doppler_effect(
    source_frequency: f64,
    source_velocity: f64,
    observer_velocity: f64,
    wave_speed: f64,
) -> Result<f64, CalcError> {
    validate::finite("source_frequency", source_frequency)?;
    validate::finite("source_velocity", source_velocity)?;
    validate::finite("observer_velocity", observer_velocity)?;
    validate::finite("wave_speed", wave_speed)?;
    let denominator = validate::non_zero("wave_speed - source_velocity", wave_speed - source_velocity)?;
    validate::finite_result("observed_frequency", source_frequency * (wave_speed + observer_velocity) / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sound_wave() {
        assert_abs_diff_eq!(wave_speed(440.0, 0.78).unwrap(), 343.2, epsilon = 1e-9);
        assert!(wave_speed(0.0, 1.0).is_err());
    }

    #[test]
    fn shm_at_start_is_amplitude() {
        assert_eq!(simple_harmonic_position(0.1, 2.0, 0.0, 0.0), Ok(0.1));
        let half = simple_harmonic_position(0.1, std::f64::consts::PI, 1.0, 0.0).unwrap();
        assert_abs_diff_eq!(half, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn periods() {
        let c = Constants::default();
        assert_abs_diff_eq!(pendulum_period(&c, 1.0).unwrap(), 2.006, epsilon = 1e-3);
        assert_abs_diff_eq!(spring_period(&c, 1.0, 4.0 * c.pi * c.pi).unwrap(), 1.0, epsilon = 1e-12);
        assert!(pendulum_period(&c, 0.0).is_err());
    }

    #[test]
    fn approaching_source_raises_pitch() {
        let f = doppler_effect(1000.0, 30.0, 0.0, 343.0).unwrap();
        assert!(f > 1000.0);
        assert_abs_diff_eq!(f, 1000.0 * 343.0 / 313.0, epsilon = 1e-9);
        // 멀어지면 음수 속도
        assert!(doppler_effect(1000.0, -30.0, 0.0, 343.0).unwrap() < 1000.0);
    }

    #[test]
    fn only_the_sonic_denominator_is_guarded() {
        // 수치 검사만 한다
        assert_eq!(doppler_effect(0.0, 30.0, 0.0, 343.0), Ok(0.0));
        assert_abs_diff_eq!(
            doppler_effect(-1000.0, 0.0, 0.0, 343.0).unwrap(),
            -1000.0,
            epsilon = 1e-9
        );
        assert!(doppler_effect(f64::NAN, 0.0, 0.0, 343.0).is_err());
        assert!(doppler_effect(1000.0, 0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn sonic_source_is_rejected() {
        let err = doppler_effect(1000.0, 343.0, 0.0, 343.0).unwrap_err();
        assert_eq!(err.parameter(), Some("wave_speed - source_velocity"));
    }
}
