//! 정전기, 회로, 자기력, 전자기 유도.

use crate::constants::Constants;
use crate::error::CalcError;
use crate::solver;
use crate::validate;

/// 쿨롱 힘 F = k·q1·q2/r² (양수면 척력)
pub fn coulomb_force(c: &Constants, q1: f64, q2: f64, distance: f64) -> Result<f64, CalcError> {
    validate::finite("q1", q1)?;
    validate::finite("q2", q2)?;
    let r = validate::positive("distance", distance)?;
    validate::finite_result("force", c.coulomb_constant * q1 * q2 / (r * r))
}

/// 점전하 전기장 E = kq/r²
pub fn electric_field(c: &Constants, charge: f64, distance: f64) -> Result<f64, CalcError> {
    validate::finite("charge", charge)?;
    let r = validate::positive("distance", distance)?;
    validate::finite_result("field", c.coulomb_constant * charge / (r * r))
}

/// 점전하 전위 V = kq/r
pub fn electric_potential(c: &Constants, charge: f64, distance: f64) -> Result<f64, CalcError> {
    validate::finite("charge", charge)?;
    let r = validate::positive("distance", distance)?;
    validate::finite_result("potential", c.coulomb_constant * charge / r)
}

/// 옴의 법칙 변수. 선언 순서가 미지수 탐색 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OhmVariable {
    Voltage,
    Current,
    Resistance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OhmsLawInput {
    /// V
    pub voltage: Option<f64>,
    /// A
    pub current: Option<f64>,
    /// Ω
    pub resistance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhmsLawResult {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub solved_for: OhmVariable,
}

/// V = IR 에서 비어 있는 하나를 구한다. 정확히 2개가 주어져야 한다.
pub fn ohms_law(input: OhmsLawInput) -> Result<OhmsLawResult, CalcError> {
    let unknown = solver::locate_unknown(
        "ohms_law",
        2,
        [
            (OhmVariable::Voltage, input.voltage),
            (OhmVariable::Current, input.current),
            (OhmVariable::Resistance, input.resistance),
        ],
    )?;
    let v = input.voltage.map(|x| validate::finite("voltage", x)).transpose()?;
    let i = input.current.map(|x| validate::finite("current", x)).transpose()?;
    let r = input.resistance.map(|x| validate::finite("resistance", x)).transpose()?;

    let (voltage, current, resistance) = match (v, i, r) {
        (None, Some(i), Some(r)) => (validate::finite_result("voltage", i * r)?, i, r),
        (Some(v), None, Some(r)) => {
            let current = v / validate::non_zero("resistance", r)?;
            (v, validate::finite_result("current", current)?, r)
        }
        (Some(v), Some(i), None) => {
            let resistance = v / validate::non_zero("current", i)?;
            (v, i, validate::finite_result("resistance", resistance)?)
        }
        // locate_unknown 이 정확히 하나만 비어 있음을 보장한다
        _ => {
            return Err(CalcError::Determinacy {
                law: "ohms_law",
                expected: 2,
                actual: solver::known_count(&[v, i, r]),
            })
        }
    };
    Ok(OhmsLawResult {
        voltage,
        current,
        resistance,
        solved_for: unknown,
    })
}

/// 전력 P = VI = I²R = V²/R.
///
/// 2개 이상 주어지면 (V,I), (I,R), (V,R) 순서로 처음 맞는 쌍을 쓴다.
pub fn electrical_power(
    voltage: Option<f64>,
    current: Option<f64>,
    resistance: Option<f64>,
) -> Result<f64, CalcError> {
    let v = voltage.map(|x| validate::finite("voltage", x)).transpose()?;
    let i = current.map(|x| validate::finite("current", x)).transpose()?;
    let r = resistance.map(|x| validate::finite("resistance", x)).transpose()?;
    let power = match (v, i, r) {
        (Some(v), Some(i), _) => v * i,
        (_, Some(i), Some(r)) => i * i * r,
        (Some(v), _, Some(r)) => v * v / validate::non_zero("resistance", r)?,
        _ => {
            return Err(CalcError::Determinacy {
                law: "electrical_power",
                expected: 2,
                actual: solver::known_count(&[v, i, r]),
            })
        }
    };
    validate::finite_result("power", power)
}

/// 자기장 속 전하가 받는 힘 F = |q|vB·sinθ (θ 는 도, 기본 90°)
pub fn magnetic_force(
    c: &Constants,
    charge: f64,
    velocity: f64,
    field: f64,
    angle_deg: f64,
) -> Result<f64, CalcError> {
    validate::finite("charge", charge)?;
    validate::finite("velocity", velocity)?;
    validate::finite("field", field)?;
    validate::finite("angle", angle_deg)?;
    validate::finite_result(
        "force",
        charge.abs() * velocity * field * c.degrees_to_radians(angle_deg).sin(),
    )
}

/// 기본 자기력 각도 [deg]
pub const MAGNETIC_FORCE_DEFAULT_ANGLE_DEG: f64 = 90.0;

/// 패러데이 법칙 ε = −ΔΦ/Δt
pub fn faraday_emf(flux_change: f64, time: f64) -> Result<f64, CalcError> {
    validate::finite("flux_change", flux_change)?;
    let dt = validate::positive("time", time)?;
    validate::finite_result("emf", -flux_change / dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Constraint;
    use approx::assert_abs_diff_eq;

    fn ohm(v: Option<f64>, i: Option<f64>, r: Option<f64>) -> Result<OhmsLawResult, CalcError> {
        ohms_law(OhmsLawInput {
            voltage: v,
            current: i,
            resistance: r,
        })
    }

    #[test]
    fn solves_each_ohm_variable() {
        let r = ohm(Some(12.0), None, Some(4.0)).unwrap();
        assert_eq!((r.current, r.solved_for), (3.0, OhmVariable::Current));
        let r = ohm(None, Some(2.0), Some(5.0)).unwrap();
        assert_eq!((r.voltage, r.solved_for), (10.0, OhmVariable::Voltage));
        let r = ohm(Some(9.0), Some(3.0), None).unwrap();
        assert_eq!((r.resistance, r.solved_for), (3.0, OhmVariable::Resistance));
        assert_eq!(r.voltage, 9.0);
    }

    #[test]
    fn zero_resistance_vs_unset_resistance() {
        let zero = ohm(Some(12.0), None, Some(0.0)).unwrap_err();
        assert_eq!(zero.parameter(), Some("resistance"));
        let unset = ohm(Some(12.0), None, None).unwrap_err();
        assert!(matches!(unset, CalcError::Determinacy { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn zero_current_when_solving_resistance() {
        let err = ohm(Some(5.0), Some(0.0), None).unwrap_err();
        assert_eq!(err.parameter(), Some("current"));
    }

    #[test]
    fn overflowing_results_are_rejected() {
        let err = ohm(Some(1e308), None, Some(1e-10)).unwrap_err();
        assert_eq!(err, CalcError::domain("current", Constraint::Finite));
        let err = ohm(None, Some(1e200), Some(1e200)).unwrap_err();
        assert_eq!(err.parameter(), Some("voltage"));
        assert_eq!(
            electrical_power(Some(1e200), Some(1e200), None),
            Err(CalcError::domain("power", Constraint::Finite))
        );
        assert!(electrical_power(Some(1e200), None, Some(1e-200)).is_err());
    }

    #[test]
    fn power_from_any_pair() {
        assert_eq!(electrical_power(Some(12.0), Some(2.0), None), Ok(24.0));
        assert_eq!(electrical_power(None, Some(2.0), Some(6.0)), Ok(24.0));
        assert_eq!(electrical_power(Some(12.0), None, Some(6.0)), Ok(24.0));
        // 세 값이 모두 있으면 V·I
        assert_eq!(electrical_power(Some(12.0), Some(1.0), Some(6.0)), Ok(12.0));
        assert!(electrical_power(Some(12.0), None, Some(0.0)).is_err());
        assert!(matches!(
            electrical_power(Some(12.0), None, None),
            Err(CalcError::Determinacy { actual: 1, .. })
        ));
    }

    #[test]
    fn electrostatics() {
        let c = Constants::default();
        assert_abs_diff_eq!(coulomb_force(&c, 1e-6, 1e-6, 1.0).unwrap(), 8.988e-3, epsilon = 1e-12);
        assert_abs_diff_eq!(electric_field(&c, 1e-9, 1.0).unwrap(), 8.988, epsilon = 1e-9);
        assert_abs_diff_eq!(electric_potential(&c, 1e-9, 2.0).unwrap(), 4.494, epsilon = 1e-9);
        assert_eq!(electric_field(&c, 1e-9, 0.0).unwrap_err().parameter(), Some("distance"));
    }

    #[test]
    fn lorentz_and_induction() {
        let c = Constants::default();
        let f = magnetic_force(&c, -1.6e-19, 1e6, 0.5, MAGNETIC_FORCE_DEFAULT_ANGLE_DEG).unwrap();
        assert_abs_diff_eq!(f, 8e-14, epsilon = 1e-20);
        assert_abs_diff_eq!(faraday_emf(0.3, 0.1).unwrap(), -3.0, epsilon = 1e-12);
        assert!(faraday_emf(0.3, 0.0).is_err());
    }
}
