use crate::constants::Constants;
use crate::error::CalcError;
use crate::solver;
use crate::validate;

/// 이상기체 식에서 풀 수 있는 변수. 선언 순서가 미지수 탐색 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasLawVariable {
    Pressure,
    Volume,
    Moles,
    Temperature,
}

/// 이상기체 식 입력. `None` 은 미지수, `Some` 은 알려진 값이다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdealGasInput {
    /// atm
    pub pressure_atm: Option<f64>,
    /// L
    pub volume_l: Option<f64>,
    /// mol
    pub moles: Option<f64>,
    /// K
    pub temperature_k: Option<f64>,
}

/// 이상기체 식 결과. 모든 값이 채워진다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGasResult {
    pub pressure_atm: f64,
    pub volume_l: f64,
    pub moles: f64,
    pub temperature_k: f64,
    pub solved_for: GasLawVariable,
}

/// PV = nRT 에서 비어 있는 하나를 구한다. R = 0.08206 L·atm/(mol·K).
///
/// 4개 중 정확히 3개가 주어져야 하고, 주어진 값은 모두 0보다 커야 한다.
pub fn ideal_gas_law(c: &Constants, input: IdealGasInput) -> Result<IdealGasResult, CalcError> {
    let unknown = solver::locate_unknown(
        "ideal_gas_law",
        3,
        [
            (GasLawVariable::Pressure, input.pressure_atm),
            (GasLawVariable::Volume, input.volume_l),
            (GasLawVariable::Moles, input.moles),
            (GasLawVariable::Temperature, input.temperature_k),
        ],
    )?;
    // 미지수 자리는 0으로 두었다가 아래에서 채운다
    let known = |name: &'static str, v: Option<f64>| -> Result<f64, CalcError> {
        v.map_or(Ok(0.0), |x| validate::positive(name, x))
    };
    let p = known("pressure", input.pressure_atm)?;
    let v = known("volume", input.volume_l)?;
    let n = known("moles", input.moles)?;
    let t = known("temperature", input.temperature_k)?;
    let r = validate::positive("gas_constant", c.gas_constant_l_atm)?;

    let mut out = IdealGasResult {
        pressure_atm: p,
        volume_l: v,
        moles: n,
        temperature_k: t,
        solved_for: unknown,
    };
    match unknown {
        GasLawVariable::Pressure => {
            out.pressure_atm = validate::finite_result("pressure", n * r * t / v)?
        }
        GasLawVariable::Volume => out.volume_l = validate::finite_result("volume", n * r * t / p)?,
        GasLawVariable::Moles => out.moles = validate::finite_result("moles", p * v / (r * t))?,
        GasLawVariable::Temperature => {
            out.temperature_k = validate::finite_result("temperature", p * v / (n * r))?
        }
    }
    Ok(out)
}

/// 결합 기체 법칙 P1V1/T1 = P2V2/T2 에서 V2 를 구한다.
pub fn combined_gas_volume(
    p1: f64,
    v1: f64,
    t1_k: f64,
    p2: f64,
    t2_k: f64,
) -> Result<f64, CalcError> {
    validate::positive("p1", p1)?;
    validate::positive("v1", v1)?;
    validate::positive("t1", t1_k)?;
    validate::positive("p2", p2)?;
    validate::positive("t2", t2_k)?;
    validate::finite_result("v2", p1 * v1 * t2_k / (p2 * t1_k))
}

/// 반데르발스 상태식 압력. R = 8.314 J/(mol·K) 이므로 SI 단위(Pa, m³)를 쓴다.
/// P = nRT/(V − nb) − a·n²/V²
pub fn van_der_waals_pressure(
    c: &Constants,
    moles: f64,
    volume: f64,
    temperature_k: f64,
    a: f64,
    b: f64,
) -> Result<f64, CalcError> {
    validate::positive("moles", moles)?;
    validate::positive("volume", volume)?;
    validate::positive("temperature", temperature_k)?;
    validate::finite("a", a)?;
    validate::finite("b", b)?;
    let excluded = moles * b;
    if volume <= excluded {
        return Err(CalcError::domain(
            "volume",
            crate::error::Constraint::GreaterThan("n·b"),
        ));
    }
    let r = c.gas_constant_j;
    validate::finite_result(
        "pressure",
        moles * r * temperature_k / (volume - excluded) - a * moles * moles / (volume * volume),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Constraint;
    use approx::assert_abs_diff_eq;

    fn c() -> Constants {
        Constants::default()
    }

    #[test]
    fn one_mole_at_stp() {
        let r = ideal_gas_law(
            &c(),
            IdealGasInput {
                pressure_atm: Some(1.0),
                volume_l: Some(22.4),
                moles: None,
                temperature_k: Some(273.0),
            },
        )
        .unwrap();
        assert_eq!(r.solved_for, GasLawVariable::Moles);
        assert_abs_diff_eq!(r.moles, 0.999, epsilon = 1e-3);
        assert_eq!(r.pressure_atm, 1.0);
        assert_eq!(r.volume_l, 22.4);
    }

    #[test]
    fn each_variable_can_be_solved() {
        let full = IdealGasInput {
            pressure_atm: Some(2.0),
            volume_l: Some(10.0),
            moles: Some(0.5),
            temperature_k: None,
        };
        let t = ideal_gas_law(&c(), full).unwrap().temperature_k;
        let p = ideal_gas_law(
            &c(),
            IdealGasInput {
                pressure_atm: None,
                temperature_k: Some(t),
                ..full
            },
        )
        .unwrap();
        assert_eq!(p.solved_for, GasLawVariable::Pressure);
        assert_abs_diff_eq!(p.pressure_atm, 2.0, epsilon = 1e-9);
        let v = ideal_gas_law(
            &c(),
            IdealGasInput {
                volume_l: None,
                temperature_k: Some(t),
                ..full
            },
        )
        .unwrap();
        assert_abs_diff_eq!(v.volume_l, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn wrong_number_of_knowns() {
        let two = IdealGasInput {
            pressure_atm: Some(1.0),
            volume_l: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            ideal_gas_law(&c(), two),
            Err(CalcError::Determinacy { expected: 3, actual: 2, .. })
        ));
        let four = IdealGasInput {
            pressure_atm: Some(1.0),
            volume_l: Some(1.0),
            moles: Some(1.0),
            temperature_k: Some(1.0),
        };
        assert!(matches!(
            ideal_gas_law(&c(), four),
            Err(CalcError::Determinacy { expected: 3, actual: 4, .. })
        ));
    }

    #[test]
    fn known_zero_is_not_unset() {
        let input = IdealGasInput {
            pressure_atm: Some(0.0),
            volume_l: Some(22.4),
            moles: None,
            temperature_k: Some(273.0),
        };
        let err = ideal_gas_law(&c(), input).unwrap_err();
        assert_eq!(err.parameter(), Some("pressure"));
    }

    #[test]
    fn overflowing_moles_is_rejected() {
        let input = IdealGasInput {
            pressure_atm: Some(1e300),
            volume_l: Some(1e300),
            moles: None,
            temperature_k: Some(1.0),
        };
        let err = ideal_gas_law(&c(), input).unwrap_err();
        assert_eq!(err, CalcError::domain("moles", Constraint::Finite));
    }

    #[test]
    fn combined_gas_to_stp() {
        let v2 = combined_gas_volume(1.2, 2.5, 298.15, 1.0, 273.15).unwrap();
        assert_abs_diff_eq!(v2, 2.748, epsilon = 1e-3);
    }

    #[test]
    fn van_der_waals_volume_too_small() {
        let err = van_der_waals_pressure(&c(), 1.0, 0.001, 300.0, 0.0, 0.01).unwrap_err();
        assert_eq!(err.parameter(), Some("volume"));
    }

    #[test]
    fn van_der_waals_reduces_to_ideal_gas() {
        let p = van_der_waals_pressure(&c(), 1.0, 0.0224, 273.15, 0.0, 0.0).unwrap();
        assert_abs_diff_eq!(p, 8.314 * 273.15 / 0.0224, epsilon = 1e-6);
    }
}
