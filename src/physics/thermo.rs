use crate::error::{CalcError, Constraint};
use crate::validate;

/// Q = mcΔT [J]
pub fn heat_transfer(mass: f64, specific_heat: f64, delta_t: f64) -> Result<f64, CalcError> {
    validate::positive("mass", mass)?;
    validate::positive("specific_heat", specific_heat)?;
    validate::finite("delta_t", delta_t)?;
    validate::finite_result("heat", mass * specific_heat * delta_t)
}

/// ΔL = α·L0·ΔT
pub fn thermal_expansion(coefficient: f64, initial_length: f64, delta_t: f64) -> Result<f64, CalcError> {
    validate::finite("coefficient", coefficient)?;
    validate::positive("initial_length", initial_length)?;
    validate::finite("delta_t", delta_t)?;
    validate::finite_result("delta_length", coefficient * initial_length * delta_t)
}

/// 등압 과정 일 W = PΔV
pub fn ideal_gas_work(pressure: f64, delta_v: f64) -> Result<f64, CalcError> {
    validate::finite("pressure", pressure)?;
    validate::finite("delta_v", delta_v)?;
    validate::finite_result("work", pressure * delta_v)
}

/// 카르노 효율 η = 1 − Tc/Th (0~1)
pub fn carnot_efficiency(t_hot_k: f64, t_cold_k: f64) -> Result<f64, CalcError> {
    let th = validate::positive("t_hot", t_hot_k)?;
    let tc = validate::positive("t_cold", t_cold_k)?;
    if tc >= th {
        return Err(CalcError::domain("t_cold", Constraint::LessThan("t_hot")));
    }
    Ok(1.0 - tc / th)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn heating_water() {
        assert_eq!(heat_transfer(1.0, 4186.0, 10.0), Ok(41_860.0));
        assert!(heat_transfer(1.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn steel_rail_expansion() {
        assert_abs_diff_eq!(thermal_expansion(12e-6, 10.0, 30.0).unwrap(), 3.6e-3, epsilon = 1e-12);
    }

    #[test]
    fn carnot_bounds() {
        assert_abs_diff_eq!(carnot_efficiency(500.0, 300.0).unwrap(), 0.4, epsilon = 1e-12);
        let err = carnot_efficiency(300.0, 300.0).unwrap_err();
        assert_eq!(err.parameter(), Some("t_cold"));
        assert!(carnot_efficiency(300.0, 500.0).is_err());
    }

    #[test]
    fn isobaric_work() {
        assert_abs_diff_eq!(ideal_gas_work(101_325.0, 0.002).unwrap(), 202.65, epsilon = 1e-9);
    }
}
