//! 양자 에너지 준위. 결과는 모두 J 단위.

use crate::constants::Constants;
use crate::error::CalcError;
use crate::validate;

/// 1차원 상자 속 입자: E = n²h²/(8mL²)
pub fn particle_in_box_energy(c: &Constants, n: u32, box_length: f64, mass: f64) -> Result<f64, CalcError> {
    let n = validate::at_least_one("n", n)?;
    validate::positive("box_length", box_length)?;
    validate::positive("mass", mass)?;
    let h = c.planck_constant;
    validate::finite_result("energy", n * n * h * h / (8.0 * mass * box_length * box_length))
}

/// 조화 진동자: E = hf(v + ½)
pub fn harmonic_oscillator_energy(c: &Constants, v: u32, frequency: f64) -> Result<f64, CalcError> {
    validate::positive("frequency", frequency)?;
    validate::finite_result("energy", c.planck_constant * frequency * (f64::from(v) + 0.5))
}

/// 수소 원자: E = −13.6 eV / n²
pub fn hydrogen_energy_level(c: &Constants, n: u32) -> Result<f64, CalcError> {
    let n = validate::at_least_one("n", n)?;
    validate::finite_result("energy", -c.hydrogen_ground_state_ev * c.electron_volt / (n * n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn electron_in_one_nanometre_box() {
        let c = Constants::default();
        let e = particle_in_box_energy(&c, 1, 1e-9, 9.109e-31).unwrap();
        assert_relative_eq!(e, 6.025e-20, max_relative = 1e-3);
        assert!(particle_in_box_energy(&c, 0, 1e-9, 9.109e-31).is_err());
    }

    #[test]
    fn oscillator_ground_state_is_half_quantum() {
        let c = Constants::default();
        let e0 = harmonic_oscillator_energy(&c, 0, 1e13).unwrap();
        assert_relative_eq!(e0, 0.5 * 6.626e-34 * 1e13);
        assert!(harmonic_oscillator_energy(&c, 1, 0.0).is_err());
    }

    #[test]
    fn hydrogen_levels() {
        let c = Constants::default();
        let e1 = hydrogen_energy_level(&c, 1).unwrap();
        let e2 = hydrogen_energy_level(&c, 2).unwrap();
        assert_relative_eq!(e1, -13.6 * 1.602e-19);
        assert_relative_eq!(e2, e1 / 4.0);
        assert!(hydrogen_energy_level(&c, 0).is_err());
    }
}
