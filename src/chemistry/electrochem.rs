use crate::constants::Constants;
use crate::error::CalcError;
use crate::validate;

/// Nernst 식 기본 온도 [K]
pub const NERNST_DEFAULT_TEMPERATURE_K: f64 = 298.15;

/// Nernst: E = E° − (RT/nF)·ln(Q)
pub fn nernst(
    c: &Constants,
    standard_potential: f64,
    electrons: u32,
    reaction_quotient: f64,
    temperature_k: f64,
) -> Result<f64, CalcError> {
    validate::finite("standard_potential", standard_potential)?;
    let n = validate::at_least_one("electrons", electrons)?;
    validate::positive("reaction_quotient", reaction_quotient)?;
    validate::positive("temperature", temperature_k)?;
    let factor = c.gas_constant_j * temperature_k / (n * c.faraday_constant);
    validate::finite_result("cell_potential", standard_potential - factor * reaction_quotient.ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_quotient_gives_standard_potential() {
        let c = Constants::default();
        assert_eq!(nernst(&c, 1.10, 2, 1.0, NERNST_DEFAULT_TEMPERATURE_K), Ok(1.10));
    }

    #[test]
    fn daniell_cell_with_quotient_ten() {
        let c = Constants::default();
        let e = nernst(&c, 1.10, 2, 10.0, NERNST_DEFAULT_TEMPERATURE_K).unwrap();
        let expected = 1.10 - 8.314 * 298.15 / (2.0 * 96485.0) * 10f64.ln();
        assert_relative_eq!(e, expected);
    }

    #[test]
    fn rejects_zero_electrons_and_non_positive_quotient() {
        let c = Constants::default();
        assert!(nernst(&c, 1.10, 0, 1.0, 298.15).is_err());
        assert!(nernst(&c, 1.10, 2, 0.0, 298.15).is_err());
    }
}
