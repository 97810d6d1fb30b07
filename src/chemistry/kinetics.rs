use crate::constants::Constants;
use crate::error::{CalcError, Constraint};
use crate::validate;

/// 속도 법칙 Rate = k[A]^a[B]^b 에서 k 를 구한다.
pub fn rate_constant(
    rate: f64,
    conc_a: f64,
    conc_b: f64,
    order_a: f64,
    order_b: f64,
) -> Result<f64, CalcError> {
    validate::positive("rate", rate)?;
    validate::positive("conc_a", conc_a)?;
    validate::positive("conc_b", conc_b)?;
    validate::finite("order_a", order_a)?;
    validate::finite("order_b", order_b)?;
    let denominator = conc_a.powf(order_a) * conc_b.powf(order_b);
    // 차수가 매우 크면 underflow 로 0이 될 수 있다
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(CalcError::domain("concentration_terms", Constraint::NonZero));
    }
    validate::finite_result("rate_constant", rate / denominator)
}

/// 전체 반응 차수
pub fn overall_order(order_a: f64, order_b: f64) -> f64 {
    order_a + order_b
}

/// Arrhenius: k = A·exp(−Ea/RT), R = 8.314 J/(mol·K), Ea 는 J/mol.
pub fn arrhenius(
    c: &Constants,
    pre_exponential: f64,
    activation_energy: f64,
    temperature_k: f64,
) -> Result<f64, CalcError> {
    validate::positive("pre_exponential", pre_exponential)?;
    validate::non_negative("activation_energy", activation_energy)?;
    validate::positive("temperature", temperature_k)?;
    validate::finite_result(
        "rate_constant",
        pre_exponential * (-activation_energy / (c.gas_constant_j * temperature_k)).exp(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn second_order_rate_constant() {
        // Rate = 0.02, [A]=0.1 (1차), [B]=0.2 (1차) → k = 1.0
        assert_relative_eq!(rate_constant(0.02, 0.1, 0.2, 1.0, 1.0).unwrap(), 1.0, max_relative = 1e-12);
        assert_eq!(overall_order(1.0, 1.0), 2.0);
        assert!(rate_constant(0.0, 0.1, 0.2, 1.0, 1.0).is_err());
    }

    #[test]
    fn arrhenius_zero_barrier_returns_prefactor() {
        let c = Constants::default();
        assert_eq!(arrhenius(&c, 1e13, 0.0, 300.0), Ok(1e13));
        let k = arrhenius(&c, 1e13, 50_000.0, 300.0).unwrap();
        assert_relative_eq!(k, 1e13 * (-50_000.0f64 / (8.314 * 300.0)).exp(), max_relative = 1e-12);
        assert!(arrhenius(&c, 1e13, -1.0, 300.0).is_err());
        assert!(arrhenius(&c, 1e13, 1.0, 0.0).is_err());
    }
}
