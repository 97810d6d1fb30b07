use serde::{Deserialize, Serialize};

use crate::constants::Constants;

/// 압력 단위 (절대압)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Atm,
    /// Torr 와 mmHg 는 같은 값으로 취급한다.
    Torr,
    Psi,
}

fn pascals_per(c: &Constants, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => 1.0,
        PressureUnit::KiloPascal => 1000.0,
        PressureUnit::Atm => c.atm_to_pa,
        PressureUnit::Torr => c.torr_to_pa,
        PressureUnit::Psi => c.psi_to_pa,
    }
}

/// 압력을 다른 단위로 변환한다.
pub fn convert_pressure(c: &Constants, value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    if from == to {
        return value;
    }
    value * pascals_per(c, from) / pascals_per(c, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn atm_to_torr_and_kpa() {
        let c = Constants::default();
        assert_abs_diff_eq!(
            convert_pressure(&c, 1.0, PressureUnit::Atm, PressureUnit::Torr),
            760.0,
            epsilon = 0.01
        );
        assert_abs_diff_eq!(
            convert_pressure(&c, 1.0, PressureUnit::Atm, PressureUnit::KiloPascal),
            101.325,
            epsilon = 1e-9
        );
    }
}
