use serde::{Deserialize, Serialize};

use crate::constants::Constants;

/// 에너지 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Calorie,
    KiloCalorie,
    KilowattHour,
    ElectronVolt,
    Btu,
}

fn joules_per(c: &Constants, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => 1.0,
        EnergyUnit::Kilojoule => 1000.0,
        EnergyUnit::Calorie => c.cal_to_j,
        EnergyUnit::KiloCalorie => c.kcal_to_j,
        EnergyUnit::KilowattHour => c.kwh_to_j,
        EnergyUnit::ElectronVolt => c.electron_volt,
        EnergyUnit::Btu => c.btu,
    }
}

/// 에너지를 다른 단위로 변환한다.
pub fn convert_energy(c: &Constants, value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    if from == to {
        return value;
    }
    value * joules_per(c, from) / joules_per(c, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kcal_and_kwh() {
        let c = Constants::default();
        assert_relative_eq!(
            convert_energy(&c, 1.0, EnergyUnit::KiloCalorie, EnergyUnit::Calorie),
            1000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert_energy(&c, 1.0, EnergyUnit::KilowattHour, EnergyUnit::Kilojoule),
            3600.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert_energy(&c, 1.602e-19, EnergyUnit::Joule, EnergyUnit::ElectronVolt),
            1.0,
            max_relative = 1e-12
        );
    }
}
