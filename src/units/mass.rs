use serde::{Deserialize, Serialize};

use crate::constants::Constants;

/// 질량 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Pound,
}

fn kilograms_per(c: &Constants, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => 1.0,
        MassUnit::Gram => c.g_to_kg,
        MassUnit::Pound => c.lb_to_kg,
    }
}

/// 질량을 다른 단위로 변환한다.
pub fn convert_mass(c: &Constants, value: f64, from: MassUnit, to: MassUnit) -> f64 {
    if from == to {
        return value;
    }
    value * kilograms_per(c, from) / kilograms_per(c, to)
}
