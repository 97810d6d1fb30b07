use serde::{Deserialize, Serialize};

use crate::constants::Constants;

/// 길이 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Kilometer,
    Inch,
    Foot,
}

/// 1 단위당 m
fn meters_per(c: &Constants, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => 1.0,
        LengthUnit::Centimeter => c.cm_to_m,
        LengthUnit::Millimeter => c.mm_to_m,
        LengthUnit::Kilometer => c.km_to_m,
        LengthUnit::Inch => c.inch_to_m,
        LengthUnit::Foot => c.foot_to_m,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(c: &Constants, value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * meters_per(c, from) / meters_per(c, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn foot_to_inch() {
        let c = Constants::default();
        assert_abs_diff_eq!(
            convert_length(&c, 1.0, LengthUnit::Foot, LengthUnit::Inch),
            12.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            convert_length(&c, 2.5, LengthUnit::Kilometer, LengthUnit::Centimeter),
            250_000.0,
            epsilon = 1e-6
        );
    }
}
