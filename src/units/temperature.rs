use serde::{Deserialize, Serialize};

use crate::constants::Constants;

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

/// 주어진 값을 켈빈으로 변환한다. 섭씨 0도 = STP 온도.
pub fn to_kelvin(c: &Constants, value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + c.stp_temperature,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + c.stp_temperature,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(c: &Constants, value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - c.stp_temperature,
        TemperatureUnit::Fahrenheit => (value_k - c.stp_temperature) * 9.0 / 5.0 + 32.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(
    c: &Constants,
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> f64 {
    if from == to {
        return value;
    }
    from_kelvin(c, to_kelvin(c, value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fixed_points() {
        let c = Constants::default();
        assert_abs_diff_eq!(
            convert_temperature(&c, 100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            212.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            convert_temperature(&c, 25.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
            298.15,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            convert_temperature(&c, -40.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
            -40.0,
            epsilon = 1e-9
        );
    }
}
