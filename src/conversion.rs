use thiserror::Error;

use crate::constants::Constants;
use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `K`, `ft`, `lb`, `kcal`, `eV`, `atm`, `mmHg` 등을 사용할 수 있다.
/// 대소문자는 구분하지 않는다.
pub fn convert(
    c: &Constants,
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(c, value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(c, value, from, to))
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(c, value, from, to))
        }
        QuantityKind::Energy => {
            let from = parse_energy_unit(from_unit_str)?;
            let to = parse_energy_unit(to_unit_str)?;
            Ok(convert_energy(c, value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(c, value, from, to))
        }
    }
}

fn unknown(s: &str) -> ConversionError {
    ConversionError::UnknownUnit(s.trim().to_string())
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(unknown(s)),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "cm" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        "km" => Ok(LengthUnit::Kilometer),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        _ => Err(unknown(s)),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "g" => Ok(MassUnit::Gram),
        "lb" | "lbs" | "lbm" => Ok(MassUnit::Pound),
        _ => Err(unknown(s)),
    }
}

fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "j" | "joule" => Ok(EnergyUnit::Joule),
        "kj" | "kilojoule" => Ok(EnergyUnit::Kilojoule),
        "cal" | "calorie" => Ok(EnergyUnit::Calorie),
        "kcal" | "kilocalorie" => Ok(EnergyUnit::KiloCalorie),
        "kwh" => Ok(EnergyUnit::KilowattHour),
        "ev" => Ok(EnergyUnit::ElectronVolt),
        "btu" => Ok(EnergyUnit::Btu),
        _ => Err(unknown(s)),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "atm" => Ok(PressureUnit::Atm),
        "torr" | "mmhg" => Ok(PressureUnit::Torr),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(unknown(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn string_units_are_case_insensitive() {
        let c = Constants::default();
        let v = convert(&c, QuantityKind::Pressure, 760.0, "mmHg", "ATM").unwrap();
        assert_abs_diff_eq!(v, 1.0, epsilon = 1e-4);
        let v = convert(&c, QuantityKind::Energy, 1.0, "kWh", "j").unwrap();
        assert_abs_diff_eq!(v, 3.6e6, epsilon = 1e-6);
    }

    #[test]
    fn unknown_unit_is_reported() {
        let c = Constants::default();
        assert_eq!(
            convert(&c, QuantityKind::Length, 1.0, "m", "furlong"),
            Err(ConversionError::UnknownUnit("furlong".into()))
        );
        // 다른 물리량의 단위도 거부
        assert!(convert(&c, QuantityKind::Mass, 1.0, "kg", "atm").is_err());
    }
}
