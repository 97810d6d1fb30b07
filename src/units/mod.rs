//! 단위 정의 및 변환 모듈 모음. 환산 계수는 [`Constants`](crate::constants::Constants) 에서 읽는다.

pub mod energy;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;

pub use energy::{convert_energy, EnergyUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
