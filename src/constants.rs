//! 물리/수학 상수와 단위 환산 계수 테이블.
//!
//! 프로그램 시작 시 한 번 만들어 `&Constants` 로 계산 함수에 넘긴다.
//! config.toml 의 `[constants]` 테이블로 개별 값을 덮어쓸 수 있다.

use serde::{Deserialize, Serialize};

/// 상수 테이블. 필드 단위는 주석에 표기한 단위(별도 표기 없으면 SI)를 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    pub pi: f64,
    pub euler: f64,

    /// m/s
    pub speed_of_light: f64,
    /// J·s
    pub planck_constant: f64,
    /// ħ, J·s
    pub planck_reduced: f64,
    /// J/K
    pub boltzmann_constant: f64,
    /// mol⁻¹
    pub avogadro_number: f64,
    /// C
    pub elementary_charge: f64,
    /// kg
    pub electron_mass: f64,
    pub proton_mass: f64,
    pub neutron_mass: f64,
    pub atomic_mass_unit: f64,

    /// L·atm/(mol·K)
    pub gas_constant_l_atm: f64,
    /// J/(mol·K)
    pub gas_constant_j: f64,

    /// m/s²
    pub standard_gravity: f64,
    /// N·m²/kg²
    pub gravitational_constant: f64,

    /// N·m²/C²
    pub coulomb_constant: f64,
    /// C²/(N·m²)
    pub vacuum_permittivity: f64,
    /// N/A²
    pub vacuum_permeability: f64,
    /// C/mol
    pub faraday_constant: f64,

    /// J
    pub electron_volt: f64,
    /// J
    pub calorie: f64,
    /// J
    pub btu: f64,

    /// m
    pub bohr_radius: f64,
    /// m⁻¹
    pub rydberg_constant: f64,
    pub fine_structure_constant: f64,
    /// 수소 바닥 상태 에너지 크기, eV
    pub hydrogen_ground_state_ev: f64,

    /// W/(m²·K⁴)
    pub stefan_boltzmann: f64,
    /// m·K
    pub wien_displacement: f64,

    /// K
    pub stp_temperature: f64,
    /// Pa
    pub stp_pressure: f64,

    /// kg/m³
    pub water_density: f64,
    /// g/mol
    pub water_molar_mass: f64,
    /// L/mol (STP)
    pub ideal_gas_molar_volume: f64,

    /// Wb
    pub magnetic_flux_quantum: f64,
    /// S
    pub conductance_quantum: f64,
    /// Ω
    pub resistance_quantum: f64,

    // 단위 환산 계수
    pub cm_to_m: f64,
    pub mm_to_m: f64,
    pub km_to_m: f64,
    pub inch_to_m: f64,
    pub foot_to_m: f64,
    pub g_to_kg: f64,
    pub lb_to_kg: f64,
    pub cal_to_j: f64,
    pub kcal_to_j: f64,
    pub kwh_to_j: f64,
    pub atm_to_pa: f64,
    pub torr_to_pa: f64,
    pub psi_to_pa: f64,
}

impl Default for Constants {
    fn default() -> Self {
        let pi = std::f64::consts::PI;
        Self {
            pi,
            euler: std::f64::consts::E,
            speed_of_light: 2.998e8,
            planck_constant: 6.626e-34,
            planck_reduced: 1.055e-34,
            boltzmann_constant: 1.381e-23,
            avogadro_number: 6.022e23,
            elementary_charge: 1.602e-19,
            electron_mass: 9.109e-31,
            proton_mass: 1.673e-27,
            neutron_mass: 1.675e-27,
            atomic_mass_unit: 1.661e-27,
            gas_constant_l_atm: 0.08206,
            gas_constant_j: 8.314,
            standard_gravity: 9.807,
            gravitational_constant: 6.674e-11,
            coulomb_constant: 8.988e9,
            vacuum_permittivity: 8.854e-12,
            vacuum_permeability: 4e-7 * pi,
            faraday_constant: 96485.0,
            electron_volt: 1.602e-19,
            calorie: 4.184,
            btu: 1055.0,
            bohr_radius: 5.292e-11,
            rydberg_constant: 1.097e7,
            fine_structure_constant: 7.297e-3,
            hydrogen_ground_state_ev: 13.6,
            stefan_boltzmann: 5.670e-8,
            wien_displacement: 2.898e-3,
            stp_temperature: 273.15,
            stp_pressure: 101_325.0,
            water_density: 1000.0,
            water_molar_mass: 18.015,
            ideal_gas_molar_volume: 22.414,
            magnetic_flux_quantum: 2.068e-15,
            conductance_quantum: 7.748e-5,
            resistance_quantum: 12906.0,
            cm_to_m: 0.01,
            mm_to_m: 0.001,
            km_to_m: 1000.0,
            inch_to_m: 0.0254,
            foot_to_m: 0.3048,
            g_to_kg: 0.001,
            lb_to_kg: 0.453592,
            cal_to_j: 4.184,
            kcal_to_j: 4184.0,
            kwh_to_j: 3.6e6,
            atm_to_pa: 101_325.0,
            torr_to_pa: 133.322,
            psi_to_pa: 6895.0,
        }
    }
}

/// 상수 목록 한 줄.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantEntry {
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

const fn entry(name: &'static str, symbol: &'static str, value: f64, unit: &'static str) -> ConstantEntry {
    ConstantEntry {
        name,
        symbol,
        value,
        unit,
    }
}

impl Constants {
    /// 이름으로 상수를 조회한다. 대소문자는 구분하지 않는다.
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.find(name).map(|e| e.value)
    }

    /// 이름 또는 기호로 목록 항목을 찾는다. 기호는 대소문자를 구분한다.
    pub fn find(&self, name: &str) -> Option<ConstantEntry> {
        let key = name.trim();
        self.entries()
            .into_iter()
            .find(|e| e.name.eq_ignore_ascii_case(key) || e.symbol == key)
    }

    /// 화면 표시용 전체 목록.
    pub fn entries(&self) -> Vec<ConstantEntry> {
        vec![
            entry("pi", "π", self.pi, ""),
            entry("euler", "e", self.euler, ""),
            entry("speed_of_light", "c", self.speed_of_light, "m/s"),
            entry("planck_constant", "h", self.planck_constant, "J·s"),
            entry("planck_reduced", "ħ", self.planck_reduced, "J·s"),
            entry("boltzmann_constant", "k_B", self.boltzmann_constant, "J/K"),
            entry("avogadro_number", "N_A", self.avogadro_number, "1/mol"),
            entry("elementary_charge", "q_e", self.elementary_charge, "C"),
            entry("electron_mass", "m_e", self.electron_mass, "kg"),
            entry("proton_mass", "m_p", self.proton_mass, "kg"),
            entry("neutron_mass", "m_n", self.neutron_mass, "kg"),
            entry("atomic_mass_unit", "u", self.atomic_mass_unit, "kg"),
            entry("gas_constant_l_atm", "R", self.gas_constant_l_atm, "L·atm/(mol·K)"),
            entry("gas_constant_j", "R_J", self.gas_constant_j, "J/(mol·K)"),
            entry("standard_gravity", "g", self.standard_gravity, "m/s²"),
            entry("gravitational_constant", "G", self.gravitational_constant, "N·m²/kg²"),
            entry("coulomb_constant", "k", self.coulomb_constant, "N·m²/C²"),
            entry("vacuum_permittivity", "ε0", self.vacuum_permittivity, "C²/(N·m²)"),
            entry("vacuum_permeability", "μ0", self.vacuum_permeability, "N/A²"),
            entry("faraday_constant", "F", self.faraday_constant, "C/mol"),
            entry("electron_volt", "eV", self.electron_volt, "J"),
            entry("calorie", "cal", self.calorie, "J"),
            entry("btu", "BTU", self.btu, "J"),
            entry("bohr_radius", "a0", self.bohr_radius, "m"),
            entry("rydberg_constant", "R∞", self.rydberg_constant, "1/m"),
            entry("fine_structure_constant", "α", self.fine_structure_constant, ""),
            entry("hydrogen_ground_state_ev", "E1", self.hydrogen_ground_state_ev, "eV"),
            entry("stefan_boltzmann", "σ", self.stefan_boltzmann, "W/(m²·K⁴)"),
            entry("wien_displacement", "b", self.wien_displacement, "m·K"),
            entry("stp_temperature", "T_STP", self.stp_temperature, "K"),
            entry("stp_pressure", "P_STP", self.stp_pressure, "Pa"),
            entry("water_density", "ρ_w", self.water_density, "kg/m³"),
            entry("water_molar_mass", "M_w", self.water_molar_mass, "g/mol"),
            entry("ideal_gas_molar_volume", "V_m", self.ideal_gas_molar_volume, "L/mol"),
            entry("magnetic_flux_quantum", "Φ0", self.magnetic_flux_quantum, "Wb"),
            entry("conductance_quantum", "G0", self.conductance_quantum, "S"),
            entry("resistance_quantum", "R_K", self.resistance_quantum, "Ω"),
            entry("cm_to_m", "cm→m", self.cm_to_m, ""),
            entry("mm_to_m", "mm→m", self.mm_to_m, ""),
            entry("km_to_m", "km→m", self.km_to_m, ""),
            entry("inch_to_m", "in→m", self.inch_to_m, ""),
            entry("foot_to_m", "ft→m", self.foot_to_m, ""),
            entry("g_to_kg", "g→kg", self.g_to_kg, ""),
            entry("lb_to_kg", "lb→kg", self.lb_to_kg, ""),
            entry("cal_to_j", "cal→J", self.cal_to_j, ""),
            entry("kcal_to_j", "kcal→J", self.kcal_to_j, ""),
            entry("kwh_to_j", "kWh→J", self.kwh_to_j, ""),
            entry("atm_to_pa", "atm→Pa", self.atm_to_pa, ""),
            entry("torr_to_pa", "Torr→Pa", self.torr_to_pa, ""),
            entry("psi_to_pa", "psi→Pa", self.psi_to_pa, ""),
        ]
    }

    /// 도(degree)를 라디안으로.
    pub fn degrees_to_radians(&self, degrees: f64) -> f64 {
        degrees * self.pi / 180.0
    }

    /// 라디안을 도(degree)로.
    pub fn radians_to_degrees(&self, radians: f64) -> f64 {
        radians * 180.0 / self.pi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_and_symbol() {
        let c = Constants::default();
        assert_eq!(c.lookup("gas_constant_l_atm"), Some(0.08206));
        assert_eq!(c.lookup("Planck_Constant"), Some(6.626e-34));
        assert_eq!(c.lookup("N_A"), Some(6.022e23));
        assert_eq!(c.lookup("no_such_constant"), None);
    }

    #[test]
    fn every_entry_is_reachable_by_lookup() {
        let c = Constants::default();
        for e in c.entries() {
            assert_eq!(c.lookup(e.name), Some(e.value), "{}", e.name);
        }
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let c: Constants = toml::from_str("standard_gravity = 1.62").expect("parse");
        assert_eq!(c.standard_gravity, 1.62);
        assert_eq!(c.speed_of_light, Constants::default().speed_of_light);
    }
}
