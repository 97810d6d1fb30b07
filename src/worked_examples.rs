//! "예제 보기" 화면 내용. 값은 모두 라이브러리 함수로 그때그때 계산한다.

use crate::chemistry::{self, DilutionInput, IdealGasInput};
use crate::constants::Constants;
use crate::error::CalcError;
use crate::format::{format_number, DisplayOptions};
use crate::physics::{self, OhmsLawInput};
use crate::units::{
    convert_energy, convert_pressure, convert_temperature, EnergyUnit, PressureUnit,
    TemperatureUnit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleCategory {
    Chemistry,
    Physics,
    Conversion,
    WorkedProblem,
}

impl ExampleCategory {
    pub fn title(self) -> &'static str {
        match self {
            ExampleCategory::Chemistry => "CHEMISTRY",
            ExampleCategory::Physics => "PHYSICS",
            ExampleCategory::Conversion => "UNIT CONVERSION",
            ExampleCategory::WorkedProblem => "WORKED PROBLEMS",
        }
    }
}

/// 예제 하나. `lines` 는 들여쓰기 없이 화면에 한 줄씩 찍는다.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkedExample {
    pub category: ExampleCategory,
    pub title: &'static str,
    pub lines: Vec<String>,
}

fn example(category: ExampleCategory, title: &'static str, lines: Vec<String>) -> WorkedExample {
    WorkedExample {
        category,
        title,
        lines,
    }
}

/// 전체 예제 목록을 계산한다.
pub fn examples(c: &Constants, opts: &DisplayOptions) -> Result<Vec<WorkedExample>, CalcError> {
    let mut out = chemistry_examples(c, opts)?;
    out.extend(physics_examples(c, opts)?);
    out.extend(conversion_examples(c, opts));
    out.extend(worked_problems(c, opts)?);
    Ok(out)
}

fn chemistry_examples(c: &Constants, opts: &DisplayOptions) -> Result<Vec<WorkedExample>, CalcError> {
    use ExampleCategory::Chemistry;
    let f = |v: f64| format_number(v, opts);

    let glucose = chemistry::molecular_weight("C6H12O6")?;
    let gas = chemistry::ideal_gas_law(
        c,
        IdealGasInput {
            pressure_atm: Some(1.0),
            volume_l: Some(22.4),
            moles: None,
            temperature_k: Some(273.0),
        },
    )?;
    let ph = chemistry::calculate_ph(1e-7)?;
    let diluted = chemistry::dilution(DilutionInput {
        initial_concentration: 2.0,
        initial_volume: 10.0,
        final_concentration: None,
        final_volume: Some(100.0),
    })?;
    let box_energy = chemistry::particle_in_box_energy(c, 1, 1e-9, c.electron_mass)?;

    Ok(vec![
        example(Chemistry, "Molecular weight", vec![format!("C6H12O6 = {} g/mol", f(glucose))]),
        example(
            Chemistry,
            "Ideal gas law",
            vec![
                "Given: P = 1 atm, V = 22.4 L, T = 273 K".to_string(),
                format!("n = {} mol", f(gas.moles)),
            ],
        ),
        example(Chemistry, "pH", vec![format!("[H+] = 1e-7 M -> pH = {}", f(ph))]),
        example(
            Chemistry,
            "Dilution",
            vec![
                "Dilute 10 mL of 2 M HCl to 100 mL".to_string(),
                format!("C2 = {} M", f(diluted.final_concentration)),
            ],
        ),
        example(
            Chemistry,
            "Particle in a box",
            vec![format!("electron, n = 1, L = 1 nm: E = {} J", f(box_energy))],
        ),
    ])
}

fn physics_examples(c: &Constants, opts: &DisplayOptions) -> Result<Vec<WorkedExample>, CalcError> {
    use ExampleCategory::Physics;
    let f = |v: f64| format_number(v, opts);

    let throw = physics::projectile_motion(c, 20.0, 45.0)?;
    let ke = physics::kinetic_energy(2.0, 10.0)?;
    let pe = physics::potential_energy(c, 2.0, 5.0)?;
    let circuit = physics::ohms_law(OhmsLawInput {
        voltage: Some(12.0),
        current: None,
        resistance: Some(3.0),
    })?;
    let watts = physics::electrical_power(Some(circuit.voltage), Some(circuit.current), None)?;
    let sound = physics::wave_speed(440.0, 0.78)?;
    let period = physics::pendulum_period(c, 1.0)?;

    Ok(vec![
        example(
            Physics,
            "Projectile motion",
            vec![
                "Ball thrown at 20 m/s, 45 deg".to_string(),
                format!("Range = {} m", f(throw.range)),
                format!("Max height = {} m", f(throw.max_height)),
            ],
        ),
        example(
            Physics,
            "Mechanical energy",
            vec![
                "2 kg at 10 m/s, 5 m high".to_string(),
                format!("KE = {} J, PE = {} J", f(ke), f(pe)),
                format!("Total = {} J", f(ke + pe)),
            ],
        ),
        example(
            Physics,
            "Ohm's law",
            vec![
                "12 V battery, 3 ohm resistor".to_string(),
                format!("I = {} A", f(circuit.current)),
                format!("P = {} W", f(watts)),
            ],
        ),
        example(
            Physics,
            "Wave speed",
            vec![format!("f = 440 Hz, lambda = 0.78 m -> v = {} m/s", f(sound))],
        ),
        example(
            Physics,
            "Simple pendulum",
            vec![format!("L = 1 m -> T = {} s", f(period))],
        ),
    ])
}

fn conversion_examples(c: &Constants, opts: &DisplayOptions) -> Vec<WorkedExample> {
    use ExampleCategory::Conversion;
    let f = |v: f64| format_number(v, opts);

    let room_k = convert_temperature(c, 25.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
    let room_f = convert_temperature(c, 25.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    let kj_cal = convert_energy(c, 1000.0, EnergyUnit::Joule, EnergyUnit::Calorie);
    let kj_ev = convert_energy(c, 1000.0, EnergyUnit::Joule, EnergyUnit::ElectronVolt);
    let atm = convert_pressure(c, 101_325.0, PressureUnit::Pascal, PressureUnit::Atm);
    let torr = convert_pressure(c, 101_325.0, PressureUnit::Pascal, PressureUnit::Torr);

    vec![
        example(
            Conversion,
            "Temperature",
            vec![format!("25 C = {} K = {} F", f(room_k), f(room_f))],
        ),
        example(
            Conversion,
            "Energy",
            vec![format!("1000 J = {} cal = {} eV", f(kj_cal), f(kj_ev))],
        ),
        example(
            Conversion,
            "Pressure",
            vec![format!("101325 Pa = {} atm = {} Torr", f(atm), f(torr))],
        ),
    ]
}

fn worked_problems(c: &Constants, opts: &DisplayOptions) -> Result<Vec<WorkedExample>, CalcError> {
    use ExampleCategory::WorkedProblem;
    let f = |v: f64| format_number(v, opts);

    let methane = chemistry::stoichiometric_product_mass(5.0, "CH4", "CO2", 1.0)?;

    let t1 = convert_temperature(c, 25.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
    let v2 = chemistry::combined_gas_volume(1.2, 2.5, t1, 1.0, c.stp_temperature)?;

    let kick = physics::projectile_motion(c, 15.0, 30.0)?;

    let pe = physics::potential_energy(c, 0.5, 10.0)?;
    // mgh = ½mv² → v = √(2gh)
    let impact = (2.0 * c.standard_gravity * 10.0).sqrt();
    let ke = physics::kinetic_energy(0.5, impact)?;

    Ok(vec![
        example(
            WorkedProblem,
            "Combustion of methane",
            vec![
                "CH4 + 2O2 -> CO2 + 2H2O; grams of CO2 from 5.0 g CH4?".to_string(),
                format!(
                    "1) M(CH4) = {} g/mol, M(CO2) = {} g/mol",
                    f(methane.reactant_molar_mass),
                    f(methane.product_molar_mass)
                ),
                format!("2) n(CH4) = 5.0 / {} = {} mol", f(methane.reactant_molar_mass), f(methane.reactant_moles)),
                format!("3) n(CO2) = {} mol (1:1)", f(methane.product_moles)),
                format!("4) m(CO2) = {} g", f(methane.product_mass)),
            ],
        ),
        example(
            WorkedProblem,
            "Gas to STP",
            vec![
                "2.5 L at 25 C and 1.2 atm; volume at STP?".to_string(),
                format!("T1 = {} K, T2 = {} K", f(t1), f(c.stp_temperature)),
                format!("V2 = P1V1T2/(P2T1) = {} L", f(v2)),
            ],
        ),
        example(
            WorkedProblem,
            "Kicked ball",
            vec![
                "15 m/s at 30 deg above horizontal".to_string(),
                format!("v0x = {} m/s, v0y = {} m/s", f(kick.v0x), f(kick.v0y)),
                format!("a) max height = {} m", f(kick.max_height)),
                format!("b) range = {} m", f(kick.range)),
                format!("c) flight time = {} s", f(kick.flight_time)),
            ],
        ),
        example(
            WorkedProblem,
            "Energy conservation",
            vec![
                "0.5 kg ball falls from 10 m; speed at the ground?".to_string(),
                format!("PE = mgh = {} J", f(pe)),
                format!("v = sqrt(2gh) = {} m/s", f(impact)),
                format!("check: KE = {} J", f(ke)),
            ],
        ),
    ])
}

/// 공식 요약표 (섹션 제목, 공식 목록)
pub fn formula_reference() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        (
            "CHEMISTRY",
            &[
                "Ideal gas: PV = nRT",
                "pH = -log[H+]",
                "Dilution: C1V1 = C2V2",
                "Rate law: Rate = k[A]^m[B]^n",
                "Arrhenius: k = A*exp(-Ea/RT)",
                "Henderson-Hasselbalch: pH = pKa + log([A-]/[HA])",
                "Nernst: E = E0 - (RT/nF)lnQ",
            ],
        ),
        (
            "PHYSICS",
            &[
                "Kinematics: v = v0 + at, x = v0t + at^2/2",
                "Newton: F = ma",
                "Work: W = Fd*cos(theta), KE = mv^2/2",
                "PE = mgh",
                "Wave: v = f*lambda",
                "Ohm: V = IR",
                "Coulomb: F = kq1q2/r^2",
                "Thin lens: 1/f = 1/do + 1/di",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_is_present() {
        let c = Constants::default();
        let list = examples(&c, &DisplayOptions::default()).expect("examples");
        for cat in [
            ExampleCategory::Chemistry,
            ExampleCategory::Physics,
            ExampleCategory::Conversion,
            ExampleCategory::WorkedProblem,
        ] {
            assert!(list.iter().any(|e| e.category == cat), "{cat:?}");
        }
        assert!(list.iter().all(|e| !e.lines.is_empty()));
    }

    #[test]
    fn glucose_and_ohm_values_are_live() {
        let c = Constants::default();
        let list = examples(&c, &DisplayOptions::default()).expect("examples");
        let mw = list.iter().find(|e| e.title == "Molecular weight").expect("mw");
        assert!(mw.lines[0].contains("180.156"), "{}", mw.lines[0]);
        let ohm = list.iter().find(|e| e.title == "Ohm's law").expect("ohm");
        assert_eq!(ohm.lines[1], "I = 4 A");
        assert_eq!(ohm.lines[2], "P = 48 W");
    }
}
