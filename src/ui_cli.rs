use std::io::{self, Write};

use crate::app::AppError;
use crate::chemistry::{
    self, DilutionInput, DilutionVariable, GasLawVariable, IdealGasInput,
    NERNST_DEFAULT_TEMPERATURE_K,
};
use crate::config::{AngleUnit, Config};
use crate::conversion;
use crate::format::{self, format_result, render_table};
use crate::i18n::{keys, Translator};
use crate::material_db::{self, MaterialData};
use crate::physics::{
    self, LensInput, LensVariable, OhmVariable, OhmsLawInput, MAGNETIC_FORCE_DEFAULT_ANGLE_DEG,
};
use crate::quantity::QuantityKind;
use crate::worked_examples;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Chemistry,
    Physics,
    UnitConversion,
    Constants,
    Examples,
    Settings,
    Help,
    Exit,
}

impl MenuChoice {
    /// 메뉴 번호 문자열을 선택지로 바꾼다.
    pub fn parse(sel: &str) -> Option<Self> {
        Some(match sel.trim() {
            "1" => MenuChoice::Chemistry,
            "2" => MenuChoice::Physics,
            "3" => MenuChoice::UnitConversion,
            "4" => MenuChoice::Constants,
            "5" => MenuChoice::Examples,
            "6" => MenuChoice::Settings,
            "7" => MenuChoice::Help,
            "0" => MenuChoice::Exit,
            _ => return None,
        })
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator, cfg: &Config) -> Result<MenuChoice, AppError> {
    clear_screen(cfg);
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CHEMISTRY,
        keys::MAIN_MENU_PHYSICS,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_CONSTANTS,
        keys::MAIN_MENU_EXAMPLES,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_HELP,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::GENERAL_PROMPT_SELECT))?;
        match MenuChoice::parse(&sel) {
            Some(choice) => {
                tracing::debug!(?choice, "main menu");
                return Ok(choice);
            }
            None => println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION)),
        }
    }
}

/// 하위 메뉴 공통 루프. 0 을 고르면 돌아간다.
///
/// `dispatch` 가 `None` 을 돌려주면 없는 번호로 본다. 계산 오류는 출력만 하고 메뉴를 유지한다.
fn submenu(
    tr: &Translator,
    cfg: &Config,
    title_key: &str,
    option_keys: &[&str],
    mut dispatch: impl FnMut(&str) -> Option<Result<(), AppError>>,
) -> Result<(), AppError> {
    loop {
        clear_screen(cfg);
        println!("{}", tr.t(title_key));
        for key in option_keys {
            println!("{}", tr.t(key));
        }
        println!("{}", tr.t(keys::GENERAL_BACK));
        let sel = read_line(&tr.t(keys::GENERAL_PROMPT_SELECT))?;
        let sel = sel.trim();
        if sel == "0" {
            return Ok(());
        }
        match dispatch(sel) {
            Some(result) => {
                report(tr, result)?;
                pause(tr)?;
            }
            None => {
                println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION));
                pause(tr)?;
            }
        }
    }
}

/// 복구 가능한 오류는 출력하고 삼킨다.
pub fn report(tr: &Translator, result: Result<(), AppError>) -> Result<(), AppError> {
    match result {
        Err(e) if e.is_recoverable() => {
            tracing::debug!(error = %e, "calculation rejected");
            println!("{}: {e}", tr.t(keys::GENERAL_ERROR_PREFIX));
            Ok(())
        }
        other => other,
    }
}

// ---------------------------------------------------------------- 화학

/// 화학 메뉴를 처리한다.
pub fn handle_chemistry(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    submenu(
        tr,
        cfg,
        keys::CHEMISTRY_TITLE,
        &[
            keys::CHEMISTRY_MOLECULAR_WEIGHT,
            keys::CHEMISTRY_IDEAL_GAS,
            keys::CHEMISTRY_PH,
            keys::CHEMISTRY_DILUTION,
            keys::CHEMISTRY_RATE_LAW,
            keys::CHEMISTRY_QUANTUM,
            keys::CHEMISTRY_ARRHENIUS,
            keys::CHEMISTRY_BUFFER,
            keys::CHEMISTRY_NERNST,
            keys::CHEMISTRY_BEER_LAMBERT,
            keys::CHEMISTRY_VAN_DER_WAALS,
            keys::CHEMISTRY_COMBINED_GAS,
            keys::CHEMISTRY_STOICHIOMETRY,
        ],
        |sel| {
            Some(match sel {
                "1" => molecular_weight_calc(tr, cfg),
                "2" => ideal_gas_calc(tr, cfg),
                "3" => ph_calc(tr, cfg),
                "4" => dilution_calc(tr, cfg),
                "5" => rate_law_calc(tr, cfg),
                "6" => quantum_calc(tr, cfg),
                "7" => arrhenius_calc(tr, cfg),
                "8" => buffer_calc(tr, cfg),
                "9" => nernst_calc(tr, cfg),
                "10" => beer_lambert_calc(tr, cfg),
                "11" => van_der_waals_calc(tr, cfg),
                "12" => combined_gas_calc(tr, cfg),
                "13" => stoichiometry_calc(tr, cfg),
                _ => return None,
            })
        },
    )
}

fn molecular_weight_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let formula = read_line(&format!("{}: ", tr.t(keys::Q_FORMULA)))?;
    let mw = chemistry::molecular_weight(&formula)?;
    show(tr, cfg, keys::Q_MOLAR_MASS, mw, "g/mol");
    Ok(())
}

fn ideal_gas_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GENERAL_BLANK_IS_UNKNOWN));
    let input = IdealGasInput {
        pressure_atm: read_optional_f64(tr, &ask(tr, keys::Q_PRESSURE, "atm"))?,
        volume_l: read_optional_f64(tr, &ask(tr, keys::Q_VOLUME, "L"))?,
        moles: read_optional_f64(tr, &ask(tr, keys::Q_MOLES, "mol"))?,
        temperature_k: read_optional_f64(tr, &ask(tr, keys::Q_TEMPERATURE, "K"))?,
    };
    let r = chemistry::ideal_gas_law(&cfg.constants, input)?;
    let solved = match r.solved_for {
        GasLawVariable::Pressure => keys::Q_PRESSURE,
        GasLawVariable::Volume => keys::Q_VOLUME,
        GasLawVariable::Moles => keys::Q_MOLES,
        GasLawVariable::Temperature => keys::Q_TEMPERATURE,
    };
    println!("{}: {}", tr.t(keys::GENERAL_SOLVED_FOR), tr.t(solved));
    show(tr, cfg, keys::Q_PRESSURE, r.pressure_atm, "atm");
    show(tr, cfg, keys::Q_VOLUME, r.volume_l, "L");
    show(tr, cfg, keys::Q_MOLES, r.moles, "mol");
    show(tr, cfg, keys::Q_TEMPERATURE, r.temperature_k, "K");
    Ok(())
}

fn ph_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    for key in [keys::PH_OPTION_PH, keys::PH_OPTION_CONCENTRATION, keys::PH_OPTION_POH] {
        println!("{}", tr.t(key));
    }
    let sel = read_line(&tr.t(keys::GENERAL_PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let h = read_f64(tr, &ask(tr, keys::Q_H_CONCENTRATION, "M"))?;
            show(tr, cfg, keys::Q_PH, chemistry::calculate_ph(h)?, "");
        }
        "2" => {
            let ph = read_f64(tr, &ask(tr, keys::Q_PH, ""))?;
            show(tr, cfg, keys::Q_H_CONCENTRATION, chemistry::ph_to_concentration(ph)?, "M");
        }
        "3" => {
            let ph = read_f64(tr, &ask(tr, keys::Q_PH, ""))?;
            show(tr, cfg, keys::Q_POH, chemistry::poh_from_ph(ph)?, "");
        }
        _ => println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION)),
    }
    Ok(())
}

fn dilution_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let initial_concentration = read_f64(tr, &ask(tr, keys::Q_INITIAL_CONCENTRATION, "M"))?;
    let initial_volume = read_f64(tr, &ask(tr, keys::Q_INITIAL_VOLUME, "L"))?;
    println!("{}", tr.t(keys::GENERAL_BLANK_IS_UNKNOWN));
    let input = DilutionInput {
        initial_concentration,
        initial_volume,
        final_concentration: read_optional_f64(tr, &ask(tr, keys::Q_FINAL_CONCENTRATION, "M"))?,
        final_volume: read_optional_f64(tr, &ask(tr, keys::Q_FINAL_VOLUME, "L"))?,
    };
    let r = chemistry::dilution(input)?;
    let solved = match r.solved_for {
        DilutionVariable::FinalConcentration => keys::Q_FINAL_CONCENTRATION,
        DilutionVariable::FinalVolume => keys::Q_FINAL_VOLUME,
    };
    println!("{}: {}", tr.t(keys::GENERAL_SOLVED_FOR), tr.t(solved));
    show(tr, cfg, keys::Q_FINAL_CONCENTRATION, r.final_concentration, "M");
    show(tr, cfg, keys::Q_FINAL_VOLUME, r.final_volume, "L");
    Ok(())
}

fn rate_law_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("Rate = k[A]^a[B]^b");
    let rate = read_f64(tr, &ask(tr, keys::Q_RATE, "M/s"))?;
    let conc_a = read_f64(tr, &ask(tr, keys::Q_CONC_A, "M"))?;
    let conc_b = read_f64(tr, &ask(tr, keys::Q_CONC_B, "M"))?;
    let order_a = read_f64(tr, &ask(tr, keys::Q_ORDER_A, ""))?;
    let order_b = read_f64(tr, &ask(tr, keys::Q_ORDER_B, ""))?;
    let k = chemistry::rate_constant(rate, conc_a, conc_b, order_a, order_b)?;
    show(tr, cfg, keys::Q_RATE_CONSTANT, k, "");
    show(tr, cfg, keys::Q_OVERALL_ORDER, chemistry::overall_order(order_a, order_b), "");
    Ok(())
}

fn quantum_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    for key in [
        keys::QUANTUM_OPTION_BOX,
        keys::QUANTUM_OPTION_OSCILLATOR,
        keys::QUANTUM_OPTION_HYDROGEN,
    ] {
        println!("{}", tr.t(key));
    }
    let c = &cfg.constants;
    let sel = read_line(&tr.t(keys::GENERAL_PROMPT_SELECT))?;
    let energy = match sel.trim() {
        "1" => {
            let n = read_u32(tr, &ask(tr, keys::Q_QUANTUM_NUMBER, ""))?;
            let length = read_f64(tr, &ask(tr, keys::Q_BOX_LENGTH, "m"))?;
            let mass = read_f64(tr, &ask(tr, keys::Q_PARTICLE_MASS, "kg"))?;
            chemistry::particle_in_box_energy(c, n, length, mass)?
        }
        "2" => {
            let v = read_u32(tr, &ask(tr, keys::Q_VIBRATIONAL_NUMBER, ""))?;
            let freq = read_f64(tr, &ask(tr, keys::Q_FREQUENCY, "Hz"))?;
            chemistry::harmonic_oscillator_energy(c, v, freq)?
        }
        "3" => {
            let n = read_u32(tr, &ask(tr, keys::Q_QUANTUM_NUMBER, ""))?;
            chemistry::hydrogen_energy_level(c, n)?
        }
        _ => {
            println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION));
            return Ok(());
        }
    };
    show(tr, cfg, keys::Q_ENERGY, energy, "J");
    show(tr, cfg, keys::Q_ENERGY, energy / c.electron_volt, "eV");
    Ok(())
}

fn arrhenius_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let a = read_f64(tr, &ask(tr, keys::Q_PRE_EXPONENTIAL, ""))?;
    let ea = read_f64(tr, &ask(tr, keys::Q_ACTIVATION_ENERGY, "J/mol"))?;
    let t = read_f64(tr, &ask(tr, keys::Q_TEMPERATURE, "K"))?;
    let k = chemistry::arrhenius(&cfg.constants, a, ea, t)?;
    show(tr, cfg, keys::Q_RATE_CONSTANT, k, "");
    Ok(())
}

fn buffer_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let pka = read_f64(tr, &ask(tr, keys::Q_PKA, ""))?;
    let base = read_f64(tr, &ask(tr, keys::Q_BASE_CONCENTRATION, "M"))?;
    let acid = read_f64(tr, &ask(tr, keys::Q_ACID_CONCENTRATION, "M"))?;
    show(tr, cfg, keys::Q_PH, chemistry::henderson_hasselbalch(pka, base, acid)?, "");
    Ok(())
}

fn nernst_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let e0 = read_f64(tr, &ask(tr, keys::Q_STANDARD_POTENTIAL, "V"))?;
    let n = read_u32(tr, &ask(tr, keys::Q_ELECTRONS, ""))?;
    let q = read_f64(tr, &ask(tr, keys::Q_REACTION_QUOTIENT, ""))?;
    let t = read_optional_f64(tr, &ask(tr, keys::Q_TEMPERATURE, "K, 298.15"))?
        .unwrap_or(NERNST_DEFAULT_TEMPERATURE_K);
    let e = chemistry::nernst(&cfg.constants, e0, n, q, t)?;
    show(tr, cfg, keys::Q_CELL_POTENTIAL, e, "V");
    Ok(())
}

fn beer_lambert_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let eps = read_f64(tr, &ask(tr, keys::Q_MOLAR_ABSORPTIVITY, "L/(mol·cm)"))?;
    let l = read_f64(tr, &ask(tr, keys::Q_PATH_LENGTH, "cm"))?;
    let conc = read_f64(tr, &ask(tr, keys::Q_CONCENTRATION, "M"))?;
    show(tr, cfg, keys::Q_ABSORBANCE, chemistry::beer_lambert(eps, l, conc)?, "");
    Ok(())
}

fn van_der_waals_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let n = read_f64(tr, &ask(tr, keys::Q_MOLES, "mol"))?;
    let v = read_f64(tr, &ask(tr, keys::Q_VOLUME, "m³"))?;
    let t = read_f64(tr, &ask(tr, keys::Q_TEMPERATURE, "K"))?;
    let a = read_f64(tr, &ask(tr, keys::Q_VDW_A, "Pa·m⁶/mol²"))?;
    let b = read_f64(tr, &ask(tr, keys::Q_VDW_B, "m³/mol"))?;
    let p = chemistry::van_der_waals_pressure(&cfg.constants, n, v, t, a, b)?;
    show(tr, cfg, keys::Q_PRESSURE, p, "Pa");
    Ok(())
}

fn combined_gas_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let p1 = read_f64(tr, &ask(tr, keys::Q_P1, "atm"))?;
    let v1 = read_f64(tr, &ask(tr, keys::Q_V1, "L"))?;
    let t1 = read_f64(tr, &ask(tr, keys::Q_T1, "K"))?;
    let p2 = read_f64(tr, &ask(tr, keys::Q_P2, "atm"))?;
    let t2 = read_f64(tr, &ask(tr, keys::Q_T2, "K"))?;
    show(tr, cfg, keys::Q_V2, chemistry::combined_gas_volume(p1, v1, t1, p2, t2)?, "L");
    Ok(())
}

fn stoichiometry_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let mass = read_f64(tr, &ask(tr, keys::Q_REACTANT_MASS, "g"))?;
    let reactant = read_line(&format!("{}: ", tr.t(keys::Q_REACTANT_FORMULA)))?;
    let product = read_line(&format!("{}: ", tr.t(keys::Q_PRODUCT_FORMULA)))?;
    let ratio = read_f64(tr, &ask(tr, keys::Q_MOLE_RATIO, ""))?;
    let r = chemistry::stoichiometric_product_mass(mass, &reactant, &product, ratio)?;
    show(tr, cfg, keys::Q_REACTANT_MOLES, r.reactant_moles, "mol");
    show(tr, cfg, keys::Q_PRODUCT_MOLES, r.product_moles, "mol");
    show(tr, cfg, keys::Q_PRODUCT_MASS, r.product_mass, "g");
    Ok(())
}

// ---------------------------------------------------------------- 물리

/// 물리 메뉴를 처리한다.
pub fn handle_physics(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    submenu(
        tr,
        cfg,
        keys::PHYSICS_TITLE,
        &[
            keys::PHYSICS_KINEMATICS,
            keys::PHYSICS_FORCES,
            keys::PHYSICS_ENERGY,
            keys::PHYSICS_THERMO,
            keys::PHYSICS_WAVES,
            keys::PHYSICS_ELECTROMAGNETISM,
            keys::PHYSICS_OPTICS,
            keys::PHYSICS_MODERN,
        ],
        |sel| {
            Some(match sel {
                "1" => kinematics_calc(tr, cfg),
                "2" => force_calc(tr, cfg),
                "3" => energy_calc(tr, cfg),
                "4" => thermo_calc(tr, cfg),
                "5" => wave_calc(tr, cfg),
                "6" => electro_calc(tr, cfg),
                "7" => lens_calc(tr, cfg),
                "8" => modern_calc(tr, cfg),
                _ => return None,
            })
        },
    )
}

/// 선택지를 출력하고 번호를 읽는다.
fn pick(tr: &Translator, option_keys: &[&str]) -> Result<String, AppError> {
    for key in option_keys {
        println!("{}", tr.t(key));
    }
    Ok(read_line(&tr.t(keys::GENERAL_PROMPT_SELECT))?.trim().to_string())
}

/// 설정된 각도 단위로 입력받아 도로 돌려준다.
fn read_angle(tr: &Translator, cfg: &Config, key: &str) -> Result<f64, AppError> {
    let raw = read_f64(tr, &ask(tr, key, cfg.angle_unit.symbol()))?;
    Ok(cfg.angle_unit.to_degrees(&cfg.constants, raw))
}

fn kinematics_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    match pick(tr, &[keys::KINEMATICS_CONSTANT_ACCELERATION, keys::KINEMATICS_PROJECTILE])?.as_str() {
        "1" => {
            let v0 = read_f64(tr, &ask(tr, keys::Q_INITIAL_VELOCITY, "m/s"))?;
            let a = read_f64(tr, &ask(tr, keys::Q_ACCELERATION, "m/s²"))?;
            let t = read_f64(tr, &ask(tr, keys::Q_TIME, "s"))?;
            let r = physics::constant_acceleration(v0, a, t)?;
            show(tr, cfg, keys::Q_FINAL_VELOCITY, r.final_velocity, "m/s");
            show(tr, cfg, keys::Q_DISPLACEMENT, r.displacement, "m");
        }
        "2" => {
            let v0 = read_f64(tr, &ask(tr, keys::Q_INITIAL_VELOCITY, "m/s"))?;
            let angle = read_angle(tr, cfg, keys::Q_LAUNCH_ANGLE)?;
            let r = physics::projectile_motion(&cfg.constants, v0, angle)?;
            show(tr, cfg, keys::Q_V0X, r.v0x, "m/s");
            show(tr, cfg, keys::Q_V0Y, r.v0y, "m/s");
            show(tr, cfg, keys::Q_FLIGHT_TIME, r.flight_time, "s");
            show(tr, cfg, keys::Q_MAX_HEIGHT, r.max_height, "m");
            show(tr, cfg, keys::Q_RANGE, r.range, "m");
        }
        _ => println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION)),
    }
    Ok(())
}

fn force_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let force = match pick(tr, &[keys::FORCES_NEWTON, keys::FORCES_FRICTION, keys::FORCES_CENTRIPETAL])?.as_str() {
        "1" => {
            let m = read_f64(tr, &ask(tr, keys::Q_MASS, "kg"))?;
            let a = read_f64(tr, &ask(tr, keys::Q_ACCELERATION, "m/s²"))?;
            physics::newtons_second_law(m, a)?
        }
        "2" => {
            let mu = read_f64(tr, &ask(tr, keys::Q_FRICTION_COEFFICIENT, ""))?;
            let normal = read_f64(tr, &ask(tr, keys::Q_NORMAL_FORCE, "N"))?;
            physics::friction_force(mu, normal)?
        }
        "3" => {
            let m = read_f64(tr, &ask(tr, keys::Q_MASS, "kg"))?;
            let v = read_f64(tr, &ask(tr, keys::Q_VELOCITY, "m/s"))?;
            let r = read_f64(tr, &ask(tr, keys::Q_RADIUS, "m"))?;
            physics::centripetal_force(m, v, r)?
        }
        _ => {
            println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION));
            return Ok(());
        }
    };
    show(tr, cfg, keys::Q_FORCE, force, "N");
    Ok(())
}

fn energy_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let c = &cfg.constants;
    match pick(
        tr,
        &[keys::ENERGY_KINETIC, keys::ENERGY_POTENTIAL, keys::ENERGY_WORK, keys::ENERGY_POWER],
    )?
    .as_str()
    {
        "1" => {
            let m = read_f64(tr, &ask(tr, keys::Q_MASS, "kg"))?;
            let v = read_f64(tr, &ask(tr, keys::Q_VELOCITY, "m/s"))?;
            show(tr, cfg, keys::Q_ENERGY, physics::kinetic_energy(m, v)?, "J");
        }
        "2" => {
            let m = read_f64(tr, &ask(tr, keys::Q_MASS, "kg"))?;
            let h = read_f64(tr, &ask(tr, keys::Q_HEIGHT, "m"))?;
            show(tr, cfg, keys::Q_ENERGY, physics::potential_energy(c, m, h)?, "J");
        }
        "3" => {
            let f = read_f64(tr, &ask(tr, keys::Q_FORCE, "N"))?;
            let d = read_f64(tr, &ask(tr, keys::Q_DISTANCE, "m"))?;
            let raw = read_optional_f64(tr, &ask(tr, keys::Q_ANGLE, cfg.angle_unit.symbol()))?.unwrap_or(0.0);
            let angle = cfg.angle_unit.to_degrees(c, raw);
            show(tr, cfg, keys::Q_WORK, physics::work_done(c, f, d, angle)?, "J");
        }
        "4" => {
            let w = read_f64(tr, &ask(tr, keys::Q_WORK, "J"))?;
            let t = read_f64(tr, &ask(tr, keys::Q_TIME, "s"))?;
            show(tr, cfg, keys::Q_POWER, physics::power(w, t)?, "W");
        }
        _ => println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION)),
    }
    Ok(())
}

fn thermo_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    match pick(
        tr,
        &[keys::THERMO_HEAT, keys::THERMO_EXPANSION, keys::THERMO_GAS_WORK, keys::THERMO_CARNOT],
    )?
    .as_str()
    {
        "1" => {
            let m = read_f64(tr, &ask(tr, keys::Q_MASS, "kg"))?;
            let c = read_material_property(tr, keys::Q_SPECIFIC_HEAT, "J/(kg·K)", |m| {
                Some(m.specific_heat_j_kg_k)
            })?;
            let dt = read_f64(tr, &ask(tr, keys::Q_DELTA_T, "K"))?;
            show(tr, cfg, keys::Q_HEAT, physics::heat_transfer(m, c, dt)?, "J");
        }
        "2" => {
            let l0 = read_f64(tr, &ask(tr, keys::Q_INITIAL_LENGTH, "m"))?;
            let alpha = read_material_property(tr, keys::Q_EXPANSION_COEFFICIENT, "1/K", |m| {
                m.linear_expansion_per_k
            })?;
            let dt = read_f64(tr, &ask(tr, keys::Q_DELTA_T, "K"))?;
            show(tr, cfg, keys::Q_LENGTH_CHANGE, physics::thermal_expansion(alpha, l0, dt)?, "m");
        }
        "3" => {
            let p = read_f64(tr, &ask(tr, keys::Q_PRESSURE, "Pa"))?;
            let dv = read_f64(tr, &ask(tr, keys::Q_DELTA_V, "m³"))?;
            show(tr, cfg, keys::Q_WORK, physics::ideal_gas_work(p, dv)?, "J");
        }
        "4" => {
            let th = read_f64(tr, &ask(tr, keys::Q_T_HOT, "K"))?;
            let tc = read_f64(tr, &ask(tr, keys::Q_T_COLD, "K"))?;
            let eta = physics::carnot_efficiency(th, tc)?;
            show(tr, cfg, keys::Q_EFFICIENCY, eta * 100.0, "%");
        }
        _ => println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION)),
    }
    Ok(())
}

fn wave_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let c = &cfg.constants;
    match pick(
        tr,
        &[
            keys::WAVES_SPEED,
            keys::WAVES_SHM,
            keys::WAVES_PENDULUM,
            keys::WAVES_SPRING,
            keys::WAVES_DOPPLER,
        ],
    )?
    .as_str()
    {
        "1" => {
            let f = read_f64(tr, &ask(tr, keys::Q_FREQUENCY, "Hz"))?;
            let lambda = read_f64(tr, &ask(tr, keys::Q_WAVELENGTH, "m"))?;
            show(tr, cfg, keys::Q_WAVE_SPEED, physics::wave_speed(f, lambda)?, "m/s");
        }
        "2" => {
            let a = read_f64(tr, &ask(tr, keys::Q_AMPLITUDE, "m"))?;
            let omega = read_f64(tr, &ask(tr, keys::Q_ANGULAR_FREQUENCY, "rad/s"))?;
            let t = read_f64(tr, &ask(tr, keys::Q_TIME, "s"))?;
            let raw = read_optional_f64(tr, &ask(tr, keys::Q_PHASE, cfg.angle_unit.symbol()))?.unwrap_or(0.0);
            let phase = match cfg.angle_unit {
                AngleUnit::Radians => raw,
                AngleUnit::Degrees => c.degrees_to_radians(raw),
            };
            show(tr, cfg, keys::Q_POSITION, physics::simple_harmonic_position(a, omega, t, phase)?, "m");
        }
        "3" => {
            let l = read_f64(tr, &ask(tr, keys::Q_LENGTH, "m"))?;
            show(tr, cfg, keys::Q_PERIOD, physics::pendulum_period(c, l)?, "s");
        }
        "4" => {
            let m = read_f64(tr, &ask(tr, keys::Q_MASS, "kg"))?;
            let k = read_f64(tr, &ask(tr, keys::Q_SPRING_CONSTANT, "N/m"))?;
            show(tr, cfg, keys::Q_PERIOD, physics::spring_period(c, m, k)?, "s");
        }
        "5" => {
            println!("{}", tr.t(keys::WAVES_DOPPLER_NOTE));
            let f = read_f64(tr, &ask(tr, keys::Q_SOURCE_FREQUENCY, "Hz"))?;
            let vs = read_f64(tr, &ask(tr, keys::Q_SOURCE_VELOCITY, "m/s"))?;
            let vo = read_f64(tr, &ask(tr, keys::Q_OBSERVER_VELOCITY, "m/s"))?;
            let v = read_f64(tr, &ask(tr, keys::Q_WAVE_SPEED, "m/s"))?;
            show(tr, cfg, keys::Q_OBSERVED_FREQUENCY, physics::doppler_effect(f, vs, vo, v)?, "Hz");
        }
        _ => println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION)),
    }
    Ok(())
}

fn electro_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let c = &cfg.constants;
    match pick(
        tr,
        &[
            keys::EM_COULOMB,
            keys::EM_FIELD,
            keys::EM_POTENTIAL,
            keys::EM_OHM,
            keys::EM_POWER,
            keys::EM_MAGNETIC,
            keys::EM_FARADAY,
        ],
    )?
    .as_str()
    {
        "1" => {
            let q1 = read_f64(tr, &ask(tr, keys::Q_CHARGE1, "C"))?;
            let q2 = read_f64(tr, &ask(tr, keys::Q_CHARGE2, "C"))?;
            let r = read_f64(tr, &ask(tr, keys::Q_DISTANCE, "m"))?;
            show(tr, cfg, keys::Q_FORCE, physics::coulomb_force(c, q1, q2, r)?, "N");
        }
        "2" => {
            let q = read_f64(tr, &ask(tr, keys::Q_CHARGE, "C"))?;
            let r = read_f64(tr, &ask(tr, keys::Q_DISTANCE, "m"))?;
            show(tr, cfg, keys::Q_ELECTRIC_FIELD, physics::electric_field(c, q, r)?, "N/C");
        }
        "3" => {
            let q = read_f64(tr, &ask(tr, keys::Q_CHARGE, "C"))?;
            let r = read_f64(tr, &ask(tr, keys::Q_DISTANCE, "m"))?;
            show(tr, cfg, keys::Q_ELECTRIC_POTENTIAL, physics::electric_potential(c, q, r)?, "V");
        }
        "4" => ohms_law_calc(tr, cfg)?,
        "5" => {
            println!("{}", tr.t(keys::EM_POWER_NOTE));
            let v = read_optional_f64(tr, &ask(tr, keys::Q_VOLTAGE, "V"))?;
            let i = read_optional_f64(tr, &ask(tr, keys::Q_CURRENT, "A"))?;
            let r = read_optional_f64(tr, &ask(tr, keys::Q_RESISTANCE, "Ω"))?;
            show(tr, cfg, keys::Q_POWER, physics::electrical_power(v, i, r)?, "W");
        }
        "6" => {
            let q = read_f64(tr, &ask(tr, keys::Q_CHARGE, "C"))?;
            let v = read_f64(tr, &ask(tr, keys::Q_VELOCITY, "m/s"))?;
            let b = read_f64(tr, &ask(tr, keys::Q_MAGNETIC_FIELD, "T"))?;
            let angle = match read_optional_f64(tr, &ask(tr, keys::Q_ANGLE, cfg.angle_unit.symbol()))? {
                Some(raw) => cfg.angle_unit.to_degrees(c, raw),
                None => MAGNETIC_FORCE_DEFAULT_ANGLE_DEG,
            };
            show(tr, cfg, keys::Q_FORCE, physics::magnetic_force(c, q, v, b, angle)?, "N");
        }
        "7" => {
            let flux = read_f64(tr, &ask(tr, keys::Q_FLUX_CHANGE, "Wb"))?;
            let t = read_f64(tr, &ask(tr, keys::Q_TIME, "s"))?;
            show(tr, cfg, keys::Q_EMF, physics::faraday_emf(flux, t)?, "V");
        }
        _ => println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION)),
    }
    Ok(())
}

fn ohms_law_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("V = IR");
    println!("{}", tr.t(keys::GENERAL_BLANK_IS_UNKNOWN));
    let input = OhmsLawInput {
        voltage: read_optional_f64(tr, &ask(tr, keys::Q_VOLTAGE, "V"))?,
        current: read_optional_f64(tr, &ask(tr, keys::Q_CURRENT, "A"))?,
        resistance: read_optional_f64(tr, &ask(tr, keys::Q_RESISTANCE, "Ω"))?,
    };
    let r = physics::ohms_law(input)?;
    let solved = match r.solved_for {
        OhmVariable::Voltage => keys::Q_VOLTAGE,
        OhmVariable::Current => keys::Q_CURRENT,
        OhmVariable::Resistance => keys::Q_RESISTANCE,
    };
    println!("{}: {}", tr.t(keys::GENERAL_SOLVED_FOR), tr.t(solved));
    show(tr, cfg, keys::Q_VOLTAGE, r.voltage, "V");
    show(tr, cfg, keys::Q_CURRENT, r.current, "A");
    show(tr, cfg, keys::Q_RESISTANCE, r.resistance, "Ω");
    Ok(())
}

fn lens_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("1/f = 1/do + 1/di");
    println!("{}", tr.t(keys::GENERAL_BLANK_IS_UNKNOWN));
    let input = LensInput {
        focal_length: read_optional_f64(tr, &ask(tr, keys::Q_FOCAL_LENGTH, "m"))?,
        object_distance: read_optional_f64(tr, &ask(tr, keys::Q_OBJECT_DISTANCE, "m"))?,
        image_distance: read_optional_f64(tr, &ask(tr, keys::Q_IMAGE_DISTANCE, "m"))?,
    };
    let r = physics::lens_equation(input)?;
    let solved = match r.solved_for {
        LensVariable::FocalLength => keys::Q_FOCAL_LENGTH,
        LensVariable::ObjectDistance => keys::Q_OBJECT_DISTANCE,
        LensVariable::ImageDistance => keys::Q_IMAGE_DISTANCE,
    };
    println!("{}: {}", tr.t(keys::GENERAL_SOLVED_FOR), tr.t(solved));
    show(tr, cfg, keys::Q_FOCAL_LENGTH, r.focal_length, "m");
    show(tr, cfg, keys::Q_OBJECT_DISTANCE, r.object_distance, "m");
    show(tr, cfg, keys::Q_IMAGE_DISTANCE, r.image_distance, "m");
    show(tr, cfg, keys::Q_MAGNIFICATION, r.magnification(), "");
    Ok(())
}

fn modern_calc(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let c = &cfg.constants;
    match pick(tr, &[keys::MODERN_RELATIVISTIC, keys::MODERN_DE_BROGLIE])?.as_str() {
        "1" => {
            let m = read_f64(tr, &ask(tr, keys::Q_MASS, "kg"))?;
            let v = read_f64(tr, &ask(tr, keys::Q_VELOCITY, "m/s"))?;
            show(tr, cfg, keys::Q_ENERGY, physics::relativistic_energy(c, m, v)?, "J");
        }
        "2" => {
            let m = read_f64(tr, &ask(tr, keys::Q_MASS, "kg"))?;
            let v = read_f64(tr, &ask(tr, keys::Q_VELOCITY, "m/s"))?;
            show(tr, cfg, keys::Q_WAVELENGTH, physics::de_broglie_wavelength(c, m, v)?, "m");
        }
        _ => println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION)),
    }
    Ok(())
}

// ---------------------------------------------------------------- 단위/상수/예제

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    clear_screen(cfg);
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(&tr.t(keys::GENERAL_PROMPT_SELECT))?;
        if let Some(kind) = map_quantity(sel.trim()) {
            break kind;
        }
        println!("{}", tr.t(keys::GENERAL_INVALID_SELECTION));
    };
    println!("{} {}", tr.t(keys::UNIT_CONVERSION_AVAILABLE), kind.unit_symbols().join(", "));
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(&cfg.constants, kind, value, &from_unit, &to_unit)?;
    println!(
        "{}",
        format_result(&tr.t(keys::UNIT_CONVERSION_RESULT), result, to_unit.trim(), &cfg.display)
    );
    Ok(())
}

fn map_quantity(sel: &str) -> Option<QuantityKind> {
    let n: usize = sel.parse().ok()?;
    QuantityKind::ALL.get(n.checked_sub(1)?).copied()
}

/// 상수표를 보여준다. 이름을 입력하면 하나만 조회한다.
pub fn handle_constants(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    clear_screen(cfg);
    println!("{}", tr.t(keys::CONSTANTS_HEADING));
    let name = read_line(&tr.t(keys::CONSTANTS_PROMPT_LOOKUP))?;
    let c = &cfg.constants;
    if name.trim().is_empty() {
        let rows: Vec<Vec<String>> = c
            .entries()
            .iter()
            .map(|e| {
                vec![
                    e.symbol.to_string(),
                    format::format_number(e.value, &cfg.display),
                    e.unit.to_string(),
                ]
            })
            .collect();
        let headers = [
            tr.t(keys::CONSTANTS_HEADER_NAME),
            tr.t(keys::CONSTANTS_HEADER_VALUE),
            tr.t(keys::CONSTANTS_HEADER_UNIT),
        ];
        let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
        print!("{}", render_table(&headers, &rows, 40));
    } else {
        match c.find(&name) {
            Some(e) => println!("{} ({})", format_result(e.name, e.value, e.unit, &cfg.display), e.symbol),
            None => println!("{} {}", tr.t(keys::CONSTANTS_NOT_FOUND), name.trim()),
        }
    }
    Ok(())
}

/// 예제 화면을 보여준다.
pub fn handle_examples(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    clear_screen(cfg);
    println!("{}", tr.t(keys::EXAMPLES_HEADING));
    let list = worked_examples::examples(&cfg.constants, &cfg.display)?;
    let mut current = None;
    for ex in &list {
        if current != Some(ex.category) {
            println!("\n{}", ex.category.title());
            println!("{}", "-".repeat(ex.category.title().len()));
            current = Some(ex.category);
        }
        println!("* {}", ex.title);
        for line in &ex.lines {
            println!("  {line}");
        }
    }
    for (section, formulas) in worked_examples::formula_reference() {
        println!("\n{section}");
        for f in *formulas {
            println!("  {f}");
        }
    }
    Ok(())
}

/// 도움말을 보여준다.
pub fn show_help(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    clear_screen(cfg);
    println!("{}", tr.t(keys::HELP_HEADING));
    println!("{}", tr.t(keys::HELP_BODY));
    println!("v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

// ---------------------------------------------------------------- 설정

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    clear_screen(cfg);
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_CURRENT));
    println!("  language = {}", cfg.language);
    println!("  decimal_places = {}", cfg.display.decimal_places);
    println!("  angle_unit = {:?}", cfg.angle_unit);
    println!("  clear_screen = {}", cfg.clear_screen);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.trim() {
        "" => false,
        "1" => {
            let code = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match code.trim().to_lowercase().as_str() {
                c @ ("auto" | "ko" | "en") => {
                    cfg.language = c.to_string();
                    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_RESTART));
                    true
                }
                _ => false,
            }
        }
        "2" => {
            let places = read_u32(tr, &tr.t(keys::SETTINGS_PROMPT_DECIMAL_PLACES))?;
            cfg.set_decimal_places(places as usize);
            true
        }
        "3" => match read_line(&tr.t(keys::SETTINGS_PROMPT_ANGLE_UNIT))?.trim() {
            "1" => {
                cfg.angle_unit = AngleUnit::Degrees;
                true
            }
            "2" => {
                cfg.angle_unit = AngleUnit::Radians;
                true
            }
            _ => false,
        },
        "4" => match read_line(&tr.t(keys::SETTINGS_PROMPT_CLEAR_SCREEN))?.trim() {
            "1" => {
                cfg.clear_screen = true;
                true
            }
            "2" => {
                cfg.clear_screen = false;
                true
            }
            _ => false,
        },
        _ => false,
    };
    if changed {
        println!("{}", tr.t(keys::SETTINGS_SAVED));
    } else if !sel.trim().is_empty() {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
    }
    Ok(changed)
}

// ---------------------------------------------------------------- 입출력 도우미

/// `라벨 [단위]: ` 형태의 입력 안내문
fn ask(tr: &Translator, key: &str, unit: &str) -> String {
    if unit.is_empty() {
        format!("{}: ", tr.t(key))
    } else {
        format!("{} [{unit}]: ", tr.t(key))
    }
}

fn show(tr: &Translator, cfg: &Config, key: &str, value: f64, unit: &str) {
    println!("{}", format_result(&tr.t(key), value, unit, &cfg.display));
}

/// 설정에 따라 화면을 지운다 (ANSI).
pub fn clear_screen(cfg: &Config) {
    if cfg.clear_screen {
        print!("\x1B[2J\x1B[1;1H");
        let _ = io::stdout().flush();
    }
}

pub fn pause(tr: &Translator) -> Result<(), AppError> {
    read_line(&format!("\n{}", tr.t(keys::GENERAL_PRESS_ENTER)))?;
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match format::parse_number(&s) {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::GENERAL_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력은 `None`(미지수), 그 외에는 숫자.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        match format::parse_number(&s) {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::GENERAL_INVALID_NUMBER)),
        }
    }
}

/// 숫자 또는 물질 코드(water, cu, ...)를 받아 물성값을 돌려준다.
fn read_material_property(
    tr: &Translator,
    key: &str,
    unit: &str,
    property: impl Fn(&MaterialData) -> Option<f64>,
) -> Result<f64, AppError> {
    let codes: Vec<&str> = material_db::materials()
        .iter()
        .filter(|m| property(*m).is_some())
        .map(|m| m.code)
        .collect();
    let prompt = ask(tr, key, &format!("{unit} | {}", codes.join("/")));
    loop {
        let s = read_line(&prompt)?;
        if let Some(v) = material_db::find_material(&s).and_then(&property) {
            return Ok(v);
        }
        match format::parse_number(&s) {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::GENERAL_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::GENERAL_INVALID_INTEGER)),
        }
    }
}
