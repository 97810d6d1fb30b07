#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _};
use chemphys_toolbox::config::{self, AngleUnit, Config};
use chemphys_toolbox::i18n::{self, keys, Translator};
use chemphys_toolbox::quantity::QuantityKind;
use chemphys_toolbox::{
    chemistry, conversion, format, material_db, physics, worked_examples, Constants,
};
use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 화학/물리 공식 계산기 (GUI)
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 표시 언어: auto, ko, en
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();

    let app_cfg = config::load_or_default(&args.config)
        .with_context(|| format!("설정 파일을 읽을 수 없습니다: {}", args.config.display()))?;
    let lang = i18n::resolve_language(&args.lang, Some(&app_cfg.language));

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([980.0, 700.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let config_path = args.config.clone();
    eframe::run_native(
        "Chemistry & Physics Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx, app_cfg.custom_font_path.as_deref()) {
                tracing::warn!(error = %e, "no CJK font found, using egui default");
            }
            Box::new(GuiApp::new(app_cfg, config_path, &lang))
        }),
    )
    .map_err(|e| anyhow!("GUI 실행 실패: {e}"))
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (width, height) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width,
        height,
    })
}

/// 바이너리 폰트 바이트를 egui 기본 글꼴 앞에 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 글꼴을 찾는다. 사용자 지정 글꼴 → OS 기본 한글 글꼴 순.
fn setup_fonts(ctx: &egui::Context, custom: Option<&str>) -> anyhow::Result<()> {
    if let Some(path) = custom {
        match load_custom_font(ctx, Path::new(path)) {
            Ok(()) => return Ok(()),
            Err(e) => tracing::warn!(error = %e, path, "custom font failed"),
        }
    }
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(windir) = std::env::var_os("WINDIR") {
        let dir = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].map(|f| dir.join(f)));
    }
    candidates.extend(
        [
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        ]
        .map(PathBuf::from),
    );
    let path = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| anyhow!("font not found"))?;
    let bytes = fs::read(path).with_context(|| format!("글꼴을 읽을 수 없습니다: {}", path.display()))?;
    apply_font_bytes(ctx, bytes, "system_cjk");
    Ok(())
}

fn load_custom_font(ctx: &egui::Context, path: &Path) -> anyhow::Result<()> {
    let bytes = fs::read(path).with_context(|| format!("글꼴을 읽을 수 없습니다: {}", path.display()))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 메뉴 문자열 앞의 "3) " 번호를 뗀다.
fn menu_label(s: &str) -> &str {
    match s.split_once(") ") {
        Some((n, rest)) if !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) => rest,
        _ => s,
    }
}

// ------------------------------------------------------------ 계산 폼 정의

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Number,
    /// 비우면 미지수 또는 기본값
    Optional,
    Integer,
    Text,
    /// 설정된 각도 단위로 입력, 비워도 됨
    Angle,
}

#[derive(Debug, Clone, Copy)]
struct Field {
    key: &'static str,
    unit: &'static str,
    kind: FieldKind,
}

fn num(key: &'static str, unit: &'static str) -> Field {
    Field { key, unit, kind: FieldKind::Number }
}

fn opt(key: &'static str, unit: &'static str) -> Field {
    Field { key, unit, kind: FieldKind::Optional }
}

fn int(key: &'static str) -> Field {
    Field { key, unit: "", kind: FieldKind::Integer }
}

fn text(key: &'static str) -> Field {
    Field { key, unit: "", kind: FieldKind::Text }
}

fn angle(key: &'static str) -> Field {
    Field { key, unit: "", kind: FieldKind::Angle }
}

type Outputs = Vec<(&'static str, f64, &'static str)>;

/// 입력 칸 문자열을 계산 함수 인자로 바꾼다.
struct Inputs<'a> {
    values: &'a [String],
    cfg: &'a Config,
}

impl Inputs<'_> {
    fn raw(&self, i: usize) -> &str {
        self.values.get(i).map(|s| s.trim()).unwrap_or_default()
    }

    fn c(&self) -> &Constants {
        &self.cfg.constants
    }

    fn num(&self, i: usize) -> anyhow::Result<f64> {
        Ok(format::parse_number(self.raw(i))?)
    }

    fn opt(&self, i: usize) -> anyhow::Result<Option<f64>> {
        if self.raw(i).is_empty() {
            Ok(None)
        } else {
            self.num(i).map(Some)
        }
    }

    fn int(&self, i: usize) -> anyhow::Result<u32> {
        self.raw(i)
            .parse()
            .map_err(|_| anyhow!("정수가 아닙니다: {}", self.raw(i)))
    }

    /// 도 단위로 돌려준다. 비어 있으면 `default_deg`.
    fn angle_deg(&self, i: usize, default_deg: f64) -> anyhow::Result<f64> {
        Ok(self
            .opt(i)?
            .map_or(default_deg, |v| self.cfg.angle_unit.to_degrees(self.c(), v)))
    }
}

struct Calculator {
    title: &'static str,
    fields: Vec<Field>,
    run: fn(&Inputs<'_>) -> anyhow::Result<Outputs>,
}

fn calc(
    title: &'static str,
    fields: Vec<Field>,
    run: fn(&Inputs<'_>) -> anyhow::Result<Outputs>,
) -> Calculator {
    Calculator { title, fields, run }
}

fn chemistry_calculators() -> Vec<Calculator> {
    use keys::*;
    vec![
        calc(CHEMISTRY_MOLECULAR_WEIGHT, vec![text(Q_FORMULA)], |x| {
            Ok(vec![(Q_MOLAR_MASS, chemistry::molecular_weight(x.raw(0))?, "g/mol")])
        }),
        calc(
            CHEMISTRY_IDEAL_GAS,
            vec![
                opt(Q_PRESSURE, "atm"),
                opt(Q_VOLUME, "L"),
                opt(Q_MOLES, "mol"),
                opt(Q_TEMPERATURE, "K"),
            ],
            |x| {
                let r = chemistry::ideal_gas_law(
                    x.c(),
                    chemistry::IdealGasInput {
                        pressure_atm: x.opt(0)?,
                        volume_l: x.opt(1)?,
                        moles: x.opt(2)?,
                        temperature_k: x.opt(3)?,
                    },
                )?;
                Ok(vec![
                    (Q_PRESSURE, r.pressure_atm, "atm"),
                    (Q_VOLUME, r.volume_l, "L"),
                    (Q_MOLES, r.moles, "mol"),
                    (Q_TEMPERATURE, r.temperature_k, "K"),
                ])
            },
        ),
        calc(PH_OPTION_PH, vec![num(Q_H_CONCENTRATION, "M")], |x| {
            Ok(vec![(Q_PH, chemistry::calculate_ph(x.num(0)?)?, "")])
        }),
        calc(PH_OPTION_CONCENTRATION, vec![num(Q_PH, "")], |x| {
            Ok(vec![(Q_H_CONCENTRATION, chemistry::ph_to_concentration(x.num(0)?)?, "M")])
        }),
        calc(PH_OPTION_POH, vec![num(Q_PH, "")], |x| {
            Ok(vec![(Q_POH, chemistry::poh_from_ph(x.num(0)?)?, "")])
        }),
        calc(
            CHEMISTRY_DILUTION,
            vec![
                num(Q_INITIAL_CONCENTRATION, "M"),
                num(Q_INITIAL_VOLUME, "L"),
                opt(Q_FINAL_CONCENTRATION, "M"),
                opt(Q_FINAL_VOLUME, "L"),
            ],
            |x| {
                let r = chemistry::dilution(chemistry::DilutionInput {
                    initial_concentration: x.num(0)?,
                    initial_volume: x.num(1)?,
                    final_concentration: x.opt(2)?,
                    final_volume: x.opt(3)?,
                })?;
                Ok(vec![
                    (Q_FINAL_CONCENTRATION, r.final_concentration, "M"),
                    (Q_FINAL_VOLUME, r.final_volume, "L"),
                ])
            },
        ),
        calc(
            CHEMISTRY_RATE_LAW,
            vec![
                num(Q_RATE, "M/s"),
                num(Q_CONC_A, "M"),
                num(Q_CONC_B, "M"),
                num(Q_ORDER_A, ""),
                num(Q_ORDER_B, ""),
            ],
            |x| {
                let (a, b) = (x.num(3)?, x.num(4)?);
                let k = chemistry::rate_constant(x.num(0)?, x.num(1)?, x.num(2)?, a, b)?;
                Ok(vec![
                    (Q_RATE_CONSTANT, k, ""),
                    (Q_OVERALL_ORDER, chemistry::overall_order(a, b), ""),
                ])
            },
        ),
        calc(
            QUANTUM_OPTION_BOX,
            vec![int(Q_QUANTUM_NUMBER), num(Q_BOX_LENGTH, "m"), num(Q_PARTICLE_MASS, "kg")],
            |x| {
                let e = chemistry::particle_in_box_energy(x.c(), x.int(0)?, x.num(1)?, x.num(2)?)?;
                Ok(vec![(Q_ENERGY, e, "J")])
            },
        ),
        calc(
            QUANTUM_OPTION_OSCILLATOR,
            vec![int(Q_VIBRATIONAL_NUMBER), num(Q_FREQUENCY, "Hz")],
            |x| {
                let e = chemistry::harmonic_oscillator_energy(x.c(), x.int(0)?, x.num(1)?)?;
                Ok(vec![(Q_ENERGY, e, "J")])
            },
        ),
        calc(QUANTUM_OPTION_HYDROGEN, vec![int(Q_QUANTUM_NUMBER)], |x| {
            let e = chemistry::hydrogen_energy_level(x.c(), x.int(0)?)?;
            Ok(vec![(Q_ENERGY, e, "J"), (Q_ENERGY, e / x.c().electron_volt, "eV")])
        }),
        calc(
            CHEMISTRY_ARRHENIUS,
            vec![
                num(Q_PRE_EXPONENTIAL, ""),
                num(Q_ACTIVATION_ENERGY, "J/mol"),
                num(Q_TEMPERATURE, "K"),
            ],
            |x| {
                let k = chemistry::arrhenius(x.c(), x.num(0)?, x.num(1)?, x.num(2)?)?;
                Ok(vec![(Q_RATE_CONSTANT, k, "")])
            },
        ),
        calc(
            CHEMISTRY_BUFFER,
            vec![num(Q_PKA, ""), num(Q_BASE_CONCENTRATION, "M"), num(Q_ACID_CONCENTRATION, "M")],
            |x| {
                let ph = chemistry::henderson_hasselbalch(x.num(0)?, x.num(1)?, x.num(2)?)?;
                Ok(vec![(Q_PH, ph, "")])
            },
        ),
        calc(
            CHEMISTRY_NERNST,
            vec![
                num(Q_STANDARD_POTENTIAL, "V"),
                int(Q_ELECTRONS),
                num(Q_REACTION_QUOTIENT, ""),
                opt(Q_TEMPERATURE, "K"),
            ],
            |x| {
                let t = x.opt(3)?.unwrap_or(chemistry::NERNST_DEFAULT_TEMPERATURE_K);
                let e = chemistry::nernst(x.c(), x.num(0)?, x.int(1)?, x.num(2)?, t)?;
                Ok(vec![(Q_CELL_POTENTIAL, e, "V")])
            },
        ),
        calc(
            CHEMISTRY_BEER_LAMBERT,
            vec![
                num(Q_MOLAR_ABSORPTIVITY, "L/(mol·cm)"),
                num(Q_PATH_LENGTH, "cm"),
                num(Q_CONCENTRATION, "M"),
            ],
            |x| {
                let a = chemistry::beer_lambert(x.num(0)?, x.num(1)?, x.num(2)?)?;
                Ok(vec![(Q_ABSORBANCE, a, "")])
            },
        ),
        calc(
            CHEMISTRY_VAN_DER_WAALS,
            vec![
                num(Q_MOLES, "mol"),
                num(Q_VOLUME, "m³"),
                num(Q_TEMPERATURE, "K"),
                num(Q_VDW_A, "Pa·m⁶/mol²"),
                num(Q_VDW_B, "m³/mol"),
            ],
            |x| {
                let p = chemistry::van_der_waals_pressure(
                    x.c(),
                    x.num(0)?,
                    x.num(1)?,
                    x.num(2)?,
                    x.num(3)?,
                    x.num(4)?,
                )?;
                Ok(vec![(Q_PRESSURE, p, "Pa")])
            },
        ),
        calc(
            CHEMISTRY_COMBINED_GAS,
            vec![
                num(Q_P1, "atm"),
                num(Q_V1, "L"),
                num(Q_T1, "K"),
                num(Q_P2, "atm"),
                num(Q_T2, "K"),
            ],
            |x| {
                let v2 = chemistry::combined_gas_volume(x.num(0)?, x.num(1)?, x.num(2)?, x.num(3)?, x.num(4)?)?;
                Ok(vec![(Q_V2, v2, "L")])
            },
        ),
        calc(
            CHEMISTRY_STOICHIOMETRY,
            vec![
                num(Q_REACTANT_MASS, "g"),
                text(Q_REACTANT_FORMULA),
                text(Q_PRODUCT_FORMULA),
                num(Q_MOLE_RATIO, ""),
            ],
            |x| {
                let r = chemistry::stoichiometric_product_mass(x.num(0)?, x.raw(1), x.raw(2), x.num(3)?)?;
                Ok(vec![
                    (Q_REACTANT_MOLES, r.reactant_moles, "mol"),
                    (Q_PRODUCT_MOLES, r.product_moles, "mol"),
                    (Q_PRODUCT_MASS, r.product_mass, "g"),
                ])
            },
        ),
    ]
}

fn physics_calculators() -> Vec<Calculator> {
    use keys::*;
    vec![
        calc(
            KINEMATICS_CONSTANT_ACCELERATION,
            vec![num(Q_INITIAL_VELOCITY, "m/s"), num(Q_ACCELERATION, "m/s²"), num(Q_TIME, "s")],
            |x| {
                let r = physics::constant_acceleration(x.num(0)?, x.num(1)?, x.num(2)?)?;
                Ok(vec![
                    (Q_FINAL_VELOCITY, r.final_velocity, "m/s"),
                    (Q_DISPLACEMENT, r.displacement, "m"),
                ])
            },
        ),
        calc(
            KINEMATICS_PROJECTILE,
            vec![num(Q_INITIAL_VELOCITY, "m/s"), angle(Q_LAUNCH_ANGLE)],
            |x| {
                let r = physics::projectile_motion(x.c(), x.num(0)?, x.angle_deg(1, 45.0)?)?;
                Ok(vec![
                    (Q_V0X, r.v0x, "m/s"),
                    (Q_V0Y, r.v0y, "m/s"),
                    (Q_FLIGHT_TIME, r.flight_time, "s"),
                    (Q_MAX_HEIGHT, r.max_height, "m"),
                    (Q_RANGE, r.range, "m"),
                ])
            },
        ),
        calc(FORCES_NEWTON, vec![num(Q_MASS, "kg"), num(Q_ACCELERATION, "m/s²")], |x| {
            Ok(vec![(Q_FORCE, physics::newtons_second_law(x.num(0)?, x.num(1)?)?, "N")])
        }),
        calc(
            FORCES_FRICTION,
            vec![num(Q_FRICTION_COEFFICIENT, ""), num(Q_NORMAL_FORCE, "N")],
            |x| Ok(vec![(Q_FORCE, physics::friction_force(x.num(0)?, x.num(1)?)?, "N")]),
        ),
        calc(
            FORCES_CENTRIPETAL,
            vec![num(Q_MASS, "kg"), num(Q_VELOCITY, "m/s"), num(Q_RADIUS, "m")],
            |x| {
                let f = physics::centripetal_force(x.num(0)?, x.num(1)?, x.num(2)?)?;
                Ok(vec![(Q_FORCE, f, "N")])
            },
        ),
        calc(ENERGY_KINETIC, vec![num(Q_MASS, "kg"), num(Q_VELOCITY, "m/s")], |x| {
            Ok(vec![(Q_ENERGY, physics::kinetic_energy(x.num(0)?, x.num(1)?)?, "J")])
        }),
        calc(ENERGY_POTENTIAL, vec![num(Q_MASS, "kg"), num(Q_HEIGHT, "m")], |x| {
            Ok(vec![(Q_ENERGY, physics::potential_energy(x.c(), x.num(0)?, x.num(1)?)?, "J")])
        }),
        calc(
            ENERGY_WORK,
            vec![num(Q_FORCE, "N"), num(Q_DISTANCE, "m"), angle(Q_ANGLE)],
            |x| {
                let w = physics::work_done(x.c(), x.num(0)?, x.num(1)?, x.angle_deg(2, 0.0)?)?;
                Ok(vec![(Q_WORK, w, "J")])
            },
        ),
        calc(ENERGY_POWER, vec![num(Q_WORK, "J"), num(Q_TIME, "s")], |x| {
            Ok(vec![(Q_POWER, physics::power(x.num(0)?, x.num(1)?)?, "W")])
        }),
        calc(
            THERMO_HEAT,
            vec![num(Q_MASS, "kg"), num(Q_SPECIFIC_HEAT, "J/(kg·K)"), num(Q_DELTA_T, "K")],
            |x| {
                let q = physics::heat_transfer(x.num(0)?, x.num(1)?, x.num(2)?)?;
                Ok(vec![(Q_HEAT, q, "J")])
            },
        ),
        calc(
            THERMO_EXPANSION,
            vec![num(Q_INITIAL_LENGTH, "m"), num(Q_EXPANSION_COEFFICIENT, "1/K"), num(Q_DELTA_T, "K")],
            |x| {
                let dl = physics::thermal_expansion(x.num(1)?, x.num(0)?, x.num(2)?)?;
                Ok(vec![(Q_LENGTH_CHANGE, dl, "m")])
            },
        ),
        calc(THERMO_GAS_WORK, vec![num(Q_PRESSURE, "Pa"), num(Q_DELTA_V, "m³")], |x| {
            Ok(vec![(Q_WORK, physics::ideal_gas_work(x.num(0)?, x.num(1)?)?, "J")])
        }),
        calc(THERMO_CARNOT, vec![num(Q_T_HOT, "K"), num(Q_T_COLD, "K")], |x| {
            let eta = physics::carnot_efficiency(x.num(0)?, x.num(1)?)?;
            Ok(vec![(Q_EFFICIENCY, eta * 100.0, "%")])
        }),
        calc(WAVES_SPEED, vec![num(Q_FREQUENCY, "Hz"), num(Q_WAVELENGTH, "m")], |x| {
            Ok(vec![(Q_WAVE_SPEED, physics::wave_speed(x.num(0)?, x.num(1)?)?, "m/s")])
        }),
        calc(
            WAVES_SHM,
            vec![
                num(Q_AMPLITUDE, "m"),
                num(Q_ANGULAR_FREQUENCY, "rad/s"),
                num(Q_TIME, "s"),
                angle(Q_PHASE),
            ],
            |x| {
                let phase = x.c().degrees_to_radians(x.angle_deg(3, 0.0)?);
                let pos = physics::simple_harmonic_position(x.num(0)?, x.num(1)?, x.num(2)?, phase)?;
                Ok(vec![(Q_POSITION, pos, "m")])
            },
        ),
        calc(WAVES_PENDULUM, vec![num(Q_LENGTH, "m")], |x| {
            Ok(vec![(Q_PERIOD, physics::pendulum_period(x.c(), x.num(0)?)?, "s")])
        }),
        calc(WAVES_SPRING, vec![num(Q_MASS, "kg"), num(Q_SPRING_CONSTANT, "N/m")], |x| {
            Ok(vec![(Q_PERIOD, physics::spring_period(x.c(), x.num(0)?, x.num(1)?)?, "s")])
        }),
        calc(
            WAVES_DOPPLER,
            vec![
                num(Q_SOURCE_FREQUENCY, "Hz"),
                num(Q_SOURCE_VELOCITY, "m/s"),
                num(Q_OBSERVER_VELOCITY, "m/s"),
                num(Q_WAVE_SPEED, "m/s"),
            ],
            |x| {
                let f = physics::doppler_effect(x.num(0)?, x.num(1)?, x.num(2)?, x.num(3)?)?;
                Ok(vec![(Q_OBSERVED_FREQUENCY, f, "Hz")])
            },
        ),
        calc(
            EM_COULOMB,
            vec![num(Q_CHARGE1, "C"), num(Q_CHARGE2, "C"), num(Q_DISTANCE, "m")],
            |x| {
                let f = physics::coulomb_force(x.c(), x.num(0)?, x.num(1)?, x.num(2)?)?;
                Ok(vec![(Q_FORCE, f, "N")])
            },
        ),
        calc(EM_FIELD, vec![num(Q_CHARGE, "C"), num(Q_DISTANCE, "m")], |x| {
            Ok(vec![(Q_ELECTRIC_FIELD, physics::electric_field(x.c(), x.num(0)?, x.num(1)?)?, "N/C")])
        }),
        calc(EM_POTENTIAL, vec![num(Q_CHARGE, "C"), num(Q_DISTANCE, "m")], |x| {
            Ok(vec![(Q_ELECTRIC_POTENTIAL, physics::electric_potential(x.c(), x.num(0)?, x.num(1)?)?, "V")])
        }),
        calc(
            EM_OHM,
            vec![opt(Q_VOLTAGE, "V"), opt(Q_CURRENT, "A"), opt(Q_RESISTANCE, "Ω")],
            |x| {
                let r = physics::ohms_law(physics::OhmsLawInput {
                    voltage: x.opt(0)?,
                    current: x.opt(1)?,
                    resistance: x.opt(2)?,
                })?;
                Ok(vec![
                    (Q_VOLTAGE, r.voltage, "V"),
                    (Q_CURRENT, r.current, "A"),
                    (Q_RESISTANCE, r.resistance, "Ω"),
                ])
            },
        ),
        calc(
            EM_POWER,
            vec![opt(Q_VOLTAGE, "V"), opt(Q_CURRENT, "A"), opt(Q_RESISTANCE, "Ω")],
            |x| {
                let p = physics::electrical_power(x.opt(0)?, x.opt(1)?, x.opt(2)?)?;
                Ok(vec![(Q_POWER, p, "W")])
            },
        ),
        calc(
            EM_MAGNETIC,
            vec![
                num(Q_CHARGE, "C"),
                num(Q_VELOCITY, "m/s"),
                num(Q_MAGNETIC_FIELD, "T"),
                angle(Q_ANGLE),
            ],
            |x| {
                let theta = x.angle_deg(3, physics::MAGNETIC_FORCE_DEFAULT_ANGLE_DEG)?;
                let f = physics::magnetic_force(x.c(), x.num(0)?, x.num(1)?, x.num(2)?, theta)?;
                Ok(vec![(Q_FORCE, f, "N")])
            },
        ),
        calc(EM_FARADAY, vec![num(Q_FLUX_CHANGE, "Wb"), num(Q_TIME, "s")], |x| {
            Ok(vec![(Q_EMF, physics::faraday_emf(x.num(0)?, x.num(1)?)?, "V")])
        }),
        calc(
            PHYSICS_OPTICS,
            vec![
                opt(Q_FOCAL_LENGTH, "m"),
                opt(Q_OBJECT_DISTANCE, "m"),
                opt(Q_IMAGE_DISTANCE, "m"),
            ],
            |x| {
                let r = physics::lens_equation(physics::LensInput {
                    focal_length: x.opt(0)?,
                    object_distance: x.opt(1)?,
                    image_distance: x.opt(2)?,
                })?;
                Ok(vec![
                    (Q_FOCAL_LENGTH, r.focal_length, "m"),
                    (Q_OBJECT_DISTANCE, r.object_distance, "m"),
                    (Q_IMAGE_DISTANCE, r.image_distance, "m"),
                    (Q_MAGNIFICATION, r.magnification(), ""),
                ])
            },
        ),
        calc(MODERN_RELATIVISTIC, vec![num(Q_MASS, "kg"), num(Q_VELOCITY, "m/s")], |x| {
            Ok(vec![(Q_ENERGY, physics::relativistic_energy(x.c(), x.num(0)?, x.num(1)?)?, "J")])
        }),
        calc(MODERN_DE_BROGLIE, vec![num(Q_MASS, "kg"), num(Q_VELOCITY, "m/s")], |x| {
            Ok(vec![(Q_WAVELENGTH, physics::de_broglie_wavelength(x.c(), x.num(0)?, x.num(1)?)?, "m")])
        }),
    ]
}

/// 탭 하나의 계산 폼 상태.
#[derive(Default)]
struct FormState {
    selected: usize,
    inputs: Vec<String>,
    result: Option<Result<Vec<String>, String>>,
}

impl FormState {
    fn select(&mut self, index: usize, field_count: usize) {
        self.selected = index;
        self.inputs = vec![String::new(); field_count];
        self.result = None;
    }
}

/// 선택 목록 + 입력 칸 + 결과를 그린다.
fn form_ui(
    ui: &mut egui::Ui,
    id: &str,
    tr: &Translator,
    cfg: &Config,
    calculators: &[Calculator],
    state: &mut FormState,
) {
    let Some(current) = calculators.get(state.selected) else {
        return;
    };
    let mut picked = state.selected;
    ui.horizontal(|ui| {
        ui.label(tr.t(keys::GUI_CALCULATOR));
        egui::ComboBox::from_id_source(id)
            .width(320.0)
            .selected_text(menu_label(&tr.t(current.title)).to_string())
            .show_ui(ui, |ui| {
                for (i, c) in calculators.iter().enumerate() {
                    ui.selectable_value(&mut picked, i, menu_label(&tr.t(c.title)).to_string());
                }
            });
    });
    if picked != state.selected || state.inputs.len() != calculators[picked].fields.len() {
        state.select(picked, calculators[picked].fields.len());
    }
    let current = &calculators[state.selected];
    if current.fields.iter().any(|f| f.kind == FieldKind::Optional) {
        ui.label(egui::RichText::new(tr.t(keys::GUI_OPTIONAL_HINT)).small());
    }
    ui.add_space(6.0);

    egui::Grid::new((id, "fields"))
        .num_columns(3)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for (field, value) in current.fields.iter().zip(state.inputs.iter_mut()) {
                ui.label(tr.t(field.key));
                ui.add(egui::TextEdit::singleline(value).desired_width(180.0));
                let unit = match field.kind {
                    FieldKind::Angle => cfg.angle_unit.symbol(),
                    _ => field.unit,
                };
                ui.horizontal(|ui| {
                    ui.label(unit);
                    material_picker(ui, tr, field.key, value);
                });
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button(tr.t(keys::GUI_CALCULATE)).clicked() {
            let inputs = Inputs {
                values: &state.inputs,
                cfg,
            };
            let outcome = (current.run)(&inputs);
            if let Err(e) = &outcome {
                tracing::debug!(error = %e, calculator = current.title, "calculation rejected");
            }
            state.result = Some(
                outcome
                    .map(|rows| {
                        rows.into_iter()
                            .map(|(key, v, unit)| format::format_result(&tr.t(key), v, unit, &cfg.display))
                            .collect()
                    })
                    .map_err(|e| format!("{}: {e}", tr.t(keys::GENERAL_ERROR_PREFIX))),
            );
        }
        if ui.button(tr.t(keys::GUI_CLEAR)).clicked() {
            state.select(state.selected, current.fields.len());
        }
    });
    ui.separator();
    match &state.result {
        Some(Ok(lines)) => {
            for line in lines {
                ui.monospace(line.as_str());
            }
        }
        Some(Err(msg)) => {
            ui.colored_label(ui.visuals().error_fg_color, msg.as_str());
        }
        None => {}
    }
}

/// 비열/선팽창 계수 칸 옆에 재질 선택 상자를 붙인다.
fn material_picker(ui: &mut egui::Ui, tr: &Translator, key: &str, value: &mut String) {
    let property: fn(&material_db::MaterialData) -> Option<f64> = match key {
        keys::Q_SPECIFIC_HEAT => |m: &material_db::MaterialData| Some(m.specific_heat_j_kg_k),
        keys::Q_EXPANSION_COEFFICIENT => |m: &material_db::MaterialData| m.linear_expansion_per_k,
        _ => return,
    };
    egui::ComboBox::from_id_source((key, "material"))
        .selected_text(tr.t(keys::GUI_MATERIAL))
        .show_ui(ui, |ui| {
            for m in material_db::materials() {
                if let Some(v) = property(m) {
                    if ui.selectable_label(false, m.name).clicked() {
                        *value = v.to_string();
                    }
                }
            }
        });
}

// ------------------------------------------------------------ 앱

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Chemistry,
    Physics,
    Units,
    Constants,
    Examples,
}

struct GuiApp {
    config: Config,
    config_path: PathBuf,
    tr: Translator,
    tab: Tab,
    chemistry: Vec<Calculator>,
    physics: Vec<Calculator>,
    chem_form: FormState,
    phys_form: FormState,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_value: String,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 상수표
    constant_filter: String,
    // 설정
    show_settings: bool,
    show_help: bool,
    lang_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: Config, config_path: PathBuf, lang: &str) -> Self {
        let tr = Translator::new_with_pack(lang, config.language_pack_dir.as_deref());
        let chemistry = chemistry_calculators();
        let physics = physics_calculators();
        let mut chem_form = FormState::default();
        chem_form.select(0, chemistry[0].fields.len());
        let mut phys_form = FormState::default();
        phys_form.select(0, physics[0].fields.len());
        let (from, to) = default_units(QuantityKind::Temperature);
        Self {
            lang_input: config.language.clone(),
            config,
            config_path,
            tr,
            tab: Tab::Chemistry,
            chemistry,
            physics,
            chem_form,
            phys_form,
            conv_kind: QuantityKind::Temperature,
            conv_value: String::new(),
            conv_from: from.to_string(),
            conv_to: to.to_string(),
            conv_result: None,
            constant_filter: String::new(),
            show_settings: false,
            show_help: false,
            settings_status: None,
        }
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.vertical_centered(|ui| {
            ui.heading(tr.t(keys::GUI_NAV_HEADING));
            ui.add_space(8.0);
        });
        for (tab, key) in [
            (Tab::Chemistry, keys::GUI_TAB_CHEMISTRY),
            (Tab::Physics, keys::GUI_TAB_PHYSICS),
            (Tab::Units, keys::GUI_TAB_UNITS),
            (Tab::Constants, keys::GUI_TAB_CONSTANTS),
            (Tab::Examples, keys::GUI_TAB_EXAMPLES),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(tr.t(key))
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_units(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.heading(tr.t(keys::GUI_TAB_UNITS));
        ui.add_space(8.0);
        egui::Grid::new("conv_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("");
                let before = self.conv_kind;
                egui::ComboBox::from_id_source("conv_kind")
                    .selected_text(tr.t(kind_label(self.conv_kind)))
                    .show_ui(ui, |ui| {
                        for kind in QuantityKind::ALL {
                            ui.selectable_value(&mut self.conv_kind, kind, tr.t(kind_label(kind)));
                        }
                    });
                if before != self.conv_kind {
                    let (from, to) = default_units(self.conv_kind);
                    self.conv_from = from.to_string();
                    self.conv_to = to.to_string();
                    self.conv_result = None;
                }
                ui.end_row();

                ui.label(tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE).trim_end_matches([':', ' ']));
                ui.text_edit_singleline(&mut self.conv_value);
                ui.end_row();

                ui.label(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT).trim_end_matches([':', ' ']));
                unit_combo(ui, "conv_from", &mut self.conv_from, self.conv_kind.unit_symbols());
                ui.end_row();

                ui.label(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT).trim_end_matches([':', ' ']));
                unit_combo(ui, "conv_to", &mut self.conv_to, self.conv_kind.unit_symbols());
                ui.end_row();
            });
        ui.add_space(8.0);
        if ui.button(tr.t(keys::GUI_CALCULATE)).clicked() {
            let outcome = format::parse_number(&self.conv_value)
                .map_err(anyhow::Error::from)
                .and_then(|v| {
                    Ok(conversion::convert(
                        &self.config.constants,
                        self.conv_kind,
                        v,
                        &self.conv_from,
                        &self.conv_to,
                    )?)
                });
            self.conv_result = Some(match outcome {
                Ok(v) => format::format_result(
                    &tr.t(keys::UNIT_CONVERSION_RESULT),
                    v,
                    &self.conv_to,
                    &self.config.display,
                ),
                Err(e) => format!("{}: {e}", tr.t(keys::GENERAL_ERROR_PREFIX)),
            });
        }
        if let Some(res) = &self.conv_result {
            ui.monospace(res.as_str());
        }
    }

    fn ui_constants(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.heading(tr.t(keys::GUI_TAB_CONSTANTS));
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::GUI_FILTER));
            ui.text_edit_singleline(&mut self.constant_filter);
        });
        ui.separator();
        let filter = self.constant_filter.trim().to_lowercase();
        egui::Grid::new("constants_grid")
            .striped(true)
            .num_columns(4)
            .show(ui, |ui| {
                ui.strong(tr.t(keys::CONSTANTS_HEADER_NAME));
                ui.strong("");
                ui.strong(tr.t(keys::CONSTANTS_HEADER_VALUE));
                ui.strong(tr.t(keys::CONSTANTS_HEADER_UNIT));
                ui.end_row();
                for e in self.config.constants.entries() {
                    if !filter.is_empty() && !e.name.contains(&filter) && !e.symbol.to_lowercase().contains(&filter) {
                        continue;
                    }
                    ui.label(e.name);
                    ui.label(e.symbol);
                    ui.monospace(format::format_number(e.value, &self.config.display));
                    ui.label(e.unit);
                    ui.end_row();
                }
            });
    }

    fn ui_examples(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_TAB_EXAMPLES));
        match worked_examples::examples(&self.config.constants, &self.config.display) {
            Ok(list) => {
                for ex in &list {
                    egui::CollapsingHeader::new(format!("[{}] {}", ex.category.title(), ex.title))
                        .default_open(false)
                        .show(ui, |ui| {
                            for line in &ex.lines {
                                ui.monospace(line.as_str());
                            }
                        });
                }
            }
            Err(e) => {
                ui.colored_label(ui.visuals().error_fg_color, e.to_string());
            }
        }
        ui.separator();
        for (section, formulas) in worked_examples::formula_reference() {
            ui.strong(*section);
            for f in *formulas {
                ui.monospace(*f);
            }
        }
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let tr = self.tr.clone();
        ui.label(tr.t(keys::GUI_SETTINGS_LANGUAGE));
        egui::ComboBox::from_id_source("lang_choice")
            .selected_text(self.lang_input.clone())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.lang_input, "auto".into(), tr.t(keys::GUI_SETTINGS_LANGUAGE_AUTO));
                ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                ui.selectable_value(&mut self.lang_input, "en".into(), "English");
            });
        ui.separator();

        ui.label(tr.t(keys::GUI_SETTINGS_DECIMAL_PLACES));
        let mut places = self.config.display.decimal_places;
        if ui.add(egui::Slider::new(&mut places, 1..=12)).changed() {
            self.config.set_decimal_places(places);
        }
        ui.separator();

        ui.label(tr.t(keys::GUI_SETTINGS_ANGLE_UNIT));
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.config.angle_unit, AngleUnit::Degrees, tr.t(keys::GUI_SETTINGS_DEGREES));
            ui.radio_value(&mut self.config.angle_unit, AngleUnit::Radians, tr.t(keys::GUI_SETTINGS_RADIANS));
        });
        ui.separator();

        ui.label(tr.t(keys::GUI_SETTINGS_ALPHA));
        ui.add(egui::Slider::new(&mut self.config.window_alpha, 0.3..=1.0));
        ui.separator();

        ui.label(tr.t(keys::GUI_SETTINGS_FONT));
        ui.horizontal(|ui| {
            ui.label(self.config.custom_font_path.as_deref().unwrap_or("-"));
            if ui.button(tr.t(keys::GUI_SETTINGS_FONT_PICK)).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("font", &["ttf", "ttc", "otf"])
                    .pick_file()
                {
                    match load_custom_font(ctx, &path) {
                        Ok(()) => self.config.custom_font_path = Some(path.display().to_string()),
                        Err(e) => {
                            self.settings_status = Some(format!("{}: {e}", tr.t(keys::GUI_SETTINGS_FONT_ERROR)))
                        }
                    }
                }
            }
        });
        ui.separator();

        if ui.button(tr.t(keys::GUI_SETTINGS_SAVE)).clicked() {
            self.config.language = self.lang_input.clone();
            // 언어는 즉시 반영
            let resolved = i18n::resolve_language(&self.config.language, None);
            self.tr = Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
            self.settings_status = Some(match self.config.save(&self.config_path) {
                Ok(()) => {
                    tracing::info!(path = %self.config_path.display(), "settings saved");
                    self.tr.t(keys::GUI_SETTINGS_SAVED)
                }
                Err(e) => format!("{}: {e}", self.tr.t(keys::GENERAL_ERROR_PREFIX)),
            });
        }
        if let Some(msg) = &self.settings_status {
            ui.label(msg);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.config.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.config.window_alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::GUI_APP_TITLE));
                ui.separator();
                if ui.button(self.tr.t(keys::GUI_SETTINGS_TITLE)).clicked() {
                    self.show_settings = true;
                }
                if ui.button(self.tr.t(keys::GUI_HELP_TITLE)).clicked() {
                    self.show_help = true;
                }
            });
        });

        if self.show_settings {
            let mut open = true;
            egui::Window::new(self.tr.t(keys::GUI_SETTINGS_TITLE))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| self.ui_settings(ui, ctx));
            self.show_settings = open;
        }

        if self.show_help {
            let mut open = true;
            egui::Window::new(self.tr.t(keys::GUI_HELP_TITLE))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(self.tr.t(keys::HELP_BODY));
                    ui.separator();
                    ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                });
            self.show_help = open;
        }

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| self.ui_nav(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Chemistry => form_ui(
                        ui,
                        "chemistry",
                        &self.tr,
                        &self.config,
                        &self.chemistry,
                        &mut self.chem_form,
                    ),
                    Tab::Physics => form_ui(
                        ui,
                        "physics",
                        &self.tr,
                        &self.config,
                        &self.physics,
                        &mut self.phys_form,
                    ),
                    Tab::Units => self.ui_units(ui),
                    Tab::Constants => self.ui_constants(ui),
                    Tab::Examples => self.ui_examples(ui),
                });
        });
    }
}

fn kind_label(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Temperature => keys::Q_TEMPERATURE,
        QuantityKind::Length => keys::Q_LENGTH,
        QuantityKind::Mass => keys::Q_MASS,
        QuantityKind::Energy => keys::Q_ENERGY,
        QuantityKind::Pressure => keys::Q_PRESSURE,
    }
}

fn default_units(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Temperature => ("C", "K"),
        QuantityKind::Length => ("m", "ft"),
        QuantityKind::Mass => ("kg", "lb"),
        QuantityKind::Energy => ("J", "cal"),
        QuantityKind::Pressure => ("atm", "kPa"),
    }
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.clone())
        .show_ui(ui, |ui| {
            for unit in options {
                ui.selectable_value(value, unit.to_string(), *unit);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(calcs: &[Calculator], title: &str, values: &[&str]) -> anyhow::Result<Outputs> {
        let cfg = Config::default();
        let calc = calcs.iter().find(|c| c.title == title).expect("calculator");
        let values: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        (calc.run)(&Inputs { values: &values, cfg: &cfg })
    }

    #[test]
    fn menu_numbers_are_stripped() {
        assert_eq!(menu_label("12) Combined gas law"), "Combined gas law");
        assert_eq!(menu_label("Ohm) no number"), "Ohm) no number");
        assert_eq!(menu_label("plain"), "plain");
    }

    #[test]
    fn blank_field_is_the_unknown() {
        let out = run(&physics_calculators(), keys::EM_OHM, &["12", "", "3"]).unwrap();
        assert_eq!(out[1], (keys::Q_CURRENT, 4.0, "A"));
    }

    #[test]
    fn nernst_temperature_defaults_to_room_temperature() {
        let out = run(&chemistry_calculators(), keys::CHEMISTRY_NERNST, &["1.1", "2", "1", ""]).unwrap();
        assert!((out[0].1 - 1.1).abs() < 1e-12);
    }

    #[test]
    fn bad_number_is_reported() {
        assert!(run(&chemistry_calculators(), keys::PH_OPTION_PH, &["abc"]).is_err());
    }

    #[test]
    fn every_calculator_has_fields() {
        for c in chemistry_calculators().iter().chain(physics_calculators().iter()) {
            assert!(!c.fields.is_empty(), "{}", c.title);
        }
    }
}
