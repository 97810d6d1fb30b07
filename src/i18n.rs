use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const GENERAL_ERROR_PREFIX: &str = "general.error_prefix";
    pub const GENERAL_APP_EXIT: &str = "general.app_exit";
    pub const GENERAL_PRESS_ENTER: &str = "general.press_enter";
    pub const GENERAL_INVALID_SELECTION: &str = "general.invalid_selection";
    pub const GENERAL_INVALID_NUMBER: &str = "general.invalid_number";
    pub const GENERAL_INVALID_INTEGER: &str = "general.invalid_integer";
    pub const GENERAL_BACK: &str = "general.back";
    pub const GENERAL_PROMPT_SELECT: &str = "general.prompt_select";
    pub const GENERAL_BLANK_IS_UNKNOWN: &str = "general.blank_is_unknown";
    pub const GENERAL_SOLVED_FOR: &str = "general.solved_for";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CHEMISTRY: &str = "main_menu.chemistry";
    pub const MAIN_MENU_PHYSICS: &str = "main_menu.physics";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_CONSTANTS: &str = "main_menu.constants";
    pub const MAIN_MENU_EXAMPLES: &str = "main_menu.examples";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_HELP: &str = "main_menu.help";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";

    pub const CHEMISTRY_TITLE: &str = "chemistry.title";
    pub const CHEMISTRY_MOLECULAR_WEIGHT: &str = "chemistry.molecular_weight";
    pub const CHEMISTRY_IDEAL_GAS: &str = "chemistry.ideal_gas";
    pub const CHEMISTRY_PH: &str = "chemistry.ph";
    pub const CHEMISTRY_DILUTION: &str = "chemistry.dilution";
    pub const CHEMISTRY_RATE_LAW: &str = "chemistry.rate_law";
    pub const CHEMISTRY_QUANTUM: &str = "chemistry.quantum";
    pub const CHEMISTRY_ARRHENIUS: &str = "chemistry.arrhenius";
    pub const CHEMISTRY_BUFFER: &str = "chemistry.buffer";
    pub const CHEMISTRY_NERNST: &str = "chemistry.nernst";
    pub const CHEMISTRY_BEER_LAMBERT: &str = "chemistry.beer_lambert";
    pub const CHEMISTRY_VAN_DER_WAALS: &str = "chemistry.van_der_waals";
    pub const CHEMISTRY_COMBINED_GAS: &str = "chemistry.combined_gas";
    pub const CHEMISTRY_STOICHIOMETRY: &str = "chemistry.stoichiometry";

    pub const PH_OPTION_PH: &str = "ph.option_ph";
    pub const PH_OPTION_CONCENTRATION: &str = "ph.option_concentration";
    pub const PH_OPTION_POH: &str = "ph.option_poh";

    pub const QUANTUM_OPTION_BOX: &str = "quantum.option_box";
    pub const QUANTUM_OPTION_OSCILLATOR: &str = "quantum.option_oscillator";
    pub const QUANTUM_OPTION_HYDROGEN: &str = "quantum.option_hydrogen";

    pub const PHYSICS_TITLE: &str = "physics.title";
    pub const PHYSICS_KINEMATICS: &str = "physics.kinematics";
    pub const PHYSICS_FORCES: &str = "physics.forces";
    pub const PHYSICS_ENERGY: &str = "physics.energy";
    pub const PHYSICS_THERMO: &str = "physics.thermo";
    pub const PHYSICS_WAVES: &str = "physics.waves";
    pub const PHYSICS_ELECTROMAGNETISM: &str = "physics.electromagnetism";
    pub const PHYSICS_OPTICS: &str = "physics.optics";
    pub const PHYSICS_MODERN: &str = "physics.modern";

    pub const KINEMATICS_CONSTANT_ACCELERATION: &str = "kinematics.constant_acceleration";
    pub const KINEMATICS_PROJECTILE: &str = "kinematics.projectile";

    pub const FORCES_NEWTON: &str = "forces.newton";
    pub const FORCES_FRICTION: &str = "forces.friction";
    pub const FORCES_CENTRIPETAL: &str = "forces.centripetal";

    pub const ENERGY_KINETIC: &str = "energy.kinetic";
    pub const ENERGY_POTENTIAL: &str = "energy.potential";
    pub const ENERGY_WORK: &str = "energy.work";
    pub const ENERGY_POWER: &str = "energy.power";

    pub const THERMO_HEAT: &str = "thermo.heat";
    pub const THERMO_EXPANSION: &str = "thermo.expansion";
    pub const THERMO_GAS_WORK: &str = "thermo.gas_work";
    pub const THERMO_CARNOT: &str = "thermo.carnot";

    pub const WAVES_SPEED: &str = "waves.speed";
    pub const WAVES_SHM: &str = "waves.shm";
    pub const WAVES_PENDULUM: &str = "waves.pendulum";
    pub const WAVES_SPRING: &str = "waves.spring";
    pub const WAVES_DOPPLER: &str = "waves.doppler";
    pub const WAVES_DOPPLER_NOTE: &str = "waves.doppler_note";

    pub const EM_COULOMB: &str = "em.coulomb";
    pub const EM_FIELD: &str = "em.field";
    pub const EM_POTENTIAL: &str = "em.potential";
    pub const EM_OHM: &str = "em.ohm";
    pub const EM_POWER: &str = "em.power";
    pub const EM_MAGNETIC: &str = "em.magnetic";
    pub const EM_FARADAY: &str = "em.faraday";
    pub const EM_POWER_NOTE: &str = "em.power_note";

    pub const MODERN_RELATIVISTIC: &str = "modern.relativistic";
    pub const MODERN_DE_BROGLIE: &str = "modern.de_broglie";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_AVAILABLE: &str = "unit_conversion.available";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";

    pub const CONSTANTS_HEADING: &str = "constants.heading";
    pub const CONSTANTS_PROMPT_LOOKUP: &str = "constants.prompt_lookup";
    pub const CONSTANTS_NOT_FOUND: &str = "constants.not_found";
    pub const CONSTANTS_HEADER_NAME: &str = "constants.header_name";
    pub const CONSTANTS_HEADER_VALUE: &str = "constants.header_value";
    pub const CONSTANTS_HEADER_UNIT: &str = "constants.header_unit";

    pub const EXAMPLES_HEADING: &str = "examples.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_DECIMAL_PLACES: &str = "settings.prompt_decimal_places";
    pub const SETTINGS_PROMPT_ANGLE_UNIT: &str = "settings.prompt_angle_unit";
    pub const SETTINGS_PROMPT_CLEAR_SCREEN: &str = "settings.prompt_clear_screen";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE_RESTART: &str = "settings.language_restart";

    pub const HELP_HEADING: &str = "help.heading";
    pub const HELP_BODY: &str = "help.body";

    pub const GUI_APP_TITLE: &str = "gui.app_title";
    pub const GUI_NAV_HEADING: &str = "gui.nav_heading";
    pub const GUI_TAB_CHEMISTRY: &str = "gui.tab_chemistry";
    pub const GUI_TAB_PHYSICS: &str = "gui.tab_physics";
    pub const GUI_TAB_UNITS: &str = "gui.tab_units";
    pub const GUI_TAB_CONSTANTS: &str = "gui.tab_constants";
    pub const GUI_TAB_EXAMPLES: &str = "gui.tab_examples";
    pub const GUI_CALCULATOR: &str = "gui.calculator";
    pub const GUI_CALCULATE: &str = "gui.calculate";
    pub const GUI_CLEAR: &str = "gui.clear";
    pub const GUI_OPTIONAL_HINT: &str = "gui.optional_hint";
    pub const GUI_MATERIAL: &str = "gui.material";
    pub const GUI_FILTER: &str = "gui.filter";
    pub const GUI_SETTINGS_TITLE: &str = "gui.settings_title";
    pub const GUI_SETTINGS_LANGUAGE: &str = "gui.settings_language";
    pub const GUI_SETTINGS_LANGUAGE_AUTO: &str = "gui.settings_language_auto";
    pub const GUI_SETTINGS_DECIMAL_PLACES: &str = "gui.settings_decimal_places";
    pub const GUI_SETTINGS_ANGLE_UNIT: &str = "gui.settings_angle_unit";
    pub const GUI_SETTINGS_DEGREES: &str = "gui.settings_degrees";
    pub const GUI_SETTINGS_RADIANS: &str = "gui.settings_radians";
    pub const GUI_SETTINGS_ALPHA: &str = "gui.settings_alpha";
    pub const GUI_SETTINGS_FONT: &str = "gui.settings_font";
    pub const GUI_SETTINGS_FONT_PICK: &str = "gui.settings_font_pick";
    pub const GUI_SETTINGS_FONT_ERROR: &str = "gui.settings_font_error";
    pub const GUI_SETTINGS_SAVE: &str = "gui.settings_save";
    pub const GUI_SETTINGS_SAVED: &str = "gui.settings_saved";
    pub const GUI_HELP_TITLE: &str = "gui.help_title";

    pub const Q_FORMULA: &str = "q.formula";
    pub const Q_MOLAR_MASS: &str = "q.molar_mass";
    pub const Q_PRESSURE: &str = "q.pressure";
    pub const Q_VOLUME: &str = "q.volume";
    pub const Q_MOLES: &str = "q.moles";
    pub const Q_TEMPERATURE: &str = "q.temperature";
    pub const Q_H_CONCENTRATION: &str = "q.h_concentration";
    pub const Q_PH: &str = "q.ph";
    pub const Q_POH: &str = "q.poh";
    pub const Q_INITIAL_CONCENTRATION: &str = "q.initial_concentration";
    pub const Q_INITIAL_VOLUME: &str = "q.initial_volume";
    pub const Q_FINAL_CONCENTRATION: &str = "q.final_concentration";
    pub const Q_FINAL_VOLUME: &str = "q.final_volume";
    pub const Q_RATE: &str = "q.rate";
    pub const Q_CONC_A: &str = "q.conc_a";
    pub const Q_CONC_B: &str = "q.conc_b";
    pub const Q_ORDER_A: &str = "q.order_a";
    pub const Q_ORDER_B: &str = "q.order_b";
    pub const Q_RATE_CONSTANT: &str = "q.rate_constant";
    pub const Q_OVERALL_ORDER: &str = "q.overall_order";
    pub const Q_QUANTUM_NUMBER: &str = "q.quantum_number";
    pub const Q_VIBRATIONAL_NUMBER: &str = "q.vibrational_number";
    pub const Q_BOX_LENGTH: &str = "q.box_length";
    pub const Q_PARTICLE_MASS: &str = "q.particle_mass";
    pub const Q_FREQUENCY: &str = "q.frequency";
    pub const Q_ENERGY: &str = "q.energy";
    pub const Q_PRE_EXPONENTIAL: &str = "q.pre_exponential";
    pub const Q_ACTIVATION_ENERGY: &str = "q.activation_energy";
    pub const Q_PKA: &str = "q.pka";
    pub const Q_BASE_CONCENTRATION: &str = "q.base_concentration";
    pub const Q_ACID_CONCENTRATION: &str = "q.acid_concentration";
    pub const Q_STANDARD_POTENTIAL: &str = "q.standard_potential";
    pub const Q_ELECTRONS: &str = "q.electrons";
    pub const Q_REACTION_QUOTIENT: &str = "q.reaction_quotient";
    pub const Q_CELL_POTENTIAL: &str = "q.cell_potential";
    pub const Q_MOLAR_ABSORPTIVITY: &str = "q.molar_absorptivity";
    pub const Q_PATH_LENGTH: &str = "q.path_length";
    pub const Q_CONCENTRATION: &str = "q.concentration";
    pub const Q_ABSORBANCE: &str = "q.absorbance";
    pub const Q_VDW_A: &str = "q.vdw_a";
    pub const Q_VDW_B: &str = "q.vdw_b";
    pub const Q_P1: &str = "q.p1";
    pub const Q_V1: &str = "q.v1";
    pub const Q_T1: &str = "q.t1";
    pub const Q_P2: &str = "q.p2";
    pub const Q_T2: &str = "q.t2";
    pub const Q_V2: &str = "q.v2";
    pub const Q_REACTANT_MASS: &str = "q.reactant_mass";
    pub const Q_REACTANT_FORMULA: &str = "q.reactant_formula";
    pub const Q_PRODUCT_FORMULA: &str = "q.product_formula";
    pub const Q_MOLE_RATIO: &str = "q.mole_ratio";
    pub const Q_REACTANT_MOLES: &str = "q.reactant_moles";
    pub const Q_PRODUCT_MOLES: &str = "q.product_moles";
    pub const Q_PRODUCT_MASS: &str = "q.product_mass";
    pub const Q_INITIAL_VELOCITY: &str = "q.initial_velocity";
    pub const Q_ACCELERATION: &str = "q.acceleration";
    pub const Q_TIME: &str = "q.time";
    pub const Q_FINAL_VELOCITY: &str = "q.final_velocity";
    pub const Q_DISPLACEMENT: &str = "q.displacement";
    pub const Q_LAUNCH_ANGLE: &str = "q.launch_angle";
    pub const Q_V0X: &str = "q.v0x";
    pub const Q_V0Y: &str = "q.v0y";
    pub const Q_FLIGHT_TIME: &str = "q.flight_time";
    pub const Q_MAX_HEIGHT: &str = "q.max_height";
    pub const Q_RANGE: &str = "q.range";
    pub const Q_MASS: &str = "q.mass";
    pub const Q_VELOCITY: &str = "q.velocity";
    pub const Q_RADIUS: &str = "q.radius";
    pub const Q_FORCE: &str = "q.force";
    pub const Q_FRICTION_COEFFICIENT: &str = "q.friction_coefficient";
    pub const Q_NORMAL_FORCE: &str = "q.normal_force";
    pub const Q_HEIGHT: &str = "q.height";
    pub const Q_DISTANCE: &str = "q.distance";
    pub const Q_ANGLE: &str = "q.angle";
    pub const Q_WORK: &str = "q.work";
    pub const Q_POWER: &str = "q.power";
    pub const Q_SPECIFIC_HEAT: &str = "q.specific_heat";
    pub const Q_DELTA_T: &str = "q.delta_t";
    pub const Q_HEAT: &str = "q.heat";
    pub const Q_INITIAL_LENGTH: &str = "q.initial_length";
    pub const Q_EXPANSION_COEFFICIENT: &str = "q.expansion_coefficient";
    pub const Q_LENGTH_CHANGE: &str = "q.length_change";
    pub const Q_DELTA_V: &str = "q.delta_v";
    pub const Q_T_HOT: &str = "q.t_hot";
    pub const Q_T_COLD: &str = "q.t_cold";
    pub const Q_EFFICIENCY: &str = "q.efficiency";
    pub const Q_WAVELENGTH: &str = "q.wavelength";
    pub const Q_WAVE_SPEED: &str = "q.wave_speed";
    pub const Q_AMPLITUDE: &str = "q.amplitude";
    pub const Q_ANGULAR_FREQUENCY: &str = "q.angular_frequency";
    pub const Q_PHASE: &str = "q.phase";
    pub const Q_POSITION: &str = "q.position";
    pub const Q_LENGTH: &str = "q.length";
    pub const Q_SPRING_CONSTANT: &str = "q.spring_constant";
    pub const Q_PERIOD: &str = "q.period";
    pub const Q_SOURCE_FREQUENCY: &str = "q.source_frequency";
    pub const Q_SOURCE_VELOCITY: &str = "q.source_velocity";
    pub const Q_OBSERVER_VELOCITY: &str = "q.observer_velocity";
    pub const Q_OBSERVED_FREQUENCY: &str = "q.observed_frequency";
    pub const Q_CHARGE: &str = "q.charge";
    pub const Q_CHARGE1: &str = "q.charge1";
    pub const Q_CHARGE2: &str = "q.charge2";
    pub const Q_ELECTRIC_FIELD: &str = "q.electric_field";
    pub const Q_ELECTRIC_POTENTIAL: &str = "q.electric_potential";
    pub const Q_VOLTAGE: &str = "q.voltage";
    pub const Q_CURRENT: &str = "q.current";
    pub const Q_RESISTANCE: &str = "q.resistance";
    pub const Q_MAGNETIC_FIELD: &str = "q.magnetic_field";
    pub const Q_FLUX_CHANGE: &str = "q.flux_change";
    pub const Q_EMF: &str = "q.emf";
    pub const Q_FOCAL_LENGTH: &str = "q.focal_length";
    pub const Q_OBJECT_DISTANCE: &str = "q.object_distance";
    pub const Q_IMAGE_DISTANCE: &str = "q.image_distance";
    pub const Q_MAGNIFICATION: &str = "q.magnification";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    fn pack_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko-kr",
            Language::En => "en-us",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
///
/// 조회 순서: 언어팩 디렉터리 파일 → 내장 문자열(선택 언어) → 내장 영어 → 키 자체.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: HashMap<String, String>,
    built_in: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .unwrap_or_default();
        if !overrides.is_empty() {
            tracing::debug!(count = overrides.len(), "language pack overrides loaded");
        }
        Self {
            lang,
            overrides,
            built_in: built_in_pack(lang),
            fallback: built_in_pack(Language::En),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 어느 언어팩에도 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .or_else(|| self.built_in.get(key))
            .or_else(|| self.fallback.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 없으면 키를 그대로 돌려준다.
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(v) => v.to_string(),
            None => {
                tracing::warn!(key, "missing translation");
                key.to_string()
            }
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 플랫 맵 또는 [섹션] 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            tracing::warn!(path = %path.display(), "language pack could not be parsed");
        }
        map
    };

    // 1) 전체 코드 (en-us) 2) 기본 코드 (en)
    try_load(lang).or_else(|| {
        lang.split_once(['-', '_'])
            .and_then(|(base, _)| try_load(base))
    })
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::Ko => include_str!("../locales/ko-kr.toml"),
        Language::En => include_str!("../locales/en-us.toml"),
    };
    parse_toml_to_map(src).unwrap_or_else(|| {
        tracing::error!(lang = lang.pack_code(), "built-in language pack is invalid");
        HashMap::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_packs_have_the_same_keys() {
        let ko = built_in_pack(Language::Ko);
        let en = built_in_pack(Language::En);
        assert!(!ko.is_empty());
        let mut ko_keys: Vec<_> = ko.keys().collect();
        let mut en_keys: Vec<_> = en.keys().collect();
        ko_keys.sort();
        en_keys.sort();
        assert_eq!(ko_keys, en_keys);
    }

    #[test]
    fn translates_by_language() {
        assert_eq!(Translator::new("ko").t(keys::GENERAL_ERROR_PREFIX), "오류");
        assert_eq!(Translator::new("en-us").t(keys::GENERAL_ERROR_PREFIX), "Error");
        assert_eq!(Translator::new("fr").language(), Language::En);
    }

    #[test]
    fn unknown_key_returns_key() {
        assert_eq!(Translator::new("en").t("no.such.key"), "no.such.key");
    }

    #[test]
    fn cli_flag_beats_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en")), "en-us");
        assert_eq!(resolve_language("", Some("ko_KR")), "ko-kr");
    }

    #[test]
    fn nested_tables_are_flattened() {
        let map = parse_toml_to_map("[general]\nerror_prefix = \"E\"\n").expect("map");
        assert_eq!(map.get("general.error_prefix").map(String::as_str), Some("E"));
    }
}
