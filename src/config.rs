use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::Constants;
use crate::format::DisplayOptions;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 셸에서 각도를 입력받는 단위. 계산 함수는 항상 도(degree)를 받는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// 입력값을 도로 바꾼다.
    pub fn to_degrees(self, c: &Constants, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Radians => c.radians_to_degrees(value),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "deg",
            AngleUnit::Radians => "rad",
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / ko / en
    pub language: String,
    /// 언어팩 디렉터리. 파일이 있으면 내장 문자열을 키 단위로 덮어쓴다.
    pub language_pack_dir: Option<String>,
    pub angle_unit: AngleUnit,
    /// 메뉴 전환 시 화면 지우기
    pub clear_screen: bool,
    /// GUI 창 투명도 (0.3~1.0)
    pub window_alpha: f32,
    /// GUI 사용자 글꼴 파일
    pub custom_font_path: Option<String>,
    pub display: DisplayOptions,
    /// 상수 덮어쓰기. 빠진 항목은 기본값을 쓴다.
    pub constants: Constants,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: Some("locales".to_string()),
            angle_unit: AngleUnit::Degrees,
            clear_screen: true,
            window_alpha: 1.0,
            custom_font_path: None,
            display: DisplayOptions::default(),
            constants: Constants::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(io_error(path))?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_error(path))?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// 소수점 자릿수를 화면에 맞는 범위로 제한한다.
    pub fn set_decimal_places(&mut self, places: usize) {
        self.display.decimal_places = places.clamp(1, 12);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let mut cfg = Config::default();
        cfg.language = "ko".into();
        cfg.angle_unit = AngleUnit::Radians;
        cfg.constants.standard_gravity = 9.81;
        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let back: Config = toml::from_str(&text).expect("parse");
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let cfg: Config = toml::from_str(
            "language = \"en\"\n[display]\ndecimal_places = 6\n[constants]\nspeed_of_light = 3.0e8\n",
        )
        .expect("parse");
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.display.decimal_places, 6);
        assert_eq!(cfg.display.sci_upper, 1e6);
        assert_eq!(cfg.constants.speed_of_light, 3.0e8);
        assert_eq!(cfg.constants.planck_constant, 6.626e-34);
        assert!(cfg.clear_screen);
    }

    #[test]
    fn radians_are_converted_for_the_core() {
        let c = Constants::default();
        let deg = AngleUnit::Radians.to_degrees(&c, c.pi / 2.0);
        assert!((deg - 90.0).abs() < 1e-12);
        assert_eq!(AngleUnit::Degrees.to_degrees(&c, 30.0), 30.0);
    }

    #[test]
    fn decimal_places_are_clamped() {
        let mut cfg = Config::default();
        cfg.set_decimal_places(0);
        assert_eq!(cfg.display.decimal_places, 1);
        cfg.set_decimal_places(40);
        assert_eq!(cfg.display.decimal_places, 12);
    }
}
