use std::fs;
use std::path::PathBuf;

use chemphys_toolbox::config::{self, AngleUnit, Config};
use chemphys_toolbox::i18n::{keys, Translator};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chemphys_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = scratch_dir("create");
    let path = dir.join("config.toml");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn saved_settings_survive_reload() {
    let dir = scratch_dir("reload");
    let path = dir.join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.angle_unit = AngleUnit::Radians;
    cfg.set_decimal_places(6);
    cfg.save(&path).expect("save");
    let back = config::load_or_default(&path).expect("reload");
    assert_eq!(back, cfg);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn broken_config_is_an_error() {
    let dir = scratch_dir("broken");
    let path = dir.join("config.toml");
    fs::write(&path, "language = [").expect("write");
    assert!(config::load_or_default(&path).is_err());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn language_pack_overrides_single_keys() {
    let dir = scratch_dir("pack");
    fs::write(dir.join("en-us.toml"), "[general]\nerror_prefix = \"Oops\"\n").expect("write");
    let tr = Translator::new_with_pack("en-us", dir.to_str());
    assert_eq!(tr.t(keys::GENERAL_ERROR_PREFIX), "Oops");
    // 덮어쓰지 않은 키는 내장 문자열
    assert_eq!(tr.t(keys::Q_MASS), Translator::new("en").t(keys::Q_MASS));
    let _ = fs::remove_dir_all(&dir);
}
