use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::error::CalcError;
use crate::i18n::{keys, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 공식 계산 오류
    #[error("{0}")]
    Calc(#[from] CalcError),
    /// 표준 입력이 닫힘 (EOF)
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

impl AppError {
    /// 메뉴로 돌아가 계속 진행할 수 있는 오류인지 여부.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Calc(_) | AppError::Conversion(_))
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 설정 메뉴에서 값이 바뀌거나 종료할 때 `config_path` 에 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(tr, config) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        let outcome = match choice {
            MenuChoice::Chemistry => ui_cli::handle_chemistry(tr, config),
            MenuChoice::Physics => ui_cli::handle_physics(tr, config),
            MenuChoice::UnitConversion => {
                let r = ui_cli::handle_unit_conversion(tr, config);
                ui_cli::report(tr, r).and_then(|_| ui_cli::pause(tr))
            }
            MenuChoice::Constants => {
                ui_cli::handle_constants(tr, config).and_then(|_| ui_cli::pause(tr))
            }
            MenuChoice::Examples => {
                let r = ui_cli::handle_examples(tr, config);
                ui_cli::report(tr, r).and_then(|_| ui_cli::pause(tr))
            }
            MenuChoice::Help => ui_cli::show_help(tr, config).and_then(|_| ui_cli::pause(tr)),
            MenuChoice::Settings => match ui_cli::handle_settings(tr, config) {
                Ok(true) => {
                    config.save(config_path)?;
                    tracing::info!(path = %config_path.display(), "settings saved");
                    ui_cli::pause(tr)
                }
                Ok(false) => ui_cli::pause(tr),
                Err(e) => Err(e),
            },
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(keys::GENERAL_APP_EXIT));
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::InputClosed) => {
                tracing::debug!("stdin closed, exiting");
                config.save(config_path)?;
                break;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Constraint;

    #[test]
    fn calculation_errors_do_not_end_the_session() {
        let calc: AppError = CalcError::Domain {
            parameter: "mass",
            constraint: Constraint::Positive,
        }
        .into();
        assert!(calc.is_recoverable());
        assert!(AppError::from(ConversionError::UnknownUnit("parsec".into())).is_recoverable());
        assert!(!AppError::InputClosed.is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "broken pipe");
        assert!(!AppError::from(io).is_recoverable());
    }
}
