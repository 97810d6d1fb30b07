//! 화학/물리 공식 계산기.
//!
//! 핵심 계산 로직(`chemistry`, `physics`, `units`)은 입출력과 분리된 순수 함수로 두고,
//! CLI(`app`, `ui_cli`)와 GUI 바이너리가 같은 함수를 호출한다.

pub mod app;
pub mod chemistry;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod format;
pub mod i18n;
pub mod material_db;
pub mod physics;
pub mod quantity;
pub mod solver;
pub mod ui_cli;
pub mod units;
pub(crate) mod validate;
pub mod worked_examples;

pub use constants::Constants;
pub use error::{CalcError, Constraint, FormulaError};
