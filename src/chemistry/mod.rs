//! 화학 계산 모듈 모음.
//! 화학식/분자량, 기체 법칙, 용액(pH·희석), 반응 속도, 전기화학, 양자 에너지 준위로 구성한다.

pub mod electrochem;
pub mod elements;
pub mod formula;
pub mod gas_law;
pub mod kinetics;
pub mod quantum;
pub mod solution;

pub use electrochem::*;
pub use formula::{molecular_weight, stoichiometric_product_mass, ChemicalFormula};
pub use gas_law::*;
pub use kinetics::*;
pub use quantum::*;
pub use solution::*;
