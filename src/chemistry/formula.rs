//! 화학식 문자열("H2O", "C6H12O6")을 (원소, 개수) 목록으로 해석하고 분자량을 구한다.
//! 괄호, 동위원소, 전하 표기는 지원하지 않는다.

use std::fmt;
use std::str::FromStr;

use crate::chemistry::elements::{find_element, Element};
use crate::error::{CalcError, FormulaError};
use crate::validate;

/// 해석된 화학식. 입력 순서를 보존한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ChemicalFormula {
    parts: Vec<(&'static Element, u32)>,
}

impl ChemicalFormula {
    /// 왼쪽부터 읽으며 원소 기호와 개수를 분리한다.
    ///
    /// 두 번째 글자가 소문자이고 그 두 글자가 원소표에 있으면 두 글자 기호,
    /// 아니면 한 글자 기호로 본다. 뒤따르는 숫자는 개수(생략 시 1)이다.
    pub fn parse(src: &str) -> Result<Self, FormulaError> {
        let chars: Vec<char> = src.trim().chars().collect();
        if chars.is_empty() {
            return Err(FormulaError::EmptyFormula);
        }

        let mut parts = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let first = chars[i];
            let pair = chars
                .get(i + 1)
                .filter(|c| c.is_ascii_lowercase())
                .map(|c| format!("{first}{c}"));

            let (element, width) = match pair.as_deref().and_then(find_element) {
                Some(e) => (e, 2),
                None => match find_element(first.encode_utf8(&mut [0; 4])) {
                    Some(e) => (e, 1),
                    None => {
                        return Err(FormulaError::UnknownElement(
                            pair.unwrap_or_else(|| first.to_string()),
                        ))
                    }
                },
            };
            i += width;

            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let count = if start == i {
                1
            } else {
                let digits: String = chars[start..i].iter().collect();
                digits
                    .parse::<u32>()
                    .map_err(|_| FormulaError::InvalidCount(digits))?
            };
            parts.push((element, count));
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[(&'static Element, u32)] {
        &self.parts
    }

    /// 몰질량(g/mol) = Σ 원자량 × 개수
    pub fn molar_mass(&self) -> f64 {
        self.parts
            .iter()
            .map(|(e, n)| e.atomic_mass * f64::from(*n))
            .sum()
    }

    /// 전체 원자 수
    pub fn atom_count(&self) -> u64 {
        self.parts.iter().map(|(_, n)| u64::from(*n)).sum()
    }
}

impl FromStr for ChemicalFormula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ChemicalFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (e, n) in &self.parts {
            if *n == 1 {
                write!(f, "{}", e.symbol)?;
            } else {
                write!(f, "{}{n}", e.symbol)?;
            }
        }
        Ok(())
    }
}

/// 화학식의 분자량(g/mol)을 계산한다.
pub fn molecular_weight(formula: &str) -> Result<f64, CalcError> {
    Ok(ChemicalFormula::parse(formula)?.molar_mass())
}

/// 화학량론 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct StoichiometryResult {
    pub reactant_molar_mass: f64,
    pub product_molar_mass: f64,
    pub reactant_moles: f64,
    pub product_moles: f64,
    /// 생성물 질량 [g]
    pub product_mass: f64,
}

/// 반응물 질량으로부터 생성물 질량을 구한다.
/// - `mole_ratio`: 생성물 몰 / 반응물 몰 (예: CH4 → CO2 는 1)
pub fn stoichiometric_product_mass(
    reactant_mass_g: f64,
    reactant_formula: &str,
    product_formula: &str,
    mole_ratio: f64,
) -> Result<StoichiometryResult, CalcError> {
    validate::positive("reactant_mass", reactant_mass_g)?;
    validate::positive("mole_ratio", mole_ratio)?;
    let reactant_molar_mass = molecular_weight(reactant_formula)?;
    let product_molar_mass = molecular_weight(product_formula)?;
    validate::positive("reactant_molar_mass", reactant_molar_mass)?;

    let reactant_moles = reactant_mass_g / reactant_molar_mass;
    let product_moles = reactant_moles * mole_ratio;
    Ok(StoichiometryResult {
        reactant_molar_mass,
        product_molar_mass,
        reactant_moles,
        product_moles,
        product_mass: product_moles * product_molar_mass,
    })
}
