//! 용액 계산: pH/pOH, 희석(C1V1 = C2V2), 완충 용액, 흡광도.

use crate::error::CalcError;
use crate::solver;
use crate::validate;

const PH_MIN: f64 = 0.0;
const PH_MAX: f64 = 14.0;

/// pH = −log10[H⁺]
pub fn calculate_ph(h_concentration: f64) -> Result<f64, CalcError> {
    validate::positive("h_concentration", h_concentration)?;
    Ok(-h_concentration.log10())
}

/// [H⁺] = 10^(−pH). pH 는 0~14.
pub fn ph_to_concentration(ph: f64) -> Result<f64, CalcError> {
    validate::in_range("ph", ph, PH_MIN, PH_MAX)?;
    Ok(10f64.powf(-ph))
}

/// pOH = 14 − pH (25 °C 기준)
pub fn poh_from_ph(ph: f64) -> Result<f64, CalcError> {
    validate::in_range("ph", ph, PH_MIN, PH_MAX)?;
    Ok(PH_MAX - ph)
}

/// 희석 후 미지수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DilutionVariable {
    FinalConcentration,
    FinalVolume,
}

/// 희석 입력. 초기 농도/부피는 필수이고 최종 값 중 하나만 주어야 한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DilutionInput {
    pub initial_concentration: f64,
    pub initial_volume: f64,
    pub final_concentration: Option<f64>,
    pub final_volume: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DilutionResult {
    pub initial_concentration: f64,
    pub initial_volume: f64,
    pub final_concentration: f64,
    pub final_volume: f64,
    pub solved_for: DilutionVariable,
}

/// C1V1 = C2V2 에서 C2 또는 V2 를 구한다. 농도·부피 단위는 양변이 같기만 하면 된다.
pub fn dilution(input: DilutionInput) -> Result<DilutionResult, CalcError> {
    let c1 = validate::positive("initial_concentration", input.initial_concentration)?;
    let v1 = validate::positive("initial_volume", input.initial_volume)?;
    let unknown = solver::locate_unknown(
        "dilution",
        1,
        [
            (DilutionVariable::FinalConcentration, input.final_concentration),
            (DilutionVariable::FinalVolume, input.final_volume),
        ],
    )?;
    let amount = c1 * v1;
    let (c2, v2) = match unknown {
        DilutionVariable::FinalConcentration => {
            let v2 = validate::positive("final_volume", input.final_volume.unwrap_or_default())?;
            (validate::finite_result("final_concentration", amount / v2)?, v2)
        }
        DilutionVariable::FinalVolume => {
            let c2 = validate::positive(
                "final_concentration",
                input.final_concentration.unwrap_or_default(),
            )?;
            (c2, validate::finite_result("final_volume", amount / c2)?)
        }
    };
    Ok(DilutionResult {
        initial_concentration: c1,
        initial_volume: v1,
        final_concentration: c2,
        final_volume: v2,
        solved_for: unknown,
    })
}

/// Henderson-Hasselbalch: pH = pKa + log10([A⁻]/[HA])
pub fn henderson_hasselbalch(pka: f64, base_concentration: f64, acid_concentration: f64) -> Result<f64, CalcError> {
    validate::finite("pka", pka)?;
    validate::positive("base_concentration", base_concentration)?;
    validate::positive("acid_concentration", acid_concentration)?;
    validate::finite_result("ph", pka + (base_concentration / acid_concentration).log10())
}

/// Beer-Lambert: A = ε·l·c
pub fn beer_lambert(molar_absorptivity: f64, path_length: f64, concentration: f64) -> Result<f64, CalcError> {
    validate::non_negative("molar_absorptivity", molar_absorptivity)?;
    validate::positive("path_length", path_length)?;
    validate::non_negative("concentration", concentration)?;
    validate::finite_result("absorbance", molar_absorptivity * path_length * concentration)
}
