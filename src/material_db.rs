/// 열 계산 예제와 GUI 재질 선택에 쓰는 상온 물성치 테이블.
/// 값은 교과서 참고치이며 온도 의존성은 고려하지 않는다.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    /// kg/m³
    pub density_kg_m3: f64,
    /// J/(kg·K)
    pub specific_heat_j_kg_k: f64,
    /// 선팽창 계수 1/K. 기체/액체는 None.
    pub linear_expansion_per_k: Option<f64>,
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

/// 코드 또는 이름으로 재질을 찾는다. 대소문자는 구분하지 않는다.
pub fn find_material(code: &str) -> Option<&'static MaterialData> {
    let key = code.trim();
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(key) || m.name.eq_ignore_ascii_case(key))
}

const fn mat(
    code: &'static str,
    name: &'static str,
    density_kg_m3: f64,
    specific_heat_j_kg_k: f64,
    linear_expansion_per_k: Option<f64>,
) -> MaterialData {
    MaterialData {
        code,
        name,
        density_kg_m3,
        specific_heat_j_kg_k,
        linear_expansion_per_k,
    }
}

const MATERIALS: &[MaterialData] = &[
    mat("water", "Water", 1000.0, 4186.0, None),
    mat("air", "Air", 1.225, 1005.0, None),
    mat("al", "Aluminum", 2700.0, 897.0, Some(23.1e-6)),
    mat("fe", "Iron", 7874.0, 449.0, Some(11.8e-6)),
    mat("cu", "Copper", 8960.0, 385.0, Some(16.5e-6)),
    mat("au", "Gold", 19_300.0, 129.0, Some(14.2e-6)),
    mat("pb", "Lead", 11_340.0, 129.0, Some(28.9e-6)),
    mat("ice", "Ice", 917.0, 2090.0, Some(51.0e-6)),
];
