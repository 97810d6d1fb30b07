/// 단위 변환 메뉴에서 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    Length,
    Mass,
    Energy,
    Pressure,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 5] = [
        QuantityKind::Temperature,
        QuantityKind::Length,
        QuantityKind::Mass,
        QuantityKind::Energy,
        QuantityKind::Pressure,
    ];

    /// 메뉴/입력 안내에 쓰는 대표 단위 기호.
    pub fn unit_symbols(self) -> &'static [&'static str] {
        match self {
            QuantityKind::Temperature => &["C", "K", "F"],
            QuantityKind::Length => &["m", "cm", "mm", "km", "in", "ft"],
            QuantityKind::Mass => &["kg", "g", "lb"],
            QuantityKind::Energy => &["J", "kJ", "cal", "kcal", "kWh", "eV", "BTU"],
            QuantityKind::Pressure => &["Pa", "kPa", "atm", "torr", "mmHg", "psi"],
        }
    }
}
