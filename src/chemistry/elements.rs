/// 분자량 계산에 쓰는 원소 테이블. 원자량은 g/mol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub symbol: &'static str,
    pub atomic_number: u8,
    pub atomic_mass: f64,
}

const fn el(symbol: &'static str, atomic_number: u8, atomic_mass: f64) -> Element {
    Element {
        symbol,
        atomic_number,
        atomic_mass,
    }
}

const ELEMENTS: &[Element] = &[
    el("H", 1, 1.008),
    el("He", 2, 4.003),
    el("Li", 3, 6.941),
    el("Be", 4, 9.012),
    el("B", 5, 10.811),
    el("C", 6, 12.011),
    el("N", 7, 14.007),
    el("O", 8, 15.999),
    el("F", 9, 18.998),
    el("Ne", 10, 20.180),
    el("Na", 11, 22.990),
    el("Mg", 12, 24.305),
    el("Al", 13, 26.982),
    el("Si", 14, 28.086),
    el("P", 15, 30.974),
    el("S", 16, 32.066),
    el("Cl", 17, 35.453),
    el("Ar", 18, 39.948),
    el("K", 19, 39.098),
    el("Ca", 20, 40.078),
    el("Fe", 26, 55.845),
    el("Cu", 29, 63.546),
    el("Zn", 30, 65.38),
    el("Br", 35, 79.904),
    el("I", 53, 126.904),
];

pub fn elements() -> &'static [Element] {
    ELEMENTS
}

/// 기호로 원소를 찾는다. 대소문자를 구분한다 ("Co" ≠ "CO").
pub fn find_element(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        for (i, a) in ELEMENTS.iter().enumerate() {
            for b in &ELEMENTS[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(find_element("Cl").map(|e| e.atomic_number), Some(17));
        assert!(find_element("cl").is_none());
    }
}
