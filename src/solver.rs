//! 미지수 하나 풀이(solve-for-unknown) 공통 로직.
//!
//! 관계식에 참여하는 물리량을 `(변수 태그, Option<f64>)` 목록으로 받아
//! 알려진 값의 개수가 식의 arity 와 정확히 같은지 검사하고, 선언 순서상
//! 처음으로 비어 있는 변수를 미지수로 돌려준다.

use crate::error::CalcError;

/// 알려진 값의 개수를 센다. `Some(0.0)` 도 알려진 값이다.
pub fn known_count(values: &[Option<f64>]) -> usize {
    values.iter().filter(|v| v.is_some()).count()
}

/// 미지수를 찾는다.
///
/// - 알려진 값의 개수가 `arity` 와 다르면 [`CalcError::Determinacy`]
/// - 그렇지 않으면 선언 순서상 첫 번째 `None` 슬롯의 태그
pub fn locate_unknown<T: Copy, const N: usize>(
    law: &'static str,
    arity: usize,
    slots: [(T, Option<f64>); N],
) -> Result<T, CalcError> {
    let values = slots.map(|(_, v)| v);
    let actual = known_count(&values);
    if actual != arity {
        return Err(CalcError::Determinacy {
            law,
            expected: arity,
            actual,
        });
    }
    slots
        .iter()
        .find(|(_, v)| v.is_none())
        .map(|(tag, _)| *tag)
        .ok_or(CalcError::Determinacy {
            law,
            expected: arity,
            actual,
        })
}
