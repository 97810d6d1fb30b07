//! 계산기 화면용 숫자/표 형식화와 숫자 입력 해석.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 결과 표시 옵션. config.toml 의 `[display]` 테이블과 같다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// 고정 소수점 자릿수. 과학적 표기에서는 유효숫자가 이 값과 같다.
    pub decimal_places: usize,
    /// 절댓값이 이보다 작으면 과학적 표기
    pub sci_lower: f64,
    /// 절댓값이 이 이상이면 과학적 표기
    pub sci_upper: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            decimal_places: 4,
            sci_lower: 1e-4,
            sci_upper: 1e6,
        }
    }
}

/// 숫자 입력 해석 실패
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("숫자를 해석할 수 없습니다: {0}")]
pub struct InvalidNumber(pub String);

/// 숫자를 화면 표시용 문자열로 바꾼다.
///
/// [sci_lower, sci_upper) 범위 밖이면 `1.235e-5` 꼴, 안이면 고정 소수점에서
/// 뒤쪽 0과 소수점을 지운다. 0은 항상 `0` 이다.
pub fn format_number(value: f64, opts: &DisplayOptions) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude < opts.sci_lower || magnitude >= opts.sci_upper {
        let digits = opts.decimal_places.saturating_sub(1);
        format!("{value:.digits$e}")
    } else {
        let fixed = format!("{value:.prec$}", prec = opts.decimal_places);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        // 반올림으로 -0 이 되는 경우
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// `라벨: 값 단위` 한 줄
pub fn format_result(label: &str, value: f64, unit: &str, opts: &DisplayOptions) -> String {
    let number = format_number(value, opts);
    if unit.is_empty() {
        format!("{label}: {number}")
    } else {
        format!("{label}: {number} {unit}")
    }
}

/// 사용자 입력을 숫자로 바꾼다. `1.23e-4`, `1.23E-4`, `1.23*10^-4` 를 받는다.
pub fn parse_number(input: &str) -> Result<f64, InvalidNumber> {
    let normalized = input.trim().replace("*10^", "e").replace('E', "e");
    normalized
        .parse::<f64>()
        .map_err(|_| InvalidNumber(input.trim().to_string()))
}

/// 최대 글자 수를 넘으면 `...` 으로 줄인다.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut out: String = text.chars().take(max_chars - 3).collect();
    out.push_str("...");
    out
}

/// 좁은 화면용 텍스트 표. 전체 폭이 `max_width` 를 넘으면 열 폭을 비율대로 줄인다.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], max_width: usize) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    if total > max_width && total > 0 {
        let factor = max_width as f64 / total as f64;
        for w in &mut widths {
            *w = ((*w as f64 * factor) as usize).max(1);
        }
    }

    let line = |cells: &mut dyn Iterator<Item = &str>| -> String {
        cells
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", truncate_text(cell, w)))
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    };

    let header_line = line(&mut headers.iter().copied());
    let mut out = String::new();
    out.push_str(&header_line);
    out.push('\n');
    out.push_str(&"-".repeat(header_line.chars().count()));
    out.push('\n');
    for row in rows {
        out.push_str(&line(&mut row.iter().map(String::as_str)));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_notation_trims_zeros() {
        let o = DisplayOptions::default();
        assert_eq!(format_number(0.999, &o), "0.999");
        assert_eq!(format_number(12.5, &o), "12.5");
        assert_eq!(format_number(24.0, &o), "24");
        assert_eq!(format_number(-3.14159, &o), "-3.1416");
        assert_eq!(format_number(0.0, &o), "0");
    }

    #[test]
    fn scientific_outside_thresholds() {
        let o = DisplayOptions::default();
        assert_eq!(format_number(1.2345e-5, &o), "1.234e-5");
        assert_eq!(format_number(6.022e23, &o), "6.022e23");
        assert_eq!(format_number(1e6, &o), "1.000e6");
        assert_eq!(format_number(999_999.0, &o), "999999");
        assert_eq!(format_number(1e-4, &o), "0.0001");
    }

    #[test]
    fn result_line() {
        let o = DisplayOptions::default();
        assert_eq!(format_result("Current", 3.0, "A", &o), "Current: 3 A");
        assert_eq!(format_result("pH", 7.0, "", &o), "pH: 7");
    }

    #[test]
    fn calculator_style_exponents() {
        assert_eq!(parse_number("1.23*10^-4"), Ok(1.23e-4));
        assert_eq!(parse_number(" 1.23E-4 "), Ok(1.23e-4));
        assert_eq!(parse_number("42"), Ok(42.0));
        assert!(parse_number("abc").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn table_respects_width() {
        let rows = vec![
            vec!["H".to_string(), "1.008".to_string()],
            vec!["He".to_string(), "4.003".to_string()],
        ];
        let table = render_table(&["Symbol", "Mass"], &rows, 30);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Symbol Mass");
        assert_eq!(lines[1], "-----------");
        assert_eq!(lines[2], "H      1.008");

        let narrow = render_table(&["Name", "Value"], &[vec!["speed_of_light".into(), "2.998e8".into()]], 12);
        assert!(narrow.lines().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_text("speed_of_light", 8), "speed...");
        assert_eq!(truncate_text("pi", 8), "pi");
    }
}
