//! Display formatting for counted values. Formatting never feeds back into animation math.

use crate::data::contract::KpiFormat;

/// Group an integer with `,` thousands separators.
pub fn group_thousands(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_digits(value.unsigned_abs()))
}

fn group_digits(magnitude: u64) -> String {
    let digits = magnitude.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an already-rounded KPI value for display.
///
/// Magnitudes beyond `i64` saturate instead of wrapping.
pub fn format_kpi(value: f64, format: KpiFormat) -> String {
    let whole = value.round() as i64;
    match format {
        KpiFormat::Integer => group_thousands(whole),
        KpiFormat::Percent => format!("{}%", group_thousands(whole)),
        KpiFormat::Currency => {
            let sign = if whole < 0 { "-" } else { "" };
            format!("{sign}${}", group_digits(whole.unsigned_abs()))
        }
    }
}

/// Signed percent with one decimal, e.g. `0.124 → "+12.4%"`.
pub fn format_signed_percent(ratio: f64) -> String {
    // `+ 0.0` folds a negative zero into positive zero.
    let pct = (ratio * 1000.0).round() / 10.0 + 0.0;
    format!("{pct:+.1}%")
}

/// Short currency for map labels: `$950`, `$310K`, `$2.1M`, `$1.4B`.
pub fn format_compact_currency(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let (scaled, suffix) = if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        return format!("{sign}${}", abs.round() as i64);
    };

    if scaled >= 100.0 || (scaled * 10.0).round() % 10.0 == 0.0 {
        format!("{sign}${}{suffix}", scaled.round() as i64)
    } else {
        format!("{sign}${scaled:.1}{suffix}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/format.rs"]
mod tests;
