//! Short salary strings for list displays.

pub const MILLION_UNIT: &str = "million-unit";
pub const THOUSAND_UNIT: &str = "thousand-unit";

/// `8_000_000 → "8.0 million-unit"`, `500_000 → "500 thousand-unit"`.
///
/// Halves round away from zero in both branches.
pub fn format_salary_short(salary: f64) -> String {
    let millions = salary / 1_000_000.0;
    if millions >= 1.0 {
        let tenths = (millions * 10.0).round() / 10.0;
        format!("{tenths:.1} {MILLION_UNIT}")
    } else {
        let thousands = (salary / 1_000.0).round();
        format!("{thousands:.0} {THOUSAND_UNIT}")
    }
}
