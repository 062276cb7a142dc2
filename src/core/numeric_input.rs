//! Parser für numerische Freitext-Eingaben aus den Eigenschaftsfeldern.
//!
//! Ungültige Eingaben ergeben `None` ("nicht gesetzt"), niemals NaN.

/// Parst eine nicht-negative Zahl. Komma wird als Dezimaltrenner akzeptiert.
///
/// Leer, nicht-numerisch, nicht-endlich oder negativ → `None`.
pub fn parse_non_negative(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.replace(',', ".").parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Parst eine Stückzahl (Türen). Akzeptiert nur ganze, nicht-negative Zahlen.
pub fn parse_quantity(input: &str) -> Option<u32> {
    let value = parse_non_negative(input)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}
