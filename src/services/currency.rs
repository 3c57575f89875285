//! Importes en texto libre
//!
//! Los costes llegan como cadenas escritas a mano (`"19k"`, `"1.2L"`, `"₹4,500"`).
//! Aquí se normalizan a `Decimal` y se formatean en notación india.

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::OnceLock;

const THOUSAND: i64 = 1_000;
const LAKH: i64 = 100_000;

fn numeric_prefix() -> &'static Regex {
    static NUMERIC_PREFIX: OnceLock<Regex> = OnceLock::new();
    NUMERIC_PREFIX.get_or_init(|| Regex::new(r"^(\d+(\.\d+)?|\.\d+)").expect("static regex"))
}

/// Convertir un importe en texto libre a `Decimal`.
///
/// Se conservan solo dígitos y puntos y se toma el prefijo numérico más largo.
/// Una `k` en el texto original multiplica por mil y una `l` por un lakh
/// (100.000); si aparecen ambas se aplican las dos. Sin número el resultado es 0.
/// Un importe fuera del rango de `Decimal` se satura en `Decimal::MAX`.
pub fn parse_money(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut amount = numeric_prefix()
        .find(&cleaned)
        .map(|m| {
            let number = m.as_str();
            let parsed = if number.starts_with('.') {
                Decimal::from_str(&format!("0{}", number))
            } else {
                Decimal::from_str(number)
            };
            // el prefijo ya es numérico: solo falla por desbordamiento
            parsed.unwrap_or(Decimal::MAX)
        })
        .unwrap_or(Decimal::ZERO);

    let lowered = raw.to_lowercase();
    if lowered.contains('k') {
        amount = amount.saturating_mul(Decimal::from(THOUSAND));
    }
    if lowered.contains('l') {
        amount = amount.saturating_mul(Decimal::from(LAKH));
    }
    amount
}

/// Igual que [`parse_money`] pero tolerando columnas nulas
pub fn parse_optional_money(raw: Option<&str>) -> Decimal {
    raw.map(parse_money).unwrap_or(Decimal::ZERO)
}

/// Formatear un importe en rupias: `₹1.50L`, `₹19.0K` o `₹450`
pub fn format_inr(amount: Decimal) -> String {
    let abs = amount.abs();
    if abs >= Decimal::from(LAKH) {
        let lakhs = (amount / Decimal::from(LAKH))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("₹{:.2}L", lakhs)
    } else if abs >= Decimal::from(THOUSAND) {
        let thousands = (amount / Decimal::from(THOUSAND))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("₹{:.1}K", thousands)
    } else {
        let rounded = amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        format!("₹{}", rounded)
    }
}
