//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in bolivianos.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units.
    pub amount: Decimal,
}

impl Money {
    /// Symbol printed in front of amounts.
    pub const SYMBOL: &'static str = "Bs";

    /// Creates an amount in bolivianos.
    #[must_use]
    pub const fn bob(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Formats the amount as `Bs 12,500.00`, rounded with banker's rounding.
    #[must_use]
    pub fn format(&self, decimal_places: u32) -> String {
        format!("{} {}", Self::SYMBOL, format_grouped(self.amount, decimal_places))
    }
}

/// Formats a decimal with `,` thousands separators and a fixed number of
/// decimal places.
///
/// Rounds half to even, the same strategy used for currency conversion.
#[must_use]
pub fn format_grouped(value: Decimal, decimal_places: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (digits, String::new()),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if decimal_places > 0 {
        let width = decimal_places as usize;
        out.push('.');
        out.push_str(&format!("{frac_part:0<width$}"));
    }
    out
}
