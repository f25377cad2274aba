use rust_decimal::Decimal;

/// Korean won amount handling.
///
/// Tax amounts are stored as `Decimal` and rendered in won, which has no
/// fractional unit: amounts are validated to whole-won precision and
/// formatted with thousands separators and the ₩ prefix.
pub struct Krw;

impl Krw {
    /// Decimal scale for won (no decimal places)
    pub const SCALE: u32 = 0;

    /// Rounds an amount to whole won
    pub fn round(amount: Decimal) -> Decimal {
        amount.round_dp(Self::SCALE)
    }

    /// Validates a tax amount: positive, whole won
    pub fn validate_amount(amount: Decimal) -> Result<(), String> {
        if amount <= Decimal::ZERO {
            return Err("Amount must be greater than zero".to_string());
        }

        if amount.scale() > Self::SCALE && amount != Self::round(amount) {
            return Err("Won amounts cannot have decimal places".to_string());
        }

        Ok(())
    }

    /// Formats an amount for display, e.g. `₩1,650,000`
    pub fn format(amount: Decimal) -> String {
        let rounded = Self::round(amount);
        let negative = rounded.is_sign_negative();
        let digits = rounded.abs().round_dp(0).to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if negative {
            format!("-₩{}", grouped)
        } else {
            format!("₩{}", grouped)
        }
    }
}
