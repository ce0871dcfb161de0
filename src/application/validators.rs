use rust_decimal::Decimal;
use validator::ValidateEmail;

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Parses a submitted amount as a non-negative decimal.
/// Returns None for malformed or negative input.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let amount: Decimal = raw.trim().parse().ok()?;
    if amount.is_sign_negative() {
        return None;
    }
    Some(amount)
}
