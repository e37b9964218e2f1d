use serde::{Deserialize, Serialize};

/// Largest opening float the register accepts, in dollars
pub const MAX_OPENING_AMOUNT: f64 = 1_000_000.0;

/// Current state of the register shift as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShiftStatus {
    /// Whether a shift is currently active on this register
    pub is_open: bool,
    /// Cash counted into the drawer when the active shift was opened
    pub opening_amount: Option<f64>,
    /// When the active shift was opened (RFC 3339)
    pub opened_at: Option<String>,
}

/// Request body for `POST /api/shift/open`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenShiftRequest {
    pub opening_amount: f64,
}

/// Response from `POST /api/shift/open`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenShiftResponse {
    pub success_message: String,
    pub shift: ShiftStatus,
}

/// Reasons an opening amount entered by the cashier is rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OpeningAmountError {
    #[error("Please enter an opening amount")]
    Empty,
    #[error("'{0}' is not a valid amount")]
    InvalidFormat(String),
    #[error("Opening amount must be a finite number")]
    NotFinite,
    #[error("Opening amount cannot be negative")]
    Negative,
    #[error("Opening amount can have at most two decimal places")]
    TooManyDecimals,
    #[error("Opening amount cannot exceed {0:.2}")]
    TooLarge(f64),
}

/// Parse the raw text of the opening amount input.
///
/// Zero is a valid float; only negative, malformed, or absurdly large
/// values are rejected.
pub fn parse_opening_amount(input: &str) -> Result<f64, OpeningAmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(OpeningAmountError::Empty);
    }

    // Exponent notation would hide extra decimal places, e.g. "1e-5"
    if trimmed.contains(['e', 'E']) {
        return Err(OpeningAmountError::InvalidFormat(trimmed.to_string()));
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| OpeningAmountError::InvalidFormat(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(OpeningAmountError::NotFinite);
    }
    if value < 0.0 {
        return Err(OpeningAmountError::Negative);
    }
    if value > MAX_OPENING_AMOUNT {
        return Err(OpeningAmountError::TooLarge(MAX_OPENING_AMOUNT));
    }

    if let Some((_, fraction)) = trimmed.split_once('.') {
        let decimals = fraction.chars().take_while(|c| c.is_ascii_digit()).count();
        if decimals > 2 {
            return Err(OpeningAmountError::TooManyDecimals);
        }
    }

    // "-0" parses to negative zero
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// Format a dollar amount for display, e.g. `$1,250.50`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
