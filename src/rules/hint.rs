//! Hint generation.
//!
//! A hint discloses one property of the secret number without giving
//! it away: parity, which half of the range it sits in, or the sum of
//! its digits. The session picks the category uniformly at random and
//! renders it here.

use serde::{Deserialize, Serialize};

/// The three hint categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    /// Even or odd.
    Parity,
    /// Lower or upper half of the range, threshold `range / 2`.
    HalfRange,
    /// Sum of the secret's decimal digits.
    DigitSum,
}

impl HintKind {
    /// All categories, for uniform selection.
    pub const ALL: [HintKind; 3] = [HintKind::Parity, HintKind::HalfRange, HintKind::DigitSum];
}

/// Render the hint text for one category.
#[must_use]
pub fn hint_text(kind: HintKind, secret_number: u32, range: u32) -> String {
    match kind {
        HintKind::Parity => {
            let parity = if secret_number % 2 == 0 { "even" } else { "odd" };
            format!("Hint: the number is {parity}")
        }
        HintKind::HalfRange => {
            let threshold = range / 2;
            let half = if secret_number <= threshold {
                "lower"
            } else {
                "upper"
            };
            format!("Hint: the number is in the {half} half of 1-{range}")
        }
        HintKind::DigitSum => {
            format!(
                "Hint: the number's digits sum to {}",
                digit_sum(secret_number)
            )
        }
    }
}

/// Sum of the decimal digits of `n`.
#[must_use]
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
