//! Amount-to-words conversion
//!
//! Converts whole-rupee amounts into English words using the Indian
//! magnitude names: Crore (10^7), Lakh (10^5), Thousand (10^3) and
//! Hundred (10^2). Numbers 0-19 have irregular names, so they are
//! looked up directly rather than composed from tens + units.

use tracing::instrument;

const BELOW_TWENTY: [&str; 20] = [
    "",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Magnitude units in strictly descending order. The decomposition
/// loop relies on this ordering: each quotient stays below the next
/// larger unit because that unit was already extracted.
const UNITS: [(u64, &str); 4] = [
    (10_000_000, "Crore"),
    (100_000, "Lakh"),
    (1_000, "Thousand"),
    (100, "Hundred"),
];

/// Convert an amount to its English words expression.
///
/// The amount is normalized first: `None`, NaN and infinite values
/// count as zero, and the floor of the absolute value is taken (a
/// receipt amount has no meaningful sign in words; signed display
/// belongs to the digit formatter).
///
/// # Examples
///
/// ```
/// use rasid_words::to_indian_words;
///
/// assert_eq!(to_indian_words(Some(0.0)), "Zero rupees");
/// assert_eq!(to_indian_words(Some(100.0)), "One Hundred rupees");
/// assert_eq!(to_indian_words(Some(100000.0)), "One Lakh rupees");
/// ```
#[instrument(level = "trace")]
pub fn to_indian_words(value: Option<f64>) -> String {
    let amount = normalize(value);
    if amount == 0 {
        return "Zero rupees".to_string();
    }
    capitalize_first(format!("{} rupees", word_groups(amount).join(" ")))
}

fn normalize(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v.is_finite() => v.abs().floor() as u64,
        _ => 0,
    }
}

/// Decompose `n` into ordered magnitude phrases, largest unit first.
fn word_groups(mut n: u64) -> Vec<String> {
    let mut groups = Vec::new();
    for &(size, name) in &UNITS {
        if n >= size {
            let quotient = n / size;
            n %= size;
            let rendered = if size == 100 {
                // Thousand was already extracted, so the quotient is 1-9.
                format!("{} {}", BELOW_TWENTY[quotient as usize], name)
            } else if quotient >= 1_000 {
                // A Crore quotient beyond three digits recurses through the
                // same decomposition, giving compound Indian usage such as
                // "One Lakh Crore".
                format!("{} {}", word_groups(quotient).join(" "), name)
            } else {
                format!("{} {}", three_digits(quotient), name)
            };
            groups.push(rendered);
        }
    }
    if n > 0 {
        groups.push(two_digits(n));
    }
    groups
}

/// Render 0-999. Empty string for 0.
fn three_digits(n: u64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(BELOW_TWENTY[hundreds as usize]);
        out.push_str(" Hundred");
        if rest > 0 {
            out.push(' ');
        }
    }
    if rest > 0 {
        out.push_str(&two_digits(rest));
    }
    out
}

/// Render 0-99. Empty string for 0.
fn two_digits(n: u64) -> String {
    if n < 20 {
        return BELOW_TWENTY[n as usize].to_string();
    }
    let tens = n / 10;
    let rest = n % 10;
    if rest > 0 {
        format!("{} {}", TENS[tens as usize], BELOW_TWENTY[rest as usize])
    } else {
        TENS[tens as usize].to_string()
    }
}

fn capitalize_first(s: String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => s,
    }
}
