//! Locale-aware fixed-decimal number formatting.
//!
//! Values below 2^53 are scaled and rounded into an integer and the digits
//! are laid out by hand, so the common path never runs Rust's float-to-decimal
//! code. Past 2^53 every `f64` is a whole number and the scaled integer would
//! only carry noise, so those take the shortest round-trip digits (`{:e}`) and
//! pad with zeros, which is what browsers print for the same value.

use crate::error::{Result, SiteError};

/// Formatting seam between the calculator and the display locale.
pub trait NumberFormat {
    fn format_fixed(&self, value: f64, decimals: usize) -> String;

    /// Two fractional digits, grouped. Used for the savings outputs.
    fn format_currency(&self, value: f64) -> String {
        self.format_fixed(value, 2)
    }
}

/// Grouping and decimal marks for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub grouping: char,
    pub decimal: char,
}

impl NumberLocale {
    pub const DE: Self = Self {
        grouping: '.',
        decimal: ',',
    };

    pub const DE_CH: Self = Self {
        grouping: '\u{2019}',
        decimal: '.',
    };

    pub const EN: Self = Self {
        grouping: ',',
        decimal: '.',
    };

    // Narrow no-break space, as browsers render fr-FR.
    pub const FR: Self = Self {
        grouping: '\u{202F}',
        decimal: ',',
    };

    pub fn supported_tags() -> &'static [&'static str] {
        &["de", "de-DE", "de-CH", "en", "en-US", "en-GB", "fr", "fr-FR"]
    }

    pub fn from_tag(tag: &str) -> Result<Self> {
        let norm = tag.trim().replace('_', "-").to_ascii_lowercase();
        match norm.as_str() {
            "de" | "de-de" => Ok(Self::DE),
            "de-ch" => Ok(Self::DE_CH),
            "en" | "en-us" | "en-gb" => Ok(Self::EN),
            "fr" | "fr-fr" => Ok(Self::FR),
            _ => Err(SiteError::UnsupportedLocale(tag.to_string())),
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::DE
    }
}

impl NumberFormat for NumberLocale {
    fn format_fixed(&self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return non_finite(value);
        }

        // Clamp decimals to something reasonable to avoid huge powers.
        let decimals = decimals.min(9);
        if value.abs() >= EXACT_INTEGER_LIMIT {
            return self.format_whole(value, decimals);
        }

        let scale_i = 10_u128.pow(decimals as u32);
        let scale_f = scale_i as f64;

        // |value| < 2^53 and decimals <= 9 keep this well inside i128.
        let scaled_i = (value * scale_f).round() as i128;
        let abs_i = scaled_i.unsigned_abs();
        let int_part = abs_i / scale_i;
        let frac_part = abs_i % scale_i;

        let mut out = String::new();
        if scaled_i < 0 {
            out.push('-');
        }
        push_grouped(&mut out, &int_part.to_string(), self.grouping);

        if decimals > 0 {
            out.push(self.decimal);
            let frac_str = frac_part.to_string();
            for _ in 0..decimals.saturating_sub(frac_str.len()) {
                out.push('0');
            }
            out.push_str(&frac_str);
        }

        out
    }
}

/// 2^53: from here on every `f64` is an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

impl NumberLocale {
    fn format_whole(&self, value: f64, decimals: usize) -> String {
        let sci = format!("{:e}", value.abs());
        let Some((mantissa, exp)) = sci.split_once('e') else {
            return sci;
        };
        let Ok(exp) = exp.parse::<usize>() else {
            return sci;
        };

        // An integral value never needs more digits than its magnitude.
        let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        while digits.len() < exp + 1 {
            digits.push('0');
        }

        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        push_grouped(&mut out, &digits, self.grouping);
        if decimals > 0 {
            out.push(self.decimal);
            for _ in 0..decimals {
                out.push('0');
            }
        }
        out
    }
}

fn non_finite(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_sign_positive() {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

fn push_grouped(out: &mut String, digits: &str, sep: char) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
}
