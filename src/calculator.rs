//! Savings calculator ("Einsparungsrechner").
//!
//! weekly  = hours saved per week × hourly wage
//! monthly = weekly × 4
//! yearly  = monthly × 12

pub const WEEKS_PER_MONTH: f64 = 4.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Value written back into a field whose committed value was negative.
pub const CLAMPED_FIELD_VALUE: &str = "0";

/// The two calculator fields, read fresh on every input event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SavingsInput {
    pub hours_per_week: f64,
    pub hourly_wage: f64,
}

impl SavingsInput {
    /// Parses the raw field texts. Anything without a numeric prefix reads as 0.
    pub fn from_raw(hours_text: &str, wage_text: &str) -> Self {
        Self {
            hours_per_week: read_number(hours_text),
            hourly_wage: read_number(wage_text),
        }
    }

    pub fn savings(self) -> Savings {
        compute_savings(self.hours_per_week, self.hourly_wage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Savings {
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

/// Negative inputs are used as given; clamping happens on commit only.
pub fn compute_savings(hours_per_week: f64, hourly_wage: f64) -> Savings {
    let weekly = hours_per_week * hourly_wage;
    let monthly = weekly * WEEKS_PER_MONTH;
    let yearly = monthly * MONTHS_PER_YEAR;
    Savings {
        weekly,
        monthly,
        yearly,
    }
}

/// Return on investment in percent. 0 when there is nothing invested.
pub fn roi_percent(investment: f64, savings: f64) -> f64 {
    if investment <= 0.0 {
        return 0.0;
    }
    ((savings - investment) / investment) * 100.0
}

/// Months until the investment is paid back. Infinite without savings.
pub fn payback_period_months(investment: f64, monthly_savings: f64) -> f64 {
    if monthly_savings <= 0.0 {
        return f64::INFINITY;
    }
    investment / monthly_savings
}

/// Replacement text for a committed field value, if it needs clamping.
pub fn clamp_committed(raw: &str) -> Option<&'static str> {
    match parse_lenient(raw) {
        Some(v) if v < 0.0 => {
            tracing::debug!(raw, "clamping negative calculator input");
            Some(CLAMPED_FIELD_VALUE)
        }
        _ => None,
    }
}

/// Numeric field value with the empty/invalid/NaN cases mapped to 0.
pub fn read_number(raw: &str) -> f64 {
    match parse_lenient(raw) {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Parses the longest numeric prefix of `raw`, the way browsers read a
/// number out of free text: leading whitespace is skipped, then an optional
/// sign, digits with an optional fraction, and an optional exponent.
/// `"12abc"` reads as 12; text with no numeric prefix yields `None`.
pub fn parse_lenient(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let b = s.as_bytes();
    let len = b.len();
    let mut i = 0;

    let negative = match b.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    if s[i..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = i;
    while i < len && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < len && b[i] == b'.' {
        let mut j = i + 1;
        while j < len && b[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - (i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if i < len && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < len && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && b[j].is_ascii_digit() {
            j += 1;
        }
        // "1e" without digits keeps just the mantissa.
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_hours_at_twenty_five() {
        let s = SavingsInput::from_raw("10", "25").savings();
        assert_eq!(s.weekly, 250.0);
        assert_eq!(s.monthly, 1000.0);
        assert_eq!(s.yearly, 12000.0);
    }

    #[test]
    fn monthly_and_yearly_follow_the_multipliers() {
        for &(h, w) in &[(1.5, 17.25), (40.0, 0.01), (7.0, 33.3), (0.25, 1e6)] {
            let s = compute_savings(h, w);
            assert_eq!(s.monthly, h * w * 4.0);
            assert_eq!(s.yearly, s.monthly * 12.0);
        }
    }

    #[test]
    fn zero_input_gives_zero_savings() {
        assert_eq!(compute_savings(0.0, 80.0), Savings::default());
        assert_eq!(compute_savings(12.0, 0.0), Savings::default());
        assert_eq!(SavingsInput::from_raw("", "abc").savings(), Savings::default());
    }

    #[test]
    fn negative_input_flows_into_the_computation() {
        let s = compute_savings(-5.0, 10.0);
        assert_eq!(s.monthly, -200.0);
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!(parse_lenient("12abc"), Some(12.0));
        assert_eq!(parse_lenient("  3.5"), Some(3.5));
        assert_eq!(parse_lenient(".5"), Some(0.5));
        assert_eq!(parse_lenient("5."), Some(5.0));
        assert_eq!(parse_lenient("-5"), Some(-5.0));
        assert_eq!(parse_lenient("+2e3x"), Some(2000.0));
        assert_eq!(parse_lenient("1e"), Some(1.0));
        assert_eq!(parse_lenient("1,5"), Some(1.0));
        assert_eq!(parse_lenient("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_lenient("abc"), None);
        assert_eq!(parse_lenient("."), None);
        assert_eq!(parse_lenient("-"), None);
        assert_eq!(parse_lenient(""), None);
    }

    #[test]
    fn read_number_defaults_to_zero() {
        assert_eq!(read_number(""), 0.0);
        assert_eq!(read_number("n/a"), 0.0);
        assert_eq!(read_number("8"), 8.0);
    }

    #[test]
    fn commit_clamps_only_negative_values() {
        assert_eq!(clamp_committed("-5"), Some("0"));
        assert_eq!(clamp_committed("-0.01"), Some("0"));
        assert_eq!(clamp_committed("0"), None);
        assert_eq!(clamp_committed("12"), None);
        assert_eq!(clamp_committed(""), None);
        assert_eq!(clamp_committed("abc"), None);
    }

    #[test]
    fn roi_and_payback() {
        assert_eq!(roi_percent(0.0, 500.0), 0.0);
        assert_eq!(roi_percent(-10.0, 500.0), 0.0);
        assert_eq!(roi_percent(100.0, 150.0), 50.0);
        assert_eq!(roi_percent(200.0, 100.0), -50.0);

        assert_eq!(payback_period_months(1200.0, 100.0), 12.0);
        assert!(payback_period_months(1200.0, 0.0).is_infinite());
        assert!(payback_period_months(1200.0, -3.0).is_infinite());
    }
}
