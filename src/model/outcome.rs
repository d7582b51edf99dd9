use std::fmt;

/// What a successful `evaluate` produced.
#[derive(PartialEq, Debug, Clone)]
pub enum EvalOutcome {
    Value(f64),
    Assigned { name: String, value: f64 },
}

impl EvalOutcome {
    pub fn value(&self) -> f64 {
        match self {
            EvalOutcome::Value(value) => *value,
            EvalOutcome::Assigned { value, .. } => *value,
        }
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self, EvalOutcome::Assigned { .. })
    }
}

impl fmt::Display for EvalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalOutcome::Value(value) => write!(f, "{}", format_number(*value)),
            EvalOutcome::Assigned { name, value } => write!(f, "{} = {}", name, format_number(*value)),
        }
    }
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// Renders a number the way printf's `%g` does: six significant digits,
/// no trailing zeros, exponent form outside `1e-4 ..= 1e6`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // rounding to the target precision can bump the exponent (999999.7 -> 1e+06)
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let mut parts = scientific.splitn(2, 'e');
    let mantissa = parts.next().unwrap_or("");
    let exponent: i32 = parts.next().and_then(|e| e.parse().ok()).unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
