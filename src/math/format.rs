/// Render `value` in C `%e` style: one leading digit, `precision` fractional
/// digits, and an exponent with explicit sign and at least two digits.
///
/// ```
/// use strided_vector::format_exp;
///
/// assert_eq!(format_exp(1234.5, 6), "1.234500e+03");
/// assert_eq!(format_exp(-2.5e-7, 6), "-2.500000e-07");
/// assert_eq!(format_exp(f64::INFINITY, 6), "inf");
/// ```
pub fn format_exp(value: f64, precision: usize) -> String {
    if value.is_nan() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{}nan", sign);
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}inf", sign);
    }

    // Rust renders `1.5e3` / `1.5e-3`; rewrite the exponent the way printf does.
    let rendered = format!("{:.*e}", precision, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            Err(_) => rendered,
        },
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_exp_matches_printf() {
        assert_eq!(format_exp(0.0, 6), "0.000000e+00");
        assert_eq!(format_exp(1.0, 6), "1.000000e+00");
        assert_eq!(format_exp(-0.5, 6), "-5.000000e-01");
        assert_eq!(format_exp(10.0, 6), "1.000000e+01");
        assert_eq!(format_exp(6.02214076e23, 6), "6.022141e+23");
        assert_eq!(format_exp(1e-300, 6), "1.000000e-300");
        assert_eq!(format_exp(42.0, 2), "4.20e+01");
        assert_eq!(format_exp(3.0, 0), "3e+00");
    }

    #[test]
    fn test_format_exp_non_finite() {
        assert_eq!(format_exp(f64::NAN, 6), "nan");
        assert_eq!(format_exp(f64::INFINITY, 6), "inf");
        assert_eq!(format_exp(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(format_exp(-f64::NAN, 6), "-nan");
    }
}
