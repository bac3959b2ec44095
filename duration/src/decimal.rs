use core::fmt::Write;

/// Render `value` with at most `decimals` digits after the point. Trailing
/// zeros are removed, and so is the point when no digits remain after it.
pub(crate) fn trimmed(value: f64, decimals: u32) -> String {
    let mut s = fixed(value, decimals);
    if s.contains('.') {
        let len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(len);
    }
    s
}

/// Render `value` with exactly `decimals` digits after the point. Exact
/// midpoints round away from zero.
pub(crate) fn fixed(value: f64, decimals: u32) -> String {
    match midpoint(value, decimals) {
        Some(scaled) => {
            let mut s = String::new();
            if value.is_sign_negative() {
                s.push('-');
            }
            let digits = format!("{:0>width$}", scaled, width = decimals as usize + 1);
            let (int, frac) = digits.split_at(digits.len() - decimals as usize);
            s.push_str(int);
            if decimals > 0 {
                let _ = write!(s, ".{frac}");
            }
            s
        }
        None => format!("{:.*}", decimals as usize, value),
    }
}

// If |value| * 10^decimals is exactly halfway between two integers, returns
// the larger of the two. Finite values are m * 2^e exactly, so the check is
// done in integer arithmetic.
fn midpoint(value: f64, decimals: u32) -> Option<u128> {
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1 << 52) - 1);

    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };

    // integers, zero, and non-finite values have no midpoint
    if exponent >= 0 || mantissa == 0 {
        return None;
    }

    let shift = (-exponent) as u32;
    if shift >= 128 {
        return None;
    }

    // doubled, so a midpoint becomes an odd integer
    let doubled = (mantissa as u128 * 2).checked_mul(10u128.checked_pow(decimals)?)?;
    if doubled & ((1u128 << shift) - 1) != 0 {
        return None;
    }

    let doubled = doubled >> shift;
    if doubled & 1 == 1 {
        Some((doubled + 1) / 2)
    } else {
        None
    }
}
