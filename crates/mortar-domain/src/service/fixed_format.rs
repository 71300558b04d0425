//! Fixed-point text formatting for calculated quantities

/// Format `value` with exactly `digits` fractional digits
///
/// Non-finite values are written as `NaN`, `Infinity` or `-Infinity`.
/// Negative zero prints as zero. A value lying exactly halfway between two
/// candidates rounds away from zero (`0.125` -> `"0.13"`).
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let value = if value == 0.0 { 0.0 } else { value };

    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;

    // Exact tie: the product is exact (zero fma residual) and ends in .5
    if scaled.fract().abs() == 0.5 && value.mul_add(scale, -scaled) == 0.0 {
        let rounded = scaled.abs().ceil().copysign(value) / scale;
        return format!("{:.*}", digits, rounded);
    }

    format!("{:.*}", digits, value)
}
