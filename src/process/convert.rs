use tracing::error;

const ABSOLUTE_ZERO_C: f64 = 273.15;

/// `F = (K - 273.15) * 9/5 + 32`
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - ABSOLUTE_ZERO_C) * 9.0 / 5.0 + 32.0
}

/// Above 2^52 every `f64` is a whole number.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Round half away from zero to `digits` decimal places.
///
/// When `digits` exceeds the precision `value` can carry, `value` is
/// returned unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let Ok(exponent) = i32::try_from(digits) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    scaled.round() / factor
}

/// Parse a raw Kelvin field and convert it to Fahrenheit.
///
/// Returns `None` (after logging the raw value at error level) when the field
/// is not a number. Any number is accepted, including values below absolute
/// zero.
pub fn convert_temperature(raw: &str, rounding_digits: Option<u32>) -> Option<f64> {
    let kelvin: f64 = match raw.trim().parse() {
        Ok(k) => k,
        Err(_) => {
            error!("Invalid input {:?} which is not a float.", raw);
            return None;
        }
    };

    let fahrenheit = kelvin_to_fahrenheit(kelvin);
    Some(match rounding_digits {
        Some(digits) => round_to(fahrenheit, digits),
        None => fahrenheit,
    })
}

/// Render a converted value for the output file.
pub fn format_fahrenheit(value: f64) -> String {
    value.to_string()
}
