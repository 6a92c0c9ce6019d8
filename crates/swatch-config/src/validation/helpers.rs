//! Shared validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if value.is_nan() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

pub(crate) fn validate_one_of(errors: &mut Vec<String>, name: &str, value: &str, allowed: &[&str]) {
    if !allowed.contains(&value) {
        errors.push(format!(
            "{name} = {value:?} must be one of: {}",
            allowed.join(", ")
        ));
    }
}
