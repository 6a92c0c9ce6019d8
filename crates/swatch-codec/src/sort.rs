//! Natural ordering of color codes.
//!
//! Codes look like `A01`, `spec3` or `com12`: a run of ASCII letters followed
//! by digits. Codes are ordered by letter prefix, then by the digits as a
//! number, so `A2` sorts before `A10`. Only the part before the first `:` is
//! considered, which lets display strings such as `A01: '#fff', // ...` sort
//! by their code. Strings that do not start with a code fall back to a
//! case-insensitive comparison of the whole string.
//!
//! All sorts are stable.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)([0-9]+)").unwrap());

fn code_parts(s: &str) -> Option<(&str, &str)> {
    let segment = s.split(':').next().unwrap_or(s);
    let caps = CODE_RE.captures(segment)?;
    let prefix = caps.get(1)?.as_str();
    let digits = caps.get(2)?.as_str();
    Some((prefix, digits))
}

/// Case-insensitive first, lowercase before uppercase on ties.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    // Uppercase letters have lower code points, so reversing the raw
    // comparison puts `a` before `A`.
    folded.then_with(|| b.cmp(a))
}

/// Compare digit strings by numeric value without overflowing.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural comparison of two codes.
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    match (code_parts(a), code_parts(b)) {
        (Some((prefix_a, num_a)), Some((prefix_b, num_b))) => {
            if prefix_a != prefix_b {
                locale_compare(prefix_a, prefix_b)
            } else {
                compare_digits(num_a, num_b)
            }
        }
        _ => locale_compare(a, b),
    }
}

/// Sort strings (or anything that derefs to one) naturally, in place.
pub fn sort_natural_codes<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| compare_codes(a.as_ref(), b.as_ref()));
}

/// Sort items by a code borrowed from each item.
pub fn sort_natural_codes_by<T, F>(items: &mut [T], mut code: F)
where
    F: FnMut(&T) -> &str,
{
    items.sort_by(|a, b| compare_codes(code(a), code(b)));
}

/// Sort items by a code computed once per item.
pub fn sort_natural_codes_by_key<T, F>(items: &mut [T], mut code: F)
where
    F: FnMut(&T) -> String,
{
    items.sort_by_cached_key(|item| NaturalKey(code(item)));
}

struct NaturalKey(String);

impl PartialEq for NaturalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NaturalKey {}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_codes(&self.0, &other.0)
    }
}
