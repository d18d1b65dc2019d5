//! French locale rendering for chart labels.
//!
//! Currency amounts are truncated to whole euros, grouped in thousands with
//! spaces, and suffixed with the euro sign ("3 640 €"). Axis decimals use
//! the comma separator with trailing zeros trimmed ("1,5", "2").

/// Format an amount as whole euros, French style.
///
/// Truncates toward zero (like `int()`), groups thousands with spaces, and
/// appends " €". Negative amounts keep their sign: `-4 388 €`.
///
/// # Example
///
/// ```
/// use exo_eval::format::eur;
///
/// assert_eq!(eur(3640.0), "3 640 €");
/// assert_eq!(eur(10_000.0), "10 000 €");
/// assert_eq!(eur(-4388.74), "-4 388 €");
/// ```
#[must_use]
pub fn eur(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let mut out = String::new();
    if whole < 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole.unsigned_abs()));
    out.push_str(" €");
    out
}

/// Format a wage level with the French decimal comma, trailing zeros trimmed.
///
/// # Example
///
/// ```
/// use exo_eval::format::decimal_fr;
///
/// assert_eq!(decimal_fr(1.5), "1,5");
/// assert_eq!(decimal_fr(2.0), "2");
/// ```
#[must_use]
pub fn decimal_fr(value: f64) -> String {
    let mut s = format!("{value:.6}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s.replace('.', ",")
}

/// Group a non-negative integer in thousands separated by spaces.
fn group_thousands(mut n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let mut groups: Vec<String> = Vec::new();
    while n > 0 {
        if n >= 1000 {
            groups.push(format!("{:03}", n % 1000));
        } else {
            // Leading group, no zero padding.
            groups.push(n.to_string());
        }
        n /= 1000;
    }
    let mut out = String::new();
    for (i, g) in groups.iter().rev().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(g);
    }
    out
}
