use std::fmt;
use std::ops::{Add, AddAssign};

/// Integer calorie count as coerced from user input.
///
/// Text that does not start with a number coerces to `NotANumber`, which
/// absorbs everything it is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calories {
    Count(i64),
    NotANumber,
}

impl Calories {
    pub const ZERO: Calories = Calories::Count(0);

    /// Coerce text to an integer the way a lenient `parseInt` does: skip
    /// leading whitespace, accept one sign and an optional `0x` prefix, then
    /// take the longest run of digits and ignore whatever follows.
    pub fn parse(input: &str) -> Self {
        match leading_integer(input) {
            Some(value) => Calories::Count(value),
            None => Calories::NotANumber,
        }
    }
}

impl Add for Calories {
    type Output = Calories;

    fn add(self, rhs: Calories) -> Calories {
        match (self, rhs) {
            (Calories::Count(a), Calories::Count(b)) => Calories::Count(a.saturating_add(b)),
            _ => Calories::NotANumber,
        }
    }
}

impl AddAssign for Calories {
    fn add_assign(&mut self, rhs: Calories) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calories::Count(value) => write!(f, "{}", value),
            Calories::NotANumber => f.write_str("NaN"),
        }
    }
}

/// Parse the leading signed integer of `input`, if any. A `0x`/`0X` prefix
/// switches to base 16 and must be followed by at least one hex digit.
///
/// Values too large for `i64` saturate instead of failing.
fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.chars().fold(0i64, |acc, c| {
        let digit = c.to_digit(radix).map_or(0, i64::from);
        acc.saturating_mul(i64::from(radix)).saturating_add(digit)
    });

    Some(if negative { -magnitude } else { magnitude })
}
