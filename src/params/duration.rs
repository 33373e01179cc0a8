//! ISO-8601 duration strings.
//!
//! Only used to check that a `runEvery` value is well formed before it is
//! sent; the service does the actual scheduling.

use std::fmt;
use std::str::FromStr;

/// A parsed ISO-8601 duration, e.g. `P1D` or `PT1H30M`.
///
/// Accepted form: `P[nY][nM][nW][nD][T[nH][nM][nS]]`, designators in that
/// order, at least one component, and at least one component after `T`.
/// The last component may carry a decimal fraction (`.` or `,`).
///
/// # Example
///
/// ```rust
/// use repeater::params::Duration;
///
/// let duration: Duration = "PT1H30M".parse().unwrap();
/// assert_eq!(duration.hours, 1.0);
/// assert_eq!(duration.minutes, 30.0);
/// assert!("foobar".parse::<Duration>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Duration {
    /// Years.
    pub years: f64,
    /// Months.
    pub months: f64,
    /// Weeks.
    pub weeks: f64,
    /// Days.
    pub days: f64,
    /// Hours.
    pub hours: f64,
    /// Minutes.
    pub minutes: f64,
    /// Seconds.
    pub seconds: f64,
}

/// Error returned when a string is not an ISO-8601 duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ISO8601 duration '{input}': {reason}")]
pub struct DurationParseError {
    /// The rejected input.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

const DATE_DESIGNATORS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_DESIGNATORS: [char; 3] = ['H', 'M', 'S'];

impl FromStr for Duration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| DurationParseError {
            input: s.to_string(),
            reason,
        };

        let rest = s.strip_prefix('P').ok_or_else(|| fail("must start with 'P'"))?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => {
                if time.is_empty() {
                    return Err(fail("'T' must be followed by a time component"));
                }
                (date, Some(time))
            }
            None => (rest, None),
        };

        let date = parse_components(date_part, &DATE_DESIGNATORS).map_err(fail)?;
        let time = match time_part {
            Some(time) => parse_components(time, &TIME_DESIGNATORS).map_err(fail)?,
            None => Vec::new(),
        };

        if date.is_empty() && time.is_empty() {
            return Err(fail("must contain at least one component"));
        }
        let fractional_count = date.iter().chain(&time).filter(|c| c.fractional).count();
        let last_is_fractional = time.last().or(date.last()).is_some_and(|c| c.fractional);
        if fractional_count > 1 || (fractional_count == 1 && !last_is_fractional) {
            return Err(fail("only the smallest component may have a fraction"));
        }

        let mut duration = Self::default();
        for component in date {
            let slot = match component.designator {
                'Y' => &mut duration.years,
                'M' => &mut duration.months,
                'W' => &mut duration.weeks,
                _ => &mut duration.days,
            };
            *slot = component.value;
        }
        for component in time {
            let slot = match component.designator {
                'H' => &mut duration.hours,
                'M' => &mut duration.minutes,
                _ => &mut duration.seconds,
            };
            *slot = component.value;
        }
        Ok(duration)
    }
}

struct Component {
    designator: char,
    value: f64,
    fractional: bool,
}

/// Splits `input` into `<number><designator>` pairs, enforcing the order of
/// `designators` and that none repeats.
fn parse_components(input: &str, designators: &[char]) -> Result<Vec<Component>, &'static str> {
    let mut components = Vec::new();
    let mut next_allowed = 0;
    let mut number = String::new();

    for c in input.chars() {
        if c.is_ascii_digit() {
            number.push(c);
        } else if c == '.' || c == ',' {
            if number.is_empty() || number.contains('.') {
                return Err("malformed number");
            }
            number.push('.');
        } else {
            let position = designators[next_allowed..]
                .iter()
                .position(|d| *d == c)
                .ok_or("unexpected or out-of-order designator")?;
            if number.is_empty() || number.ends_with('.') {
                return Err("designator without a number");
            }
            let value = number.parse::<f64>().map_err(|_| "malformed number")?;
            components.push(Component {
                designator: c,
                value,
                fractional: number.contains('.'),
            });
            next_allowed += position + 1;
            number.clear();
        }
    }

    if number.is_empty() {
        Ok(components)
    } else {
        Err("number without a designator")
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("P")?;
        let date = [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ];
        for (value, designator) in date {
            if value != 0.0 {
                write!(f, "{value}{designator}")?;
            }
        }
        let time = [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')];
        if time.iter().any(|(value, _)| *value != 0.0) {
            f.write_str("T")?;
            for (value, designator) in time {
                if value != 0.0 {
                    write!(f, "{value}{designator}")?;
                }
            }
        } else if date.iter().all(|(value, _)| *value == 0.0) {
            f.write_str("T0S")?;
        }
        Ok(())
    }
}
