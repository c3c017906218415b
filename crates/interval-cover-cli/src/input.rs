//! Parser for the batch problem format.
//!
//! Each case is a target line, a count line, then one line per interval:
//!
//! ```text
//! <begin> <end>
//! <n>
//! <lo> <hi>      (n times)
//! ```
//!
//! Cases repeat until end of input. Line breaks are not significant; tokens
//! may be separated by any whitespace.

use anyhow::{Context, Result};
use interval_cover::Interval;

/// One problem instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub begin: f64,
    pub end: f64,
    pub intervals: Vec<Interval<f64>>,
}

/// Parse every case in `text`.
pub fn parse_cases(text: &str) -> Result<Vec<Case>> {
    let mut tokens = text.split_whitespace();
    let mut cases = Vec::new();

    while let Some(first) = tokens.next() {
        let number = cases.len() + 1;
        let case = parse_case(first, &mut tokens)
            .with_context(|| format!("Malformed input in case {}", number))?;
        cases.push(case);
    }

    Ok(cases)
}

fn parse_case<'a>(first: &str, tokens: &mut impl Iterator<Item = &'a str>) -> Result<Case> {
    let begin = parse_number::<f64>(Some(first), "target begin")?;
    let end = parse_number::<f64>(tokens.next(), "target end")?;
    let count = parse_number::<usize>(tokens.next(), "interval count")?;

    let mut intervals = Vec::with_capacity(count.min(1 << 16));
    for i in 0..count {
        let lo = parse_number::<f64>(tokens.next(), "interval start")
            .with_context(|| format!("interval {}", i))?;
        let hi = parse_number::<f64>(tokens.next(), "interval end")
            .with_context(|| format!("interval {}", i))?;
        intervals.push(Interval::new(lo, hi));
    }

    Ok(Case {
        begin,
        end,
        intervals,
    })
}

fn parse_number<T>(token: Option<&str>, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = token.with_context(|| format!("unexpected end of input, expected {}", what))?;
    token
        .parse()
        .with_context(|| format!("invalid {}: '{}'", what, token))
}
