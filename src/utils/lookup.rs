//! Single-record lookup over provider responses

use std::fmt;

/// Why a lookup did not produce exactly one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMiss {
    NoMatch,
    Ambiguous(usize),
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMiss::NoMatch => write!(f, "no matching record"),
            LookupMiss::Ambiguous(n) => write!(f, "{} matching records, expected exactly one", n),
        }
    }
}

/// Returns the single record satisfying `predicate`, or why there isn't one.
pub fn find_exactly_one<T, P>(records: &[T], mut predicate: P) -> Result<&T, LookupMiss>
where
    P: FnMut(&T) -> bool,
{
    let mut matches = records.iter().filter(|r| predicate(*r));
    let first = matches.next().ok_or(LookupMiss::NoMatch)?;

    match matches.count() {
        0 => Ok(first),
        rest => Err(LookupMiss::Ambiguous(rest + 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_match_is_returned() {
        let symbols = ["SCRT", "USDC", "stkd-SCRT"];
        assert_eq!(find_exactly_one(&symbols, |s| *s == "USDC"), Ok(&"USDC"));
    }

    #[test]
    fn empty_slice_is_no_match() {
        let symbols: [&str; 0] = [];
        assert_eq!(find_exactly_one(&symbols, |_| true), Err(LookupMiss::NoMatch));
    }

    #[test]
    fn absent_symbol_is_no_match() {
        let symbols = ["SCRT", "USDC"];
        assert_eq!(find_exactly_one(&symbols, |s| *s == "ATOM"), Err(LookupMiss::NoMatch));
    }

    #[test]
    fn duplicates_are_ambiguous() {
        let symbols = ["SCRT", "USDC", "SCRT", "SCRT"];
        assert_eq!(
            find_exactly_one(&symbols, |s| *s == "SCRT"),
            Err(LookupMiss::Ambiguous(3))
        );
        assert_eq!(
            LookupMiss::Ambiguous(3).to_string(),
            "3 matching records, expected exactly one"
        );
    }
}
