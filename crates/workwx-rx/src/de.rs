// ABOUTME: Serde helpers for the loosely typed XML the callback service sends.
// ABOUTME: Numeric elements may be empty or padded, so they are parsed from text by hand.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Parse a numeric element from its text. Empty elements yield the default.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed
        .parse()
        .map_err(|e| D::Error::custom(format!("invalid number '{trimmed}': {e}")))
}

/// Split a comma separated list of numbers, skipping blanks and junk.
pub(crate) fn split_numbers<T: FromStr>(raw: &str) -> Vec<T> {
    raw.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(rename = "N", default, deserialize_with = "lenient")]
        n: i64,
        #[serde(rename = "F", default, deserialize_with = "lenient")]
        f: f64,
    }

    #[test]
    fn test_lenient_parses_padded_numbers() {
        let sample: Sample = quick_xml::de::from_str("<x><N> 42 </N><F>23.1</F></x>").unwrap();
        assert_eq!(sample.n, 42);
        assert_eq!(sample.f, 23.1);
    }

    #[test]
    fn test_lenient_empty_and_missing_default() {
        let sample: Sample = quick_xml::de::from_str("<x><N></N></x>").unwrap();
        assert_eq!(sample.n, 0);
        assert_eq!(sample.f, 0.0);
    }

    #[test]
    fn test_lenient_rejects_garbage() {
        let result: Result<Sample, _> = quick_xml::de::from_str("<x><N>forty-two</N></x>");
        assert!(result.is_err());
    }

    #[test]
    fn test_split_numbers() {
        assert_eq!(split_numbers::<i64>("1,2, 3"), vec![1, 2, 3]);
        assert_eq!(split_numbers::<i64>(""), Vec::<i64>::new());
        assert_eq!(split_numbers::<i64>("4,,x,5"), vec![4, 5]);
    }
}
