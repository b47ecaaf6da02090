use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A class identifier attached to training examples and predictions.
///
/// Serializes as a bare integer so HTTP clients see `{"sentiment": 2}`.
/// Ordering is numeric; the centroid map iterates classes in this order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub i64);

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const I64_MIN_F64: f64 = i64::MIN as f64;
const I64_MAX_EXCLUSIVE_F64: f64 = 9_223_372_036_854_775_808.0;

impl FromStr for Label {
    type Err = String;

    /// Accepts plain integers and integral floats ("2", " -1 ", "3.0").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self(value));
        }
        match trimmed.parse::<f64>() {
            // 2^63 itself is out of range; `as` would saturate it to i64::MAX.
            Ok(value)
                if value.fract() == 0.0 && (I64_MIN_F64..I64_MAX_EXCLUSIVE_F64).contains(&value) =>
            {
                Ok(Self(value as i64))
            }
            _ => Err(format!("invalid label: '{trimmed}'")),
        }
    }
}

/// One labeled row of the training dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub label: Label,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, label: i64) -> Self {
        Self {
            text: text.into(),
            label: Label(label),
        }
    }
}

/// Result of classifying a single text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Class owning the best-scoring centroid.
    pub label: Label,
    /// Cosine similarity between the query and that centroid, in [-1, 1].
    pub similarity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse_integer() {
        assert_eq!("2".parse::<Label>().unwrap(), Label(2));
        assert_eq!(" -1 ".parse::<Label>().unwrap(), Label(-1));
    }

    #[test]
    fn test_label_parse_integral_float() {
        assert_eq!("3.0".parse::<Label>().unwrap(), Label(3));
    }

    #[test]
    fn test_label_parse_rejects_fractional_and_text() {
        assert!("1.5".parse::<Label>().is_err());
        assert!("positive".parse::<Label>().is_err());
        assert!("".parse::<Label>().is_err());
        assert!("NaN".parse::<Label>().is_err());
    }

    #[test]
    fn test_label_parse_rejects_out_of_range() {
        assert!("1e30".parse::<Label>().is_err());
        assert!("-1e30".parse::<Label>().is_err());
        assert!("9223372036854775808".parse::<Label>().is_err());
        assert!("9223372036854775808.0".parse::<Label>().is_err());
        assert!("inf".parse::<Label>().is_err());
        assert_eq!(
            "-9223372036854775808".parse::<Label>().unwrap(),
            Label(i64::MIN)
        );
        assert_eq!("1e3".parse::<Label>().unwrap(), Label(1000));
    }

    #[test]
    fn test_label_serializes_as_integer() {
        let json = serde_json::to_string(&Label(4)).unwrap();
        assert_eq!(json, "4");
    }

    #[test]
    fn test_label_ordering_is_numeric() {
        let mut labels = vec![Label(10), Label(-2), Label(3)];
        labels.sort();
        assert_eq!(labels, vec![Label(-2), Label(3), Label(10)]);
    }
}
