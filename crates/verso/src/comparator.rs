//! Version precedence

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::identifier::{parse_numeric, Component};
use crate::{Version, VersionError};

/// Compare two components.
///
/// An absent component sorts before any present one. Two numeric components
/// compare as integers (`90 < 100`); anything else compares by bytes, so
/// `100x < 90x`.
pub fn compare_component(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (parse_numeric(a), parse_numeric(b)) {
            (Some(a_num), Some(b_num)) => a_num.cmp(&b_num),
            _ => a.cmp(b),
        },
    }
}

// Shared prefix first, then the longer list wins
fn compare_components(a: &[Component], b: &[Component]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| compare_component(x.as_deref(), y.as_deref()))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

impl Version {
    /// Compare precedence with another version.
    ///
    /// Version parts are compared component by component, and when one list
    /// is a prefix of the other the longer one is greater (`1.2.3.4 > 1.2.3`).
    /// A release is greater than any prerelease of the same parts, and two
    /// prereleases compare by their identifiers the same way version parts do.
    /// Build identifiers never affect precedence.
    ///
    /// This is not `Ord`: precedence can be equal for versions that are not
    /// `==`, such as `1.0.0-rc+a` and `1.0.0-rc+b`. A `+` with no `-` before
    /// it separates version parts, so `1.0.0+a` outranks `1.0.0`.
    pub fn compare(&self, other: &Version) -> Ordering {
        compare_components(&self.version_parts, &other.version_parts).then_with(|| {
            match (self.prerelease_ids.is_empty(), other.prerelease_ids.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => compare_components(&self.prerelease_ids, &other.prerelease_ids),
            }
        })
    }

    /// Check whether both versions have the same precedence
    pub fn precedence_eq(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

/// Comparison operators accepted by [`Comparator::compare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (==)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Not equal (!=)
    NotEqual,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::NotEqual => "!=",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "==", "<", "<=", ">", ">=", "!=", "<>"]
    }

    /// Check whether an ordering satisfies this operator
    pub fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

impl FromStr for Operator {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "!=" | "<>" => Ok(Operator::NotEqual),
            _ => Err(VersionError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparator for version strings. Every check is on precedence, so build
/// identifiers are ignored: `1.0.0-rc+a` is equal to `1.0.0-rc+b`.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::evaluate(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::evaluate(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::evaluate(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::evaluate(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::evaluate(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::evaluate(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator. Unknown operators never match;
    /// use [`Comparator::try_compare`] to tell them apart from a false comparison.
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        Self::try_compare(version1, operator, version2).unwrap_or_else(|err| {
            log::debug!("{}", err);
            false
        })
    }

    /// Compare version1 to version2, failing on an unknown operator
    pub fn try_compare(
        version1: &str,
        operator: &str,
        version2: &str,
    ) -> Result<bool, VersionError> {
        let operator = operator.parse::<Operator>()?;
        Ok(Self::evaluate(version1, operator, version2))
    }

    fn evaluate(version1: &str, operator: Operator, version2: &str) -> bool {
        operator.holds(Version::parse(version1).compare(&Version::parse(version2)))
    }
}
