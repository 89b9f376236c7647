//! Identifier inputs and the component grammars

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// A single version component. `None` is an absent component, produced by
/// zip-longest arithmetic; parsed and constructed components are always present.
pub type Component = Option<String>;

lazy_static! {
    // SemVer identifier grammar
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();

    // Components compared and combined as integers
    static ref NUMERIC_RE: Regex = Regex::new(r"^-?[0-9]+$").unwrap();

    // Major/minor/patch per SemVer 2.0: no sign, no leading zero
    static ref SEMANTIC_PART_RE: Regex = Regex::new(r"^(?:0|[1-9][0-9]*)$").unwrap();
}

/// A prerelease or build identifier supplied to a constructor.
///
/// Numbers are rendered in decimal with their sign and without leading zeros;
/// after construction a version only ever holds the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(i64),
    Text(String),
}

impl Identifier {
    /// Convert into the canonical string form stored in a version
    pub fn into_component(self) -> Component {
        Some(match self {
            Identifier::Numeric(n) => n.to_string(),
            Identifier::Text(s) => s,
        })
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self {
        Identifier::Numeric(n)
    }
}

impl From<i32> for Identifier {
    fn from(n: i32) -> Self {
        Identifier::Numeric(i64::from(n))
    }
}

impl From<u32> for Identifier {
    fn from(n: u32) -> Self {
        Identifier::Numeric(i64::from(n))
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Text(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::Text(s)
    }
}

/// A scalar accepted by the numeric constructors and arithmetic overloads
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<f64> for Number {
    fn from(d: f64) -> Self {
        Number::Float(d)
    }
}

impl From<f32> for Number {
    fn from(d: f32) -> Self {
        Number::Float(f64::from(d))
    }
}

/// Check that an identifier is absent or matches `[0-9A-Za-z-]+`
pub fn is_semantic_identifier(identifier: Option<&str>) -> bool {
    identifier.map_or(true, |s| IDENTIFIER_RE.is_match(s))
}

/// Check that a string is a strict SemVer numeric part (`0`, `1`, `42`, never `01` or `-1`)
pub fn is_semantic_version_part(part: &str) -> bool {
    SEMANTIC_PART_RE.is_match(part) && part.parse::<i64>().is_ok()
}

/// Check whether a component takes part in arithmetic and comparison as an integer
pub fn is_numeric(component: &str) -> bool {
    parse_numeric(component).is_some()
}

/// Integer value of a component matching `-?[0-9]+` that fits in an `i64`
pub(crate) fn parse_numeric(component: &str) -> Option<i64> {
    if NUMERIC_RE.is_match(component) {
        component.parse().ok()
    } else {
        None
    }
}
