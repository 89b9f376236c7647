//! Version string tokenizing and the strict parse variants

use std::convert::Infallible;
use std::str::FromStr;

use thiserror::Error;

use crate::identifier::Component;
use crate::Version;

/// Error type for the strict constructors.
///
/// Rejected versions are split by the check that failed:
/// [`Version::make_semantic_version`] gives `MissingPart`,
/// [`VersionParser::parse_valid`] gives `InvalidVersion` and
/// [`VersionParser::parse_semantic`] gives `NotSemantic`. Use
/// [`VersionError::is_invalid_version`] to match any of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid {0} version: missing")]
    MissingPart(&'static str),
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Invalid semantic version string \"{0}\"")]
    NotSemantic(String),
    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),
}

impl VersionError {
    /// Whether a version was rejected, as opposed to an operator
    pub fn is_invalid_version(&self) -> bool {
        matches!(
            self,
            VersionError::MissingPart(_)
                | VersionError::InvalidVersion(_)
                | VersionError::NotSemantic(_)
        )
    }
}

/// Tokenizer stage. Each stage has its own separator set and its own target list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Version,
    Prerelease,
    Build,
}

impl Stage {
    fn index(self) -> usize {
        match self {
            Stage::Version => 0,
            Stage::Prerelease => 1,
            Stage::Build => 2,
        }
    }

    fn is_separator(self, b: u8) -> bool {
        match self {
            Stage::Version => matches!(b, b'.' | b'-' | b'+'),
            Stage::Prerelease => matches!(b, b'.' | b'+'),
            Stage::Build => b == b'.',
        }
    }

    fn after(self, separator: u8) -> Stage {
        match (self, separator) {
            (Stage::Version, b'-') => Stage::Prerelease,
            (Stage::Prerelease, b'+') => Stage::Build,
            (stage, _) => stage,
        }
    }
}

/// Parser turning raw strings into [`Version`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Parse any string. This never fails; malformed input gives a version
    /// whose `is_valid()` or `is_semantic()` is false.
    ///
    /// Version parts are separated by `.`, `-` or `+`, and the first `-`
    /// starts the prerelease identifiers. A `+` before that only separates
    /// version parts, so `1.0.0+build` has four parts. Inside the prerelease
    /// `-` is an ordinary character and the first `+` starts the build
    /// identifiers, where only `.` separates. Empty tokens between adjacent
    /// separators are kept; a trailing separator does not produce an empty
    /// token.
    pub fn parse(&self, input: &str) -> Version {
        let mut lists: [Vec<Component>; 3] = Default::default();
        let mut stage = Stage::Version;
        let mut start = 0;

        // Separators are ASCII, so byte offsets always fall on char boundaries
        for (index, b) in input.bytes().enumerate() {
            if !stage.is_separator(b) {
                continue;
            }
            lists[stage.index()].push(Some(input[start..index].to_string()));
            stage = stage.after(b);
            start = index + 1;
        }
        if start < input.len() {
            lists[stage.index()].push(Some(input[start..].to_string()));
        }

        let [version_parts, prerelease_ids, build_ids] = lists;
        log::trace!(
            "Parsed \"{}\": {} version parts, {} prerelease ids, {} build ids",
            input,
            version_parts.len(),
            prerelease_ids.len(),
            build_ids.len()
        );

        let mut version = Version::from_components(version_parts, prerelease_ids, build_ids);
        version.source = Some(input.to_string());
        version
    }

    /// Parse, failing unless the result is valid
    pub fn parse_valid(&self, input: &str) -> Result<Version, VersionError> {
        let version = self.parse(input);
        if !version.is_valid() {
            log::debug!("Rejecting invalid version \"{}\"", input);
            return Err(VersionError::InvalidVersion(input.to_string()));
        }
        Ok(version)
    }

    /// Parse, failing unless the result is a semantic version
    pub fn parse_semantic(&self, input: &str) -> Result<Version, VersionError> {
        let version = self.parse(input);
        if !version.is_semantic() {
            log::debug!("Rejecting non-semantic version \"{}\"", input);
            return Err(VersionError::NotSemantic(input.to_string()));
        }
        Ok(version)
    }
}

impl Version {
    /// Shorthand for [`VersionParser::parse`]
    pub fn parse(input: &str) -> Version {
        VersionParser::new().parse(input)
    }

    /// Shorthand for [`VersionParser::parse_valid`]
    pub fn parse_valid(input: &str) -> Result<Version, VersionError> {
        VersionParser::new().parse_valid(input)
    }

    /// Shorthand for [`VersionParser::parse_semantic`]
    pub fn parse_semantic(input: &str) -> Result<Version, VersionError> {
        VersionParser::new().parse_semantic(input)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::parse(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::parse(s)
    }
}
