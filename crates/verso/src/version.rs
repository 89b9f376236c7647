//! The version value type

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::identifier::{is_semantic_identifier, parse_numeric, Component, Identifier, Number};
use crate::VersionError;

const IDX_MAJOR: usize = 0;
const IDX_MINOR: usize = 1;
const IDX_PATCH: usize = 2;

const K_MINOR: f64 = 0.001;
const K_PATCH: f64 = 0.000001;

/// A parsed or constructed version identifier.
///
/// A version holds an ordered list of version parts (major, minor, patch and
/// any further parts), a list of prerelease identifiers and a list of build
/// identifiers. Parsed versions also keep their input text, which `Display`
/// reproduces verbatim.
///
/// Equality and hashing are structural over the three lists; the prefix and
/// the retained input text do not take part. Precedence is defined by
/// [`Version::compare`].
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub(crate) prefix: String,
    pub(crate) version_parts: Vec<Component>,
    pub(crate) prerelease_ids: Vec<Component>,
    pub(crate) build_ids: Vec<Component>,
    pub(crate) source: Option<String>,
}

impl Version {
    /// Create a semantic version with no prerelease or build identifiers
    pub fn new(major: i64, minor: i64, patch: i64) -> Self {
        Self::from_components(
            vec![Some(major.to_string()), Some(minor.to_string()), Some(patch.to_string())],
            Vec::new(),
            Vec::new(),
        )
    }

    pub(crate) fn from_components(
        version_parts: Vec<Component>,
        prerelease_ids: Vec<Component>,
        build_ids: Vec<Component>,
    ) -> Self {
        Version {
            prefix: String::new(),
            version_parts,
            prerelease_ids,
            build_ids,
            source: None,
        }
    }

    /// Create a semantic version, failing when major, minor or patch is missing.
    ///
    /// A missing prerelease or build list is the same as an empty one.
    pub fn make_semantic_version(
        major: Option<i64>,
        minor: Option<i64>,
        patch: Option<i64>,
        prerelease: Option<Vec<Identifier>>,
        build: Option<Vec<Identifier>>,
    ) -> Result<Self, VersionError> {
        let major = require_part(major, "major")?;
        let minor = require_part(minor, "minor")?;
        let patch = require_part(patch, "patch")?;

        Ok(Self::from_components(
            vec![Some(major.to_string()), Some(minor.to_string()), Some(patch.to_string())],
            into_components(prerelease),
            into_components(build),
        ))
    }

    /// Create a version from any number of parts. Nothing is checked: negative
    /// numbers, free text and part counts other than three are all accepted.
    pub fn make_version(
        parts: Vec<Identifier>,
        prerelease: Option<Vec<Identifier>>,
        build: Option<Vec<Identifier>>,
    ) -> Self {
        Self::from_components(
            into_components(Some(parts)),
            into_components(prerelease),
            into_components(build),
        )
    }

    /// `n.0.0`
    pub fn from_long(n: i64) -> Self {
        Self::new(n, 0, 0)
    }

    /// `floor(d).0.0`, saturating at the `i64` range; NaN becomes `0.0.0`
    pub fn from_double(d: f64) -> Self {
        Self::new(d.floor() as i64, 0, 0)
    }

    /// Dispatch to [`Version::from_long`] or [`Version::from_double`]
    pub fn from_number(n: impl Into<Number>) -> Self {
        match n.into() {
            Number::Integer(n) => Self::from_long(n),
            Number::Float(d) => Self::from_double(d),
        }
    }

    /// Set the literal rendered in front of the version parts
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.source = None;
        self
    }

    /// Replace the version parts. The result no longer renders the parsed input.
    pub fn with_version_parts(mut self, parts: Vec<Identifier>) -> Self {
        self.version_parts = into_components(Some(parts));
        self.source = None;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn version_parts(&self) -> &[Component] {
        &self.version_parts
    }

    pub fn prerelease_ids(&self) -> &[Component] {
        &self.prerelease_ids
    }

    pub fn build_ids(&self) -> &[Component] {
        &self.build_ids
    }

    /// The text this version was parsed from, if it was parsed
    pub fn original_source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn has_major(&self) -> bool {
        IDX_MAJOR < self.version_parts.len()
    }

    pub fn has_minor(&self) -> bool {
        IDX_MINOR < self.version_parts.len()
    }

    pub fn has_patch(&self) -> bool {
        IDX_PATCH < self.version_parts.len()
    }

    /// Integer value of a version part; 0 when the part is missing or not numeric
    pub fn version_part_number(&self, index: usize) -> i64 {
        self.version_parts
            .get(index)
            .and_then(|part| part.as_deref())
            .and_then(parse_numeric)
            .unwrap_or(0)
    }

    pub fn major_number(&self) -> i64 {
        self.version_part_number(IDX_MAJOR)
    }

    pub fn minor_number(&self) -> i64 {
        self.version_part_number(IDX_MINOR)
    }

    pub fn patch_number(&self) -> i64 {
        self.version_part_number(IDX_PATCH)
    }

    /// Exactly three version parts, and every part and identifier matches `[0-9A-Za-z-]+`
    pub fn is_semantic(&self) -> bool {
        self.version_parts.len() == 3
            && [&self.version_parts, &self.prerelease_ids, &self.build_ids]
                .iter()
                .all(|list| list.iter().all(|c| is_semantic_identifier(c.as_deref())))
    }

    /// At least one version part, and the major number is not negative
    pub fn is_valid(&self) -> bool {
        self.has_major() && self.major_number() >= 0
    }

    /// A semantic version with major number 0
    pub fn is_development(&self) -> bool {
        self.is_semantic() && self.major_number() == 0
    }

    pub fn to_i64(&self) -> i64 {
        self.major_number()
    }

    pub fn to_i32(&self) -> i32 {
        self.major_number() as i32
    }

    pub fn to_i16(&self) -> i16 {
        self.major_number() as i16
    }

    pub fn to_i8(&self) -> i8 {
        self.major_number() as i8
    }

    /// `major + minor * 0.001 + patch * 0.000001`.
    ///
    /// Lossy: minor or patch numbers of 1000 and above bleed into the next
    /// position. Never use this for ordering; see [`Version::compare`].
    pub fn to_f64(&self) -> f64 {
        self.major_number() as f64
            + self.minor_number() as f64 * K_MINOR
            + self.patch_number() as f64 * K_PATCH
    }

    /// `major + minor * 0.001`, with the same caveats as [`Version::to_f64`]
    pub fn to_f32(&self) -> f32 {
        (self.major_number() as f64 + self.minor_number() as f64 * K_MINOR) as f32
    }

    /// Render from the structured fields, ignoring any retained input text
    pub fn to_canonical_string(&self) -> String {
        let mut rendered = self.prefix.clone();
        rendered.push_str(&join_present(&self.version_parts));

        let prerelease = join_present(&self.prerelease_ids);
        if !prerelease.is_empty() {
            rendered.push('-');
            rendered.push_str(&prerelease);
        }

        let build = join_present(&self.build_ids);
        if !build.is_empty() {
            rendered.push('+');
            rendered.push_str(&build);
        }

        rendered
    }
}

fn require_part(value: Option<i64>, name: &'static str) -> Result<i64, VersionError> {
    value.ok_or_else(|| {
        log::debug!("Rejecting semantic version without a {} part", name);
        VersionError::MissingPart(name)
    })
}

fn into_components(identifiers: Option<Vec<Identifier>>) -> Vec<Component> {
    identifiers
        .unwrap_or_default()
        .into_iter()
        .map(Identifier::into_component)
        .collect()
}

// Absent components are skipped
fn join_present(components: &[Component]) -> String {
    components
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => f.write_str(source),
            None => f.write_str(&self.to_canonical_string()),
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.version_parts == other.version_parts
            && self.prerelease_ids == other.prerelease_ids
            && self.build_ids == other.build_ids
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version_parts.hash(state);
        self.prerelease_ids.hash(state);
        self.build_ids.hash(state);
    }
}

impl From<i64> for Version {
    fn from(n: i64) -> Self {
        Self::from_long(n)
    }
}

impl From<i32> for Version {
    fn from(n: i32) -> Self {
        Self::from_long(i64::from(n))
    }
}

impl From<u32> for Version {
    fn from(n: u32) -> Self {
        Self::from_long(i64::from(n))
    }
}

impl From<f64> for Version {
    fn from(d: f64) -> Self {
        Self::from_double(d)
    }
}

impl From<f32> for Version {
    fn from(d: f32) -> Self {
        Self::from_double(f64::from(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<Component> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn test_make_version() {
        let ver = Version::make_version(vec![1.into(), 2.into(), 3.into()], None, None);
        assert_eq!(ver.major_number(), 1);
        assert_eq!(ver.minor_number(), 2);
        assert_eq!(ver.patch_number(), 3);
        assert!(ver.prerelease_ids().is_empty());
        assert!(ver.build_ids().is_empty());
        assert!(ver.has_major());
        assert!(ver.has_minor());
        assert!(ver.has_patch());
        assert!(ver.is_semantic());
        assert_eq!(ver.to_string(), "1.2.3");
    }

    #[test]
    fn test_make_version_negative() {
        let ver = Version::make_version(vec![(-1).into(), (-2).into(), (-3).into()], None, None);
        assert_eq!(ver.major_number(), -1);
        assert_eq!(ver.minor_number(), -2);
        assert_eq!(ver.patch_number(), -3);
        assert!(!ver.is_valid());
        assert_eq!(ver.to_string(), "-1.-2.-3");
    }

    #[test]
    fn test_make_version_any_length() {
        let ver = Version::make_version(vec![1.into(), 2.into()], None, None);
        assert!(ver.has_minor());
        assert!(!ver.has_patch());
        assert!(!ver.is_semantic());
        assert!(ver.is_valid());
        assert_eq!(ver.to_string(), "1.2");

        let ver = Version::make_version(vec![1.into(), "x".into(), 3.into(), 4.into()], None, None);
        assert_eq!(ver.version_part_number(1), 0);
        assert_eq!(ver.version_part_number(3), 4);
        assert_eq!(ver.to_string(), "1.x.3.4");
    }

    #[test]
    fn test_make_semantic_version() {
        let ver = Version::make_semantic_version(Some(1), Some(2), Some(3), None, None).unwrap();
        assert_eq!(ver.version_parts(), strings(&["1", "2", "3"]).as_slice());
        assert!(ver.is_semantic());
        assert_eq!(ver.to_string(), "1.2.3");
    }

    #[test]
    fn test_make_semantic_version_with_identifiers() {
        let ver = Version::make_semantic_version(
            Some(1),
            Some(2),
            Some(3),
            Some(vec![1.into(), "x6".into()]),
            Some(vec![0.into(), "a2".into()]),
        )
        .unwrap();
        assert_eq!(ver.prerelease_ids(), strings(&["1", "x6"]).as_slice());
        assert_eq!(ver.build_ids(), strings(&["0", "a2"]).as_slice());
        assert!(ver.is_semantic());
        assert_eq!(ver.to_string(), "1.2.3-1.x6+0.a2");

        let ver =
            Version::make_semantic_version(Some(1), Some(2), Some(3), Some(vec![]), None).unwrap();
        assert_eq!(ver.to_string(), "1.2.3");

        let build = Some(vec!["0".into(), "a2".into()]);
        let ver = Version::make_semantic_version(Some(1), Some(2), Some(3), None, build).unwrap();
        assert_eq!(ver.to_string(), "1.2.3+0.a2");
        assert!(ver.is_semantic());
        // parsed back, a `+` with no prerelease separates version parts
        assert_eq!(Version::parse(&ver.to_string()).version_parts().len(), 5);
    }

    #[test]
    fn test_make_semantic_version_missing_part() {
        let err = Version::make_semantic_version(Some(1), Some(2), None, None, None).unwrap_err();
        assert!(matches!(err, VersionError::MissingPart("patch")));
        assert_eq!(err.to_string(), "Invalid patch version: missing");

        let err = Version::make_semantic_version(Some(1), None, Some(2), None, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid minor version: missing");

        let err = Version::make_semantic_version(None, None, None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid major version: missing");
    }

    #[test]
    fn test_numeric_constructors() {
        assert_eq!(Version::from_long(5).to_string(), "5.0.0");
        assert_eq!(Version::from_double(2.9).to_string(), "2.0.0");
        assert_eq!(Version::from_double(-1.5).to_string(), "-2.0.0");
        assert_eq!(Version::from_double(f64::NAN).to_string(), "0.0.0");
        assert_eq!(Version::from_number(7), Version::new(7, 0, 0));
        assert_eq!(Version::from_number(7.25), Version::new(7, 0, 0));
        assert_eq!(Version::from(3u32), Version::new(3, 0, 0));
        assert!(Version::from_long(0).is_development());
        assert!(!Version::from_long(1).is_development());
    }

    #[test]
    fn test_numeric_coercions() {
        let ver = Version::new(1, 2, 3);
        assert_eq!(ver.to_i64(), 1);
        assert_eq!(ver.to_i32(), 1);
        assert_eq!(ver.to_i16(), 1);
        assert_eq!(ver.to_i8(), 1);
        assert!((ver.to_f64() - 1.002003).abs() < 1e-9);
        assert!((ver.to_f32() - 1.002).abs() < 1e-6);

        // minor numbers past 999 overtake the next major
        assert!(Version::new(1, 1001, 0).to_f64() > Version::new(2, 0, 0).to_f64());
    }

    #[test]
    fn test_is_valid() {
        assert!(Version::new(0, 0, 0).is_valid());
        assert!(!Version::default().is_valid());
        assert!(!Version::new(-1, 0, 0).is_valid());
        assert!(Version::make_version(vec!["abc".into()], None, None).is_valid());
    }

    #[test]
    fn test_is_semantic_rejects_bad_identifiers() {
        let parts = || -> Vec<Identifier> { vec![1.into(), 2.into(), 3.into()] };
        let ver = Version::make_version(parts(), Some(vec!["a_b".into()]), None);
        assert!(!ver.is_semantic());
        let ver = Version::make_version(parts(), None, Some(vec!["".into()]));
        assert!(!ver.is_semantic());
    }

    #[test]
    fn test_rendering_skips_absent_components() {
        let ver = Version::from_components(
            vec![Some("1".to_string()), None, Some("3".to_string())],
            vec![None],
            vec![Some("b".to_string())],
        );
        assert_eq!(ver.to_string(), "1.3+b");
    }

    #[test]
    fn test_prefix() {
        let ver = Version::new(1, 2, 3).with_prefix("v");
        assert_eq!(ver.prefix(), "v");
        assert_eq!(ver.to_string(), "v1.2.3");
        assert_eq!(ver, Version::new(1, 2, 3));
    }

    #[test]
    fn test_with_version_parts() {
        let prerelease = Some(vec!["rc".into()]);
        let ver = Version::make_semantic_version(Some(1), Some(2), Some(3), prerelease, None)
            .unwrap()
            .with_version_parts(vec![4.into(), 5.into()]);
        assert_eq!(ver.to_string(), "4.5-rc");
        assert!(!ver.is_semantic());
    }

    #[test]
    fn test_equality_ignores_identifier_input_kind() {
        let make = |prerelease: Identifier, build: Identifier| {
            Version::make_semantic_version(
                Some(1),
                Some(2),
                Some(3),
                Some(vec![prerelease]),
                Some(vec![build]),
            )
            .unwrap()
        };
        let numeric = make(1.into(), 2.into());
        let text = make("1".into(), "2".into());
        assert_eq!(numeric, text);

        let mut set = std::collections::HashSet::new();
        set.insert(numeric);
        assert!(set.contains(&text));
    }
}
