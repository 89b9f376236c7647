//! Version identifiers with lenient parsing, SemVer-compatible precedence and
//! component-wise arithmetic.
//!
//! Any string parses: `1.2.3-rc.1+build.5`, `1.2.3.4`, `2`, or outright
//! garbage. The result records its version parts, prerelease identifiers and
//! build identifiers, keeps the input text for rendering, and answers whether
//! it is valid or a semantic version. Strict constructors reject input that
//! fails those checks.
//!
//! ```
//! use verso::Version;
//!
//! let v1 = Version::parse("1.2.3");
//! let v2 = Version::parse("1.2.3-beta");
//! assert!(v1.is_semantic());
//! assert!(v1.compare(&v2).is_gt());
//! assert_eq!(v1.add(&Version::parse("0.0.1-alpha")).to_string(), "1.2.4-alpha");
//! assert!(!Version::parse("1.2.3.4").is_semantic());
//! ```

mod arithmetic;
mod comparator;
mod identifier;
mod semver;
#[cfg(feature = "serde")]
mod serialization;
mod version;
mod version_parser;

pub use comparator::{compare_component, Comparator, Operator};
pub use identifier::{
    is_numeric, is_semantic_identifier, is_semantic_version_part, Component, Identifier, Number,
};
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{VersionError, VersionParser};
