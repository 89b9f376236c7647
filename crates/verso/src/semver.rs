//! Semver facade providing high-level operations on version strings

use std::cmp::Ordering;

use crate::{Version, VersionParser};

/// Main facade for version string operations
pub struct Semver;

impl Semver {
    /// Compare the precedence of two version strings
    pub fn compare(version1: &str, version2: &str) -> Ordering {
        Version::parse(version1).compare(&Version::parse(version2))
    }

    /// Check if a version string parses to a valid version
    pub fn is_valid(version: &str) -> bool {
        Version::parse(version).is_valid()
    }

    /// Check if a version string is a semantic version
    pub fn is_semantic(version: &str) -> bool {
        Version::parse(version).is_semantic()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        // Keep the original index so the input strings come back untouched
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .map(|(i, v)| (parser.parse(v), i))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.compare(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
