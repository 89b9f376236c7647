//! Component-wise addition and subtraction of versions

use std::ops::{Add, Sub};

use crate::identifier::{parse_numeric, Component, Number};
use crate::Version;

// Pairs components positionally, padding the shorter list with absent components
fn zip_longest<F>(a: &[Component], b: &[Component], op: F) -> Vec<Component>
where
    F: Fn(Option<&str>, Option<&str>) -> Component,
{
    (0..a.len().max(b.len()))
        .map(|i| {
            op(
                a.get(i).and_then(|c| c.as_deref()),
                b.get(i).and_then(|c| c.as_deref()),
            )
        })
        .collect()
}

fn add_component(a: Option<&str>, b: Option<&str>) -> Component {
    match (a, b) {
        (None, b) => b.map(str::to_string),
        (Some(a), None) => Some(a.to_string()),
        (Some(a), Some(b)) => Some(match (parse_numeric(a), parse_numeric(b)) {
            (Some(x), Some(y)) => (i128::from(x) + i128::from(y)).to_string(),
            _ => format!("{}{}", a, b),
        }),
    }
}

fn subtract_component(a: Option<&str>, b: Option<&str>) -> Component {
    match (a, b) {
        (None, _) => None,
        (Some(a), None) => Some(a.to_string()),
        (Some(a), Some(b)) => Some(match (parse_numeric(a), parse_numeric(b)) {
            (Some(x), Some(y)) => (i128::from(x) - i128::from(y)).to_string(),
            // Not an inverse of concatenation in general: a minuend without
            // the suffix comes back unchanged
            _ => a.strip_suffix(b).unwrap_or(a).to_string(),
        }),
    }
}

impl Version {
    fn combine<F>(&self, other: &Version, op: F) -> Version
    where
        F: Fn(Option<&str>, Option<&str>) -> Component + Copy,
    {
        let mut result = Version::from_components(
            zip_longest(&self.version_parts, &other.version_parts, op),
            zip_longest(&self.prerelease_ids, &other.prerelease_ids, op),
            zip_longest(&self.build_ids, &other.build_ids, op),
        );
        result.prefix = self.prefix.clone();
        result
    }

    /// Add another version component by component.
    ///
    /// Numeric components are summed and any other pair is concatenated, so
    /// `1.2.3 + a.b.c` is `1a.2b.3c`. Where one side runs out, the other
    /// side's component is kept. Adding `None` returns a copy of `self`.
    pub fn add<'a>(&self, other: impl Into<Option<&'a Version>>) -> Version {
        match other.into() {
            None => self.clone(),
            Some(other) => {
                let result = self.combine(other, add_component);
                log::trace!("{} + {} = {}", self, other, result);
                result
            }
        }
    }

    /// Subtract another version component by component.
    ///
    /// Numeric components are subtracted and may go negative. Otherwise the
    /// subtrahend is trimmed from the end of the minuend when it is a suffix,
    /// and the minuend is kept unchanged when it is not. Positions where
    /// `self` has no component stay absent. Subtracting `None` returns a copy
    /// of `self`.
    pub fn subtract<'a>(&self, other: impl Into<Option<&'a Version>>) -> Version {
        match other.into() {
            None => self.clone(),
            Some(other) => {
                let result = self.combine(other, subtract_component);
                log::trace!("{} - {} = {}", self, other, result);
                result
            }
        }
    }

    /// Add a number, read as the version `floor(n).0.0`.
    ///
    /// The number goes through [`Version::from_number`]: integers are used
    /// exactly and only floats go through [`Version::from_double`], so large
    /// integers are not rounded to the nearest `f64`.
    pub fn add_number(&self, n: impl Into<Number>) -> Version {
        self.add(&Version::from_number(n))
    }

    /// Subtract a number, read as the version `floor(n).0.0`. Integers are
    /// used exactly, as in [`Version::add_number`].
    pub fn subtract_number(&self, n: impl Into<Number>) -> Version {
        self.subtract(&Version::from_number(n))
    }
}

impl Add<&Version> for &Version {
    type Output = Version;

    fn add(self, rhs: &Version) -> Version {
        Version::add(self, rhs)
    }
}

impl Sub<&Version> for &Version {
    type Output = Version;

    fn sub(self, rhs: &Version) -> Version {
        Version::subtract(self, rhs)
    }
}
