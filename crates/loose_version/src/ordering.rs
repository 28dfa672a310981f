use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::Version;

// Numbers are zero padded so 1.5 == 1.5.0.0. The suffix does not take part.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {

        if self.pre_release != other.pre_release {
            return false;
        }

        let len = std::cmp::max(self.numbers.len(), other.numbers.len());
        let left = self.numbers.iter().copied().chain(std::iter::repeat(0)).take(len);
        let right = other.numbers.iter().copied().chain(std::iter::repeat(0)).take(len);
        if !left.eq(right) {
            return false;
        }

        self.update_marker == other.update_marker
            && self.qualifiers == other.qualifiers
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // trailing zeros are padding as far as == is concerned
        let significant = self.numbers.iter()
            .rposition(|n| *n != 0)
            .map_or(0, |idx| idx + 1);
        self.numbers[..significant].hash(state);
        self.pre_release.hash(state);
        self.update_marker.hash(state);
        self.qualifiers.hash(state);
    }
}

impl Version {

    /// Orders two versions.
    ///
    /// 1. versions that are `==` are `Equal`
    /// 2. numbers are compared pairwise, the first difference decides
    /// 3. when one side runs out of numbers first, it is the lesser one,
    ///    so `1.0 < 1.0.1` and also `1.0-x < 1.0.0`
    /// 4. otherwise beta < release candidate < final, then by marker number
    ///
    /// Update markers and qualifiers never decide the order. Two versions
    /// that differ only there compare `Equal` here while not being `==`:
    ///
    /// ```
    /// use loose_version::Version;
    ///
    /// let plain = Version::parse("1.5").unwrap();
    /// let snapshot = Version::parse("1.5-SNAPSHOT").unwrap();
    /// assert_eq!(plain.compare(&snapshot), std::cmp::Ordering::Equal);
    /// assert_ne!(plain, snapshot);
    /// ```
    pub fn compare(&self, other: &Version) -> Ordering {

        if self == other {
            return Ordering::Equal;
        }

        for (left, right) in std::iter::zip(&self.numbers, &other.numbers) {
            if left != right {
                return left.cmp(right);
            }
        }

        match self.numbers.len().cmp(&other.numbers.len()) {
            // ran out of numbers first, no padding here
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.pre_release.cmp(&other.pre_release),
        }
    }
}

/// [`Version::compare`] in a shape that fits `sort_by` and `max_by`.
pub fn cmp_versions(left: &Version, right: &Version) -> Ordering {
    left.compare(right)
}
