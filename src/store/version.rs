//! Sequential version numbers and their `v<NNN>` folder labels.

use std::fmt;

use crate::util::{Error, Result};

/// A sequential version number under a job, rendered as `v001`, `v002`, ...
///
/// The number of a job's *current* version is derived from the entry count
/// of the job directory, not from parsing folder names. If folders are ever
/// removed by hand the derived numbering desynchronizes from what is on
/// disk; two sessions deriving the next number at the same time can also
/// collide. Both limitations are inherited from the studio convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u32);

impl Version {
    /// First version of a freshly created job.
    pub const FIRST: Version = Version(1);

    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// The version that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Folder label, zero-padded to 3 digits (`v001`).
    pub fn label(self) -> String {
        format!("v{:03}", self.0)
    }

    /// Parse a folder label back into a version number.
    pub fn parse(label: &str) -> Result<Self> {
        let digits = label
            .strip_prefix('v')
            .ok_or_else(|| Error::InvalidVersionLabel(label.to_string()))?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidVersionLabel(label.to_string()));
        }
        let number: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidVersionLabel(label.to_string()))?;
        Ok(Self(number))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{:03}", self.0)
    }
}
