//! Construction-time configuration.

use std::ops::{BitOr, BitOrAssign};

use serde::Deserialize;

/// Parser mode bit-flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Mode(u32);

impl Mode {
    /// Comment tokens stay in the active sequence.
    pub const PARSE_COMMENTS: Mode = Mode(1 << 0);

    pub const fn empty() -> Self {
        Mode(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Mode) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mode {
    fn bitor_assign(&mut self, rhs: Mode) {
        self.0 |= rhs.0;
    }
}

/// Serializable form of [`Mode`], e.g. `{"includeComments": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    pub include_comments: bool,
}

impl From<ParseOptions> for Mode {
    fn from(opts: ParseOptions) -> Mode {
        let mut mode = Mode::empty();
        if opts.include_comments {
            mode |= Mode::PARSE_COMMENTS;
        }
        mode
    }
}

impl From<&ParseOptions> for Mode {
    fn from(opts: &ParseOptions) -> Mode {
        Mode::from(*opts)
    }
}
