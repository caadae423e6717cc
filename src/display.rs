use std::str::FromStr;

use thiserror::Error;

/// Which characters represent live and dead cells when a grid is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// `X` and `.`, also the snapshot format
    #[default]
    Basic,
    Block,
    Dots,
}
impl DisplayMode {
    #[inline]
    pub fn live_char(self) -> char {
        match self {
            Self::Basic => 'X',
            Self::Block => '█',
            Self::Dots => '●',
        }
    }
    #[inline]
    pub fn dead_char(self) -> char {
        match self {
            Self::Basic => '.',
            Self::Block => ' ',
            Self::Dots => '·',
        }
    }
    #[inline]
    pub fn glyph(self, living: bool) -> char {
        if living {
            self.live_char()
        } else {
            self.dead_char()
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown display mode `{0}`")]
pub struct UnknownDisplayMode(pub String);

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "block" => Ok(Self::Block),
            "dots" => Ok(Self::Dots),
            other => Err(UnknownDisplayMode(other.to_owned())),
        }
    }
}
