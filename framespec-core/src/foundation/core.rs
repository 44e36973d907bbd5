use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{FrameError, FrameResult};

/// A frame number. Frames may be negative.
pub type Frame = i64;

/// Policy for grouping the frames of a sequence into chunks.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStrategy {
    /// Consecutive runs of `chunk_size` frames, in sorted order.
    #[default]
    Linear,
    /// Frames dealt round-robin across `ceil(len / chunk_size)` chunks.
    Cycle,
    /// Each chunk is one arithmetic progression of at most `chunk_size` frames.
    Progressions,
}

impl ChunkStrategy {
    /// Lowercase name, as used in configs and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cycle => "cycle",
            Self::Progressions => "progressions",
        }
    }
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ChunkStrategy {
    type Err = FrameError;

    fn from_str(s: &str) -> FrameResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "cycle" => Ok(Self::Cycle),
            "progressions" => Ok(Self::Progressions),
            other => Err(FrameError::config(format!(
                "unknown chunk strategy '{other}'"
            ))),
        }
    }
}

/// Chunking options applied when a sequence is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChunkOptions {
    /// Frames per chunk. `None` or `0` means one chunk for the whole sequence.
    pub chunk_size: Option<usize>,
    /// How frames are distributed among chunks.
    pub chunk_strategy: ChunkStrategy,
}

impl ChunkOptions {
    /// Options with the given chunk size and the default strategy.
    pub fn with_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: Some(chunk_size),
            ..Self::default()
        }
    }

    /// Replace the strategy.
    pub fn strategy(mut self, chunk_strategy: ChunkStrategy) -> Self {
        self.chunk_strategy = chunk_strategy;
        self
    }
}

/// Clamp a requested chunk size into `[1, len]`; zero means `len`.
pub(crate) fn clamp_chunk_size(requested: usize, len: usize) -> usize {
    if requested == 0 {
        len
    } else {
        requested.min(len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
