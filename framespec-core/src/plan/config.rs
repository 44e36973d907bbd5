use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{ChunkOptions, Frame};
use crate::foundation::error::{FrameError, FrameResult};
use crate::sequence::model::Sequence;
use crate::spec::parse::FrameSource;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Job frame settings, usually read from JSON.
///
/// ```
/// use framespec::FramesConfig;
///
/// let cfg = FramesConfig::from_json_str(r#"{ "ranges": [[1, 10, 1], [20, 30, 5]], "chunk_size": 4 }"#)?;
/// assert_eq!(cfg.main_sequence()?.to_string(), "1-10,20-30x5");
/// # Ok::<(), framespec::FrameError>(())
/// ```
pub struct FramesConfig {
    /// Custom frame spec. Takes precedence over `ranges`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<String>,
    /// Source ranges as `[start, end, step]`, unioned into the main sequence.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<[Frame; 3]>,
    /// Chunk size and strategy applied to the main sequence.
    #[serde(flatten)]
    pub chunking: ChunkOptions,
    /// Scout frame spec, used when `use_scout_frames` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scout_frames: Option<String>,
    /// Whether scout frames apply.
    #[serde(default)]
    pub use_scout_frames: bool,
    /// Per-task command with `<token>` placeholders.
    #[serde(default)]
    pub task_template: String,
}

impl FramesConfig {
    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> FrameResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| FrameError::config(format!("parse frames config JSON: {e}")))
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FrameResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FrameError::config(format!("parse frames config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FrameResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open frames config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// One sequence per entry of `ranges`, with default chunking.
    pub fn source_sequences(&self) -> FrameResult<Vec<Sequence>> {
        self.ranges
            .iter()
            .map(|&[start, end, step]| Sequence::create(FrameSource::range(start, end, step)))
            .collect()
    }

    /// The frames to render: `frames` when set, otherwise the union of `ranges`.
    pub fn main_sequence(&self) -> FrameResult<Sequence> {
        if let Some(spec) = &self.frames {
            return Sequence::create_with(spec.as_str(), self.chunking);
        }

        let mut sources = self.source_sequences()?.into_iter();
        let first = sources
            .next()
            .ok_or_else(|| FrameError::config("frames config needs 'frames' or 'ranges'"))?;
        let mut main = sources.fold(first, |acc, s| acc.union(&s));
        main.set_chunk_size(self.chunking.chunk_size.unwrap_or(0));
        main.set_chunk_strategy(self.chunking.chunk_strategy);
        Ok(main)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/config.rs"]
mod tests;
