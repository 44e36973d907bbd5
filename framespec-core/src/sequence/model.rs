use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::foundation::core::{ChunkOptions, ChunkStrategy, Frame, clamp_chunk_size};
use crate::foundation::error::{FrameError, FrameResult};
use crate::sequence::progression::{Progression, decompose};
use crate::spec::parse::{FrameSource, resolve_frames};

/// A non-empty, sorted, duplicate-free set of frames with chunking settings.
///
/// Frame membership never changes after construction. Only `chunk_size` and
/// `chunk_strategy` are mutable, and neither takes part in equality.
///
/// A sequence whose frames have one constant gap is a *progression*; see
/// [`Sequence::is_progression`].
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence {
    frames: Vec<Frame>,
    progression: Option<Progression>,
    chunk_size: usize,
    chunk_strategy: ChunkStrategy,
}

impl Sequence {
    /// Create a sequence from a spec, a numeric range or explicit frames.
    pub fn create(source: impl Into<FrameSource>) -> FrameResult<Self> {
        Self::create_with(source, ChunkOptions::default())
    }

    /// Create a sequence with chunking options.
    pub fn create_with(source: impl Into<FrameSource>, opts: ChunkOptions) -> FrameResult<Self> {
        let frames = resolve_frames(&source.into())?;
        if frames.is_empty() {
            return Err(FrameError::empty_input("can't create a sequence with no frames"));
        }
        Ok(Self::from_sorted(frames, opts))
    }

    /// Create from explicit frames, in any order.
    pub fn from_frames(frames: impl IntoIterator<Item = Frame>) -> FrameResult<Self> {
        Self::create(FrameSource::Frames(frames.into_iter().collect()))
    }

    /// Create from an inclusive positional range. See [`FrameSource::Range`].
    pub fn from_range(start: Frame, end: Frame, step: Frame) -> FrameResult<Self> {
        Self::create(FrameSource::range(start, end, step))
    }

    // `frames` must be sorted, duplicate-free and non-empty.
    pub(crate) fn from_sorted(frames: Vec<Frame>, opts: ChunkOptions) -> Self {
        debug_assert!(!frames.is_empty());
        let progression = Progression::classify(&frames);
        let chunk_size = clamp_chunk_size(opts.chunk_size.unwrap_or(0), frames.len());
        Self {
            frames,
            progression,
            chunk_size,
            chunk_strategy: opts.chunk_strategy,
        }
    }

    /// First frame.
    pub fn start(&self) -> Frame {
        self.frames[0]
    }

    /// Last frame.
    pub fn end(&self) -> Frame {
        self.frames[self.frames.len() - 1]
    }

    /// The constant gap, for progressions only.
    pub fn step(&self) -> Option<Frame> {
        self.progression.map(|p| p.step())
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`: a sequence holds at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames in ascending order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Iterate frames in ascending order. Each call starts from the first frame.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Frame>> {
        self.frames.iter().copied()
    }

    /// `true` when `frame` is a member.
    pub fn contains(&self, frame: Frame) -> bool {
        self.frames.binary_search(&frame).is_ok()
    }

    /// `true` when the frames form one arithmetic progression.
    pub fn is_progression(&self) -> bool {
        self.progression.is_some()
    }

    /// The progression these frames form, if any.
    pub fn progression(&self) -> Option<Progression> {
        self.progression
    }

    /// Frames per chunk, in `[1, len]`.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Set frames per chunk. Clamped to the length; `0` means one chunk.
    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        self.chunk_size = clamp_chunk_size(chunk_size, self.frames.len());
    }

    /// Current chunking strategy.
    pub fn chunk_strategy(&self) -> ChunkStrategy {
        self.chunk_strategy
    }

    /// Set the chunking strategy.
    pub fn set_chunk_strategy(&mut self, chunk_strategy: ChunkStrategy) {
        self.chunk_strategy = chunk_strategy;
    }

    /// Current chunk settings, to carry over to derived sequences.
    pub fn options(&self) -> ChunkOptions {
        ChunkOptions {
            chunk_size: Some(self.chunk_size),
            chunk_strategy: self.chunk_strategy,
        }
    }

    /// Frames present in both. `None` when nothing overlaps.
    pub fn intersection(&self, other: impl IntoIterator<Item = Frame>) -> Option<Sequence> {
        let mut common: Vec<Frame> = other.into_iter().filter(|f| self.contains(*f)).collect();
        if common.is_empty() {
            return None;
        }
        common.sort_unstable();
        common.dedup();
        Some(Self::from_sorted(common, self.options()))
    }

    /// Frames present in either.
    pub fn union(&self, other: impl IntoIterator<Item = Frame>) -> Sequence {
        let mut all = self.frames.clone();
        all.extend(other);
        all.sort_unstable();
        all.dedup();
        Self::from_sorted(all, self.options())
    }

    /// Shift every frame by `delta`. Results below zero are kept.
    ///
    /// Fails with [`FrameError::InvalidRange`] if a shifted frame leaves the
    /// [`Frame`] range.
    pub fn offset(&self, delta: Frame) -> FrameResult<Sequence> {
        let shifted = self
            .iter()
            .map(|f| {
                f.checked_add(delta).ok_or_else(|| {
                    FrameError::invalid_range(format!("frame {f} offset by {delta} overflows"))
                })
            })
            .collect::<FrameResult<Vec<Frame>>>()?;
        Ok(Self::from_sorted(shifted, self.options()))
    }

    /// Pick `count` frames spread evenly by position, clamped to `[1, len]`.
    pub fn subsample(&self, count: usize) -> Sequence {
        let n = self.len();
        let count = count.clamp(1, n);
        let gap = n as f64 / count as f64;
        let mut pos = gap / 2.0;

        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            let index = (pos as usize).min(n - 1);
            picked.push(self.frames[index]);
            pos += gap;
        }
        picked.dedup();
        Self::from_sorted(picked, ChunkOptions::default())
    }

    /// Chunk size that splits the frames most evenly into the current chunk count.
    ///
    /// With 100 frames and a chunk size of 70 there are two chunks of 70 and 30;
    /// this returns 50. Not meaningful for [`ChunkStrategy::Progressions`].
    pub fn best_chunk_size(&self) -> usize {
        let n = self.len();
        let count = n.div_ceil(self.chunk_size);
        n.div_ceil(count)
    }

    /// Compact progressions covering the frames, in order.
    pub fn progressions(&self) -> Vec<Progression> {
        match self.progression {
            Some(p) => vec![p],
            None => decompose(&self.frames, None),
        }
    }

    /// Compact form with custom separators, e.g. `(":", "%", "; ")` gives
    /// `"1:10; 14; 20:48%4"`.
    pub fn to_custom(&self, range_sep: &str, step_sep: &str, block_sep: &str) -> String {
        self.progressions()
            .iter()
            .map(|p| p.to_custom(range_sep, step_sep))
            .collect::<Vec<_>>()
            .join(block_sep)
    }
}

impl From<Progression> for Sequence {
    fn from(p: Progression) -> Self {
        Self::from_sorted(p.iter().collect(), ChunkOptions::default())
    }
}

impl From<&Sequence> for FrameSource {
    fn from(seq: &Sequence) -> Self {
        FrameSource::Frames(seq.frames.clone())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = Frame;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Frame>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.frames == other.frames
    }
}

impl Eq for Sequence {}

impl Hash for Sequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.frames.hash(state);
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_custom("-", "x", ","))
    }
}

// Prints the constructor call that rebuilds an equal sequence.
impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence::create({:?})", self.to_string())
    }
}

impl FromStr for Sequence {
    type Err = FrameError;

    fn from_str(s: &str) -> FrameResult<Self> {
        Self::create(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = FrameError;

    fn try_from(spec: String) -> FrameResult<Self> {
        Self::create(spec)
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/model.rs"]
mod tests;
