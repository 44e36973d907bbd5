use crate::foundation::core::{ChunkOptions, ChunkStrategy};
use crate::sequence::model::Sequence;
use crate::sequence::progression::decompose;

impl Sequence {
    /// Split the frames into chunks according to the chunk strategy.
    ///
    /// Chunks partition the frames exactly. They are created with default chunk
    /// settings.
    ///
    /// - [`ChunkStrategy::Linear`] fills chunk 1, then chunk 2, and so on.
    /// - [`ChunkStrategy::Cycle`] deals frames round-robin so every chunk spans
    ///   the whole range. Rendering 1-100 in 20 chunks, the first chunk gets 1, 21,
    ///   41, 61 and 81, so the early results cover the shot coarsely.
    /// - [`ChunkStrategy::Progressions`] makes every chunk a progression of at most
    ///   `chunk_size` frames.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(frames = self.len(), chunk_size = self.chunk_size(), strategy = %self.chunk_strategy())
    )]
    pub fn chunks(&self) -> Vec<Sequence> {
        let chunks = match self.chunk_strategy() {
            ChunkStrategy::Linear => self.linear_chunks(),
            ChunkStrategy::Cycle => self.cycle_chunks(),
            ChunkStrategy::Progressions => decompose(self.frames(), Some(self.chunk_size()))
                .into_iter()
                .map(Sequence::from)
                .collect(),
        };
        tracing::debug!(chunks = chunks.len(), "split sequence");
        chunks
    }

    /// Number of chunks [`Sequence::chunks`] would return.
    ///
    /// Computed directly for linear and cycle; progressions must be built to be
    /// counted.
    pub fn chunk_count(&self) -> usize {
        match self.chunk_strategy() {
            ChunkStrategy::Linear | ChunkStrategy::Cycle => self.len().div_ceil(self.chunk_size()),
            ChunkStrategy::Progressions => {
                decompose(self.frames(), Some(self.chunk_size())).len()
            }
        }
    }

    fn linear_chunks(&self) -> Vec<Sequence> {
        self.frames()
            .chunks(self.chunk_size())
            .map(|c| Sequence::from_sorted(c.to_vec(), ChunkOptions::default()))
            .collect()
    }

    fn cycle_chunks(&self) -> Vec<Sequence> {
        let count = self.chunk_count();
        let mut buckets = vec![Vec::with_capacity(self.chunk_size()); count];
        for (i, frame) in self.iter().enumerate() {
            buckets[i % count].push(frame);
        }
        buckets
            .into_iter()
            .map(|b| Sequence::from_sorted(b, ChunkOptions::default()))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/chunk.rs"]
mod tests;
