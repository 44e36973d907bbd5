use crate::expand::tokens::Expander;
use crate::foundation::core::Frame;
use crate::foundation::error::FrameResult;
use crate::plan::config::FramesConfig;
use crate::sequence::model::Sequence;

/// Resolved frames for one job: what to render, what to scout, and where the
/// frames came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramePlan {
    main: Sequence,
    scout: Option<Sequence>,
    sources: Vec<Sequence>,
}

impl FramePlan {
    /// Plan over `main` with no scout frames.
    pub fn new(main: Sequence) -> Self {
        Self {
            main,
            scout: None,
            sources: Vec::new(),
        }
    }

    /// Resolve the main sequence, scout frames and sources of a config.
    pub fn from_config(cfg: &FramesConfig) -> FrameResult<Self> {
        let main = cfg.main_sequence()?;
        let sources = if cfg.frames.is_some() {
            Vec::new()
        } else {
            cfg.source_sequences()?
        };
        let mut plan = Self::new(main).with_sources(sources);
        if cfg.use_scout_frames
            && let Some(spec) = &cfg.scout_frames
        {
            plan = plan.with_scout(spec);
        }
        Ok(plan)
    }

    /// Scout the frames of `spec` that are also in the main sequence.
    ///
    /// A spec that does not parse, or that misses the main sequence entirely,
    /// leaves the plan without scout frames.
    pub fn with_scout(mut self, spec: &str) -> Self {
        self.scout = match Sequence::create(spec) {
            Ok(scout) => self.main.intersection(&scout),
            Err(err) => {
                tracing::debug!(%err, spec, "ignoring scout frames");
                None
            }
        };
        self
    }

    /// Per-source sequences that task commands can address individually.
    pub fn with_sources(mut self, sources: Vec<Sequence>) -> Self {
        self.sources = sources;
        self
    }

    /// Frames to render.
    pub fn main(&self) -> &Sequence {
        &self.main
    }

    /// Frames to render first, if any.
    pub fn scout(&self) -> Option<&Sequence> {
        self.scout.as_ref()
    }

    /// Source sequences; empty when the main sequence was given directly.
    pub fn sources(&self) -> &[Sequence] {
        &self.sources
    }

    /// One-line summary, e.g. `"3 Scout / 100 Frames -- 10 Chunks -- 1-100"`.
    pub fn info(&self) -> String {
        let frames = match &self.scout {
            Some(scout) => format!("{} Scout / {} Frames", scout.len(), self.main.len()),
            None => format!("{} Frames", self.main.len()),
        };
        format!(
            "{frames} -- {} Chunks -- {}",
            self.main.chunk_count(),
            self.main
        )
    }

    /// Tokens describing the whole job.
    ///
    /// `sequence`, `sequence_length`, `sequence_min`, `sequence_max`,
    /// `chunk_size`, `chunk_count`, `scout` (empty without scout frames) and
    /// `scout_count`.
    pub fn job_tokens(&self) -> Expander {
        let mut tokens = Expander::new();
        tokens
            .insert("sequence", &self.main)
            .insert("sequence_length", self.main.len())
            .insert("sequence_min", self.main.start())
            .insert("sequence_max", self.main.end())
            .insert("chunk_size", self.main.chunk_size())
            .insert("chunk_count", self.main.chunk_count())
            .insert(
                "scout",
                self.scout.as_ref().map(ToString::to_string).unwrap_or_default(),
            )
            .insert("scout_count", self.scout.as_ref().map_or(0, Sequence::len));
        tokens
    }
}

/// First, middle and last frame of `start..=end`, without duplicates.
///
/// The middle is the floor of the midpoint.
pub fn default_scout_frames(start: Frame, end: Frame) -> Vec<Frame> {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let middle = lo.saturating_add_unsigned(hi.abs_diff(lo) / 2);
    let mut frames = vec![lo, middle, hi];
    frames.dedup();
    frames
}

#[cfg(test)]
#[path = "../../tests/unit/plan/job.rs"]
mod tests;
