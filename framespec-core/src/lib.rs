//! Framespec turns frame specs like `"1-10, 14, 20-50x4"` into sorted frame sets and
//! splits them into chunks for render-farm submission.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: spec string, numeric range or explicit frames -> [`Sequence`]
//! 2. **Compact**: [`Sequence`] -> minimal list of [`Progression`]s, printed as a spec
//! 3. **Chunk**: [`Sequence`] -> chunks by [`ChunkStrategy`]
//! 4. **Expand** (optional): frames -> file names or task commands
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Immutable frames**: a [`Sequence`] never changes membership after construction;
//!   set operations return new values.
//! - **Round-trip**: the compact string of a sequence parses back to the same frames.
//!
//! # Getting started
//!
//! ```
//! use framespec::{ChunkOptions, Sequence};
//!
//! let seq = Sequence::create_with("1-10, 14, 20-50x4", ChunkOptions::with_size(5))?;
//! assert_eq!(seq.to_string(), "1-10,14,20-48x4");
//! assert_eq!(seq.chunk_count(), 4);
//! # Ok::<(), framespec::FrameError>(())
//! ```
//!
//! For the spec grammar and the chunking strategies in detail, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod expand;
mod foundation;
mod plan;
mod sequence;
mod spec;

/// Spec grammar, chunking and expansion walkthrough.
pub mod guide;

pub use expand::permute::Permutations;
pub use expand::tokens::Expander;
pub use foundation::core::{ChunkOptions, ChunkStrategy, Frame};
pub use foundation::error::{FrameError, FrameResult};
pub use plan::config::FramesConfig;
pub use plan::job::{FramePlan, default_scout_frames};
pub use plan::tasks::{TaskSpec, plan_tasks};
pub use sequence::model::Sequence;
pub use sequence::progression::{Progression, decompose};
pub use spec::parse::{FrameSource, is_valid_spec, resolve_frames, validate_spec};
