//! # Spec grammar
//!
//! A spec is a list of tokens separated by commas and/or whitespace. Each token is
//! one of:
//!
//! ```text
//! 7          a single frame
//! 1-10       every frame from 1 to 10
//! 1-10x3     1, 4, 7, 10
//! 10-1       same as 1-10
//! -8--2x2    negative frames are allowed: -8, -6, -4, -2
//! ```
//!
//! Duplicates collapse and order does not matter: `"5, 1-3, 2"` is `1, 2, 3, 5`.
//! An empty spec, a leading or trailing comma (`",1"`) or a step below 1 is an error.
//!
//! A range whose end is not reachable with its step is cut short: `1-10x4` is
//! `1, 5, 9` and prints back as `1-9x4`.
//!
//! # Compact form
//!
//! Printing a [`Sequence`](crate::Sequence) decomposes it into progressions. The
//! decomposition is greedy and favors long runs. Frames left on their own are
//! paired up into two-frame progressions:
//!
//! ```
//! use framespec::Sequence;
//!
//! let seq: Sequence = "1,2,3,4,5,6,7,8,9,10,14,20,24,28,32,36,40,44,48".parse()?;
//! assert_eq!(seq.to_string(), "1-10,14,20-48x4");
//! # Ok::<(), framespec::FrameError>(())
//! ```
//!
//! # Chunking
//!
//! | strategy       | chunk `i` holds                                      |
//! |----------------|------------------------------------------------------|
//! | `linear`       | the next `chunk_size` frames in order                |
//! | `cycle`        | every `chunk_count`-th frame, starting at frame `i`  |
//! | `progressions` | one progression of at most `chunk_size` frames       |
//!
//! `chunk_size` is clamped to the sequence length, and `0` means one chunk.
//! [`Sequence::best_chunk_size`](crate::Sequence::best_chunk_size) evens out the
//! last chunk without changing the chunk count.
//!
//! # Expansion
//!
//! - `#` runs: `image.####.exr` -> `image.0007.exr`
//! - placeholders: `image.{frame:04d}.exr`, also `{frame}`, `{frame:4d}`, `{{`, `}}`
//! - `$F` and `$4F`, resolved to the placeholders above
//! - `<token>` job and task tokens through [`Expander`](crate::Expander) and
//!   [`plan_tasks`](crate::plan_tasks)
