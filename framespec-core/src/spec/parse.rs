use std::ops::{Range, RangeInclusive};

use crate::foundation::core::Frame;
use crate::foundation::error::{FrameError, FrameResult};

const TOKEN_SHAPE: &str = "must be 'start<-end<xstep>>'";

/// Input accepted by the sequence factory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameSource {
    /// A frame spec such as `"1-10, 14, 20-50x4"`.
    Spec(String),
    /// An inclusive numeric range. `end` defaults to `start`, `step` to 1.
    Range {
        /// First frame (or last, if greater than `end`).
        start: Frame,
        /// Other end of the range.
        end: Option<Frame>,
        /// Step between frames, at least 1.
        step: Option<Frame>,
    },
    /// Explicit frames, in any order, duplicates allowed.
    Frames(Vec<Frame>),
}

impl FrameSource {
    /// Inclusive `start..=end` range with a step.
    pub fn range(start: Frame, end: Frame, step: Frame) -> Self {
        Self::Range {
            start,
            end: Some(end),
            step: Some(step),
        }
    }

    /// Build a source from one to three textual arguments.
    ///
    /// A single argument is a spec. Two or three arguments are `start end [step]`
    /// and must be integers.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> FrameResult<Self> {
        match args {
            [] => Err(FrameError::empty_input("need at least one argument")),
            [spec] => Ok(Self::Spec(spec.as_ref().to_string())),
            [start, end] => Ok(Self::Range {
                start: parse_positional(start.as_ref())?,
                end: Some(parse_positional(end.as_ref())?),
                step: None,
            }),
            [start, end, step] => Ok(Self::Range {
                start: parse_positional(start.as_ref())?,
                end: Some(parse_positional(end.as_ref())?),
                step: Some(parse_positional(step.as_ref())?),
            }),
            _ => Err(FrameError::invalid_range(format!(
                "expected at most 3 range arguments, got {}",
                args.len()
            ))),
        }
    }
}

impl From<&str> for FrameSource {
    fn from(spec: &str) -> Self {
        Self::Spec(spec.to_string())
    }
}

impl From<String> for FrameSource {
    fn from(spec: String) -> Self {
        Self::Spec(spec)
    }
}

impl From<&String> for FrameSource {
    fn from(spec: &String) -> Self {
        Self::Spec(spec.clone())
    }
}

impl From<Vec<Frame>> for FrameSource {
    fn from(frames: Vec<Frame>) -> Self {
        Self::Frames(frames)
    }
}

impl From<&[Frame]> for FrameSource {
    fn from(frames: &[Frame]) -> Self {
        Self::Frames(frames.to_vec())
    }
}

impl From<Range<Frame>> for FrameSource {
    fn from(r: Range<Frame>) -> Self {
        Self::Frames(r.collect())
    }
}

impl From<RangeInclusive<Frame>> for FrameSource {
    fn from(r: RangeInclusive<Frame>) -> Self {
        Self::Frames(r.collect())
    }
}

fn parse_positional(arg: &str) -> FrameResult<Frame> {
    arg.trim().parse::<Frame>().map_err(|_| {
        FrameError::malformed_spec(format!("range argument '{arg}' is not an integer"))
    })
}

/// Resolve a source into sorted, duplicate-free frames.
///
/// An empty [`FrameSource::Frames`] resolves to an empty list; rejecting it is up
/// to the caller.
pub fn resolve_frames(source: &FrameSource) -> FrameResult<Vec<Frame>> {
    let mut frames = match source {
        FrameSource::Spec(spec) => {
            let mut out = Vec::new();
            for (first, last, step) in spec_progressions(spec)? {
                out.extend(inclusive_steps(first, last, step)?);
            }
            out
        }
        FrameSource::Range { start, end, step } => {
            let end = end.unwrap_or(*start);
            let step = step.unwrap_or(1);
            let (first, last) = if *start <= end {
                (*start, end)
            } else {
                (end, *start)
            };
            if step < 1 {
                return Err(FrameError::invalid_range(format!(
                    "step must be positive, got {step}"
                )));
            }
            // Specs may name negative frames; positional ranges may not.
            if first < 0 {
                return Err(FrameError::invalid_range(format!(
                    "range must be non-negative, got start {first}"
                )));
            }
            inclusive_steps(first, last, step)?.collect()
        }
        FrameSource::Frames(frames) => frames.clone(),
    };
    frames.sort_unstable();
    frames.dedup();
    Ok(frames)
}

/// `true` when `spec` parses as a frame spec. Never allocates the frames.
pub fn is_valid_spec(spec: &str) -> bool {
    validate_spec(spec).is_ok()
}

/// Check a frame spec, reporting the first offending token.
pub fn validate_spec(spec: &str) -> FrameResult<()> {
    spec_progressions(spec).map(|_| ())
}

fn inclusive_steps(
    first: Frame,
    last: Frame,
    step: Frame,
) -> FrameResult<impl Iterator<Item = Frame>> {
    let step = usize::try_from(step)
        .ok()
        .filter(|s| *s > 0)
        .ok_or_else(|| FrameError::invalid_range(format!("step must be positive, got {step}")))?;
    Ok((first..=last).step_by(step))
}

/// Split a spec into normalized `(first, last, step)` triples, `first <= last`.
pub(crate) fn spec_progressions(spec: &str) -> FrameResult<Vec<(Frame, Frame, Frame)>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(FrameError::malformed_spec("spec must be non-empty"));
    }
    if spec.starts_with(',') || spec.ends_with(',') {
        return Err(FrameError::malformed_spec(format!(
            "empty token in '{spec}': {TOKEN_SHAPE}"
        )));
    }

    spec.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> FrameResult<(Frame, Frame, Frame)> {
    let bad = || FrameError::malformed_spec(format!("token '{token}' {TOKEN_SHAPE}"));

    let mut cur = Cursor::new(token);
    let first = cur.integer().ok_or_else(bad)?;
    if cur.at_end() {
        return Ok((first, first, 1));
    }

    if !cur.eat(b'-') {
        return Err(bad());
    }
    let last = cur.integer().ok_or_else(bad)?;

    let step = if cur.at_end() {
        1
    } else {
        if !cur.eat(b'x') {
            return Err(bad());
        }
        cur.positive().ok_or_else(bad)?
    };
    if !cur.at_end() {
        return Err(bad());
    }

    Ok((first.min(last), first.max(last), step))
}

struct Cursor<'a> {
    src: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, i: 0 }
    }

    fn at_end(&self) -> bool {
        self.i >= self.src.len()
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.i).copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    fn digits(&mut self) -> &'a str {
        let start = self.i;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.i += 1;
        }
        &self.src[start..self.i]
    }

    // -?[0-9]+
    fn integer(&mut self) -> Option<Frame> {
        let start = self.i;
        self.eat(b'-');
        if self.digits().is_empty() {
            return None;
        }
        self.src[start..self.i].parse().ok()
    }

    // [1-9][0-9]*
    fn positive(&mut self) -> Option<Frame> {
        if !self.peek().is_some_and(|b| (b'1'..=b'9').contains(&b)) {
            return None;
        }
        self.digits().parse().ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/parse.rs"]
mod tests;
