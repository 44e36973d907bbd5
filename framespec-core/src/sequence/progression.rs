use std::fmt;

use crate::foundation::core::Frame;
use crate::foundation::error::{FrameError, FrameResult};

/// An arithmetic progression of frames: `first, first + step, ..., last`.
///
/// `last` is always reachable from `first`, and `step` is 1 for a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Progression {
    first: Frame,
    last: Frame,
    step: Frame,
}

impl Progression {
    /// Build a progression from inclusive bounds.
    ///
    /// Bounds are swapped if given backwards, and `last` is rounded down to the
    /// final frame the step actually reaches (`0, 10, 3` becomes `0-9x3`).
    pub fn new(first: Frame, last: Frame, step: Frame) -> FrameResult<Self> {
        if step < 1 {
            return Err(FrameError::invalid_range(format!(
                "progression step must be positive, got {step}"
            )));
        }
        let (first, last) = if first <= last {
            (first, last)
        } else {
            (last, first)
        };
        let span = last.abs_diff(first);
        let last = first.saturating_add_unsigned(span - span % step.unsigned_abs());
        let step = if first == last { 1 } else { step };
        Ok(Self { first, last, step })
    }

    /// A progression holding one frame.
    pub fn single(frame: Frame) -> Self {
        Self {
            first: frame,
            last: frame,
            step: 1,
        }
    }

    /// First frame.
    pub fn first(&self) -> Frame {
        self.first
    }

    /// Last frame.
    pub fn last(&self) -> Frame {
        self.last
    }

    /// Gap between consecutive frames.
    pub fn step(&self) -> Frame {
        self.step
    }

    /// `(first, last, step)`.
    pub fn range(&self) -> (Frame, Frame, Frame) {
        (self.first, self.last, self.step)
    }

    /// Number of frames. Saturates for a progression spanning the whole `i64` range.
    pub fn len(&self) -> usize {
        let gaps = self.last.abs_diff(self.first) / self.step.unsigned_abs();
        usize::try_from(gaps).map_or(usize::MAX, |g| g.saturating_add(1))
    }

    /// Always `false`: a progression holds at least one frame.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `true` when `frame` is one of the generated frames.
    pub fn contains(&self, frame: Frame) -> bool {
        frame >= self.first
            && frame <= self.last
            && frame.abs_diff(self.first) % self.step.unsigned_abs() == 0
    }

    /// Frames in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Frame> + Clone + use<> {
        (self.first..=self.last).step_by(self.step as usize)
    }

    /// Render with caller-chosen separators for the range and the step.
    pub fn to_custom(&self, range_sep: &str, step_sep: &str) -> String {
        if self.first == self.last {
            self.first.to_string()
        } else if self.step == 1 {
            format!("{}{range_sep}{}", self.first, self.last)
        } else {
            format!("{}{range_sep}{}{step_sep}{}", self.first, self.last, self.step)
        }
    }

    /// Classify sorted, duplicate-free frames.
    ///
    /// Returns the progression when the frames have one constant gap, `None` for
    /// an empty or irregular group. A gap too wide for a [`Frame`] is irregular.
    pub fn classify(frames: &[Frame]) -> Option<Self> {
        match frames {
            [] => None,
            [only] => Some(Self::single(*only)),
            [a, b, rest @ ..] => {
                let step = b.checked_sub(*a)?;
                if step < 1 {
                    return None;
                }
                let mut prev = *b;
                for &f in rest {
                    if f.checked_sub(prev) != Some(step) {
                        return None;
                    }
                    prev = f;
                }
                Some(Self {
                    first: *a,
                    last: prev,
                    step,
                })
            }
        }
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_custom("-", "x"))
    }
}

impl IntoIterator for Progression {
    type Item = Frame;
    type IntoIter = std::iter::StepBy<std::ops::RangeInclusive<Frame>>;

    fn into_iter(self) -> Self::IntoIter {
        (self.first..=self.last).step_by(self.step as usize)
    }
}

/// Split frames into arithmetic progressions of at most `max_size` frames.
///
/// This is a greedy single pass, not a search for the fewest progressions:
/// frames join the open group while they keep its step; a closed group of exactly
/// two frames hands its second frame to the next group; leftover singles are then
/// paired up in order. `None` or `Some(0)` leaves the length unconstrained.
/// Two frames whose gap overflows a [`Frame`] stay singles.
///
/// The input may be unsorted and contain duplicates. The result is ordered by
/// first frame.
#[tracing::instrument(level = "debug", skip(frames), fields(frames = frames.len()))]
pub fn decompose(frames: &[Frame], max_size: Option<usize>) -> Vec<Progression> {
    let mut sorted = frames.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.is_empty() {
        return Vec::new();
    }

    let max_size = match max_size {
        Some(n) if n > 0 => n,
        _ => sorted.len(),
    };
    if max_size == 1 {
        return sorted.into_iter().map(Progression::single).collect();
    }

    let mut groups: Vec<Vec<Frame>> = vec![Vec::new()];
    for &frame in &sorted {
        if !extends(&groups[groups.len() - 1], frame, max_size) {
            close_group(&mut groups);
        }
        if let Some(open) = groups.last_mut() {
            open.push(frame);
        }
    }
    // Closing the final group applies the same carry-over; drop the group it
    // opens unless it received a frame.
    close_group(&mut groups);
    if groups.last().is_some_and(Vec::is_empty) {
        groups.pop();
    }

    let (mut groups, singles): (Vec<_>, Vec<_>) = groups.into_iter().partition(|g| g.len() > 1);
    groups.extend(singles.chunks(2).map(|pair| pair.concat()));
    groups.sort_by_key(|g| g.first().copied());

    let mut out: Vec<Progression> = Vec::with_capacity(groups.len());
    for group in &groups {
        match Progression::classify(group) {
            Some(p) => out.push(p),
            None => out.extend(group.iter().copied().map(Progression::single)),
        }
    }
    out.sort_by_key(Progression::first);
    tracing::debug!(progressions = out.len(), max_size, "decomposed frames");
    out
}

fn extends(group: &[Frame], frame: Frame, max_size: usize) -> bool {
    match group {
        [] => true,
        [only] => frame.checked_sub(*only).is_some(),
        _ if group.len() >= max_size => false,
        [a, b, ..] => group.last().is_some_and(|last| {
            frame
                .checked_sub(*last)
                .is_some_and(|gap| b.checked_sub(*a) == Some(gap))
        }),
    }
}

fn close_group(groups: &mut Vec<Vec<Frame>>) {
    let mut next = Vec::new();
    if let Some(closed) = groups.last_mut()
        && closed.len() == 2
    {
        next.extend(closed.pop());
    }
    groups.push(next);
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/progression.rs"]
mod tests;
