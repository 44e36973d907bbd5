use std::iter::FusedIterator;

use crate::expand::template::{BoundTemplate, Template};
use crate::foundation::core::Frame;
use crate::foundation::error::{FrameError, FrameResult};
use crate::sequence::model::Sequence;

/// Lazy Cartesian product of named frame axes rendered through one template.
///
/// Produced by [`Sequence::permutations`]. The last axis varies fastest.
/// Cloning restarts from the clone point.
#[derive(Clone, Debug)]
pub struct Permutations {
    template: BoundTemplate,
    axes: Vec<Vec<Frame>>,
    cursor: Vec<usize>,
    remaining: usize,
}

impl Sequence {
    /// Substitute every combination of the named axes into `template`.
    ///
    /// Each axis is `(name, spec)`; `spec` is parsed like [`Sequence::create`] and
    /// `name` is referenced from the template with the `{name:04d}` grammar.
    ///
    /// ```
    /// use framespec::Sequence;
    ///
    /// let names: Vec<String> = Sequence::permutations(
    ///     "tile_{u}_{v}.{frame:03d}",
    ///     &[("u", "1-2"), ("v", "1"), ("frame", "7")],
    /// )?
    /// .collect();
    /// assert_eq!(names, ["tile_1_1.007", "tile_2_1.007"]);
    /// # Ok::<(), framespec::FrameError>(())
    /// ```
    pub fn permutations(template: &str, axes: &[(&str, &str)]) -> FrameResult<Permutations> {
        let keys: Vec<&str> = axes.iter().map(|(name, _)| *name).collect();
        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                return Err(FrameError::template(format!(
                    "permutation axis '{key}' given twice"
                )));
            }
        }

        let template = Template::parse(template)?.bind(&keys)?;
        let axes = axes
            .iter()
            .map(|(_, spec)| Sequence::create(*spec).map(|s| s.frames().to_vec()))
            .collect::<FrameResult<Vec<_>>>()?;

        let remaining = axes
            .iter()
            .try_fold(1usize, |acc, axis| acc.checked_mul(axis.len()))
            .ok_or_else(|| FrameError::invalid_range("too many permutations"))?;

        Ok(Permutations {
            template,
            cursor: vec![0; axes.len()],
            axes,
            remaining,
        })
    }
}

impl Permutations {
    fn advance(&mut self) {
        for (pos, axis) in self.cursor.iter_mut().zip(&self.axes).rev() {
            *pos += 1;
            if *pos < axis.len() {
                return;
            }
            *pos = 0;
        }
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        let values: Vec<Frame> = self
            .cursor
            .iter()
            .zip(&self.axes)
            .map(|(&pos, axis)| axis[pos])
            .collect();
        self.remaining -= 1;
        self.advance();
        Some(self.template.render(&values))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Permutations {}

impl FusedIterator for Permutations {}

#[cfg(test)]
#[path = "../../tests/unit/expand/permute.rs"]
mod tests;
