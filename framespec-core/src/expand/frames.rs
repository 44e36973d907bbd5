use crate::expand::template::{BoundTemplate, Template};
use crate::foundation::error::{FrameError, FrameResult};
use crate::sequence::model::Sequence;

impl Sequence {
    /// Expand a hash template once per frame.
    ///
    /// Each run of `#` becomes the frame zero-padded to the run's length:
    /// `"image.#####.exr"` over `8-9` gives `image.00008.exr`, `image.00009.exr`.
    pub fn expand(&self, template: &str) -> FrameResult<Vec<String>> {
        let bound = Template::from_hashes(template)
            .ok_or_else(|| {
                FrameError::empty_template(format!("template '{template}' must contain hashes"))
            })?
            .bind(&["frame"])?;
        Ok(self.iter().map(|f| bound.render(&[f])).collect())
    }

    /// Expand `{frame}` placeholders, pairing frames with templates in turn.
    ///
    /// Frame `i` uses `templates[i % templates.len()]`, so one template serves
    /// every frame and `len()` templates give one each. No templates, no output.
    pub fn expand_format<S: AsRef<str>>(&self, templates: &[S]) -> FrameResult<Vec<String>> {
        let bound = templates
            .iter()
            .map(|t| Template::parse(t.as_ref())?.bind(&["frame"]))
            .collect::<FrameResult<Vec<_>>>()?;
        Ok(self.cycle_render(&bound))
    }

    /// Like [`Sequence::expand_format`], also resolving `$F` and `$NF` tokens.
    pub fn expand_dollar_f<S: AsRef<str>>(&self, templates: &[S]) -> FrameResult<Vec<String>> {
        let bound = templates
            .iter()
            .map(|t| Template::parse_dollar_f(t.as_ref())?.bind(&["frame"]))
            .collect::<FrameResult<Vec<_>>>()?;
        Ok(self.cycle_render(&bound))
    }

    fn cycle_render(&self, bound: &[BoundTemplate]) -> Vec<String> {
        if bound.is_empty() {
            return Vec::new();
        }
        self.iter()
            .zip(bound.iter().cycle())
            .map(|(f, t)| t.render(&[f]))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expand/frames.rs"]
mod tests;
