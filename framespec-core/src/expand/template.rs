//! Placeholder templates shared by the frame expansion helpers.
//!
//! Grammar: `{name}`, `{name:d}`, `{name:Nd}` (space padded) and `{name:0Nd}`
//! (zero padded); `{{` and `}}` are literal braces. `#` runs and `$F` tokens are
//! lowered onto the same segments.

use crate::foundation::core::Frame;
use crate::foundation::error::{FrameError, FrameResult};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment<K> {
    Literal(String),
    Field { key: K, pad: Pad },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Pad {
    width: usize,
    zero: bool,
}

impl Pad {
    fn write(self, out: &mut String, value: Frame) {
        use std::fmt::Write as _;
        let width = self.width;
        // Writing into a String cannot fail.
        let _ = if self.zero {
            write!(out, "{value:0width$}")
        } else {
            write!(out, "{value:>width$}")
        };
    }
}

/// A parsed template whose fields are still named.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Template {
    segments: Vec<Segment<String>>,
}

/// A template whose fields are resolved to value slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BoundTemplate {
    segments: Vec<Segment<usize>>,
}

impl Template {
    /// Parse the brace grammar.
    pub(crate) fn parse(src: &str) -> FrameResult<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = src.char_indices().peekable();

        while let Some((at, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|(_, n)| *n == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().is_some_and(|(_, n)| *n == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let body_start = at + 1;
                    let close = src[body_start..].find('}').ok_or_else(|| {
                        FrameError::template(format!("unclosed '{{' at byte {at} in '{src}'"))
                    })?;
                    let body = &src[body_start..body_start + close];
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(parse_field(body, src)?);
                    while chars.peek().is_some_and(|(i, _)| *i <= body_start + close) {
                        chars.next();
                    }
                }
                '}' => {
                    return Err(FrameError::template(format!(
                        "single '}}' at byte {at} in '{src}'"
                    )));
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    /// Replace every run of `#` with a zero-padded `frame` field of the run's
    /// length. `None` when there is no `#`.
    pub(crate) fn from_hashes(src: &str) -> Option<Self> {
        let mut segments = Vec::new();
        let mut rest = src;
        while let Some(start) = rest.find('#') {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let run = rest[start..].bytes().take_while(|b| *b == b'#').count();
            segments.push(Segment::Field {
                key: "frame".to_string(),
                pad: Pad {
                    width: run,
                    zero: true,
                },
            });
            rest = &rest[start + run..];
        }
        if segments.is_empty() {
            return None;
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }
        Some(Self { segments })
    }

    /// Rewrite `$F` and `$NF` (N a single digit) into `frame` fields, then parse
    /// the result with the brace grammar.
    pub(crate) fn parse_dollar_f(src: &str) -> FrameResult<Self> {
        let bytes = src.as_bytes();
        let mut rewritten = String::with_capacity(src.len());
        let mut i = 0;
        let mut copied = 0;
        while i < bytes.len() {
            if bytes[i] != b'$' {
                i += 1;
                continue;
            }
            let (digit, f_at) = match bytes.get(i + 1) {
                Some(d) if d.is_ascii_digit() => (Some(*d), i + 2),
                _ => (None, i + 1),
            };
            if bytes.get(f_at) != Some(&b'F') {
                i += 1;
                continue;
            }
            rewritten.push_str(&src[copied..i]);
            match digit {
                Some(d) => {
                    rewritten.push_str("{frame:0");
                    rewritten.push(d as char);
                    rewritten.push_str("d}");
                }
                None => rewritten.push_str("{frame}"),
            }
            i = f_at + 1;
            copied = i;
        }
        rewritten.push_str(&src[copied..]);
        Self::parse(&rewritten)
    }

    /// Resolve field names against `keys`; the slot is the key's index.
    pub(crate) fn bind(&self, keys: &[&str]) -> FrameResult<BoundTemplate> {
        let segments = self
            .segments
            .iter()
            .map(|seg| match seg {
                Segment::Literal(s) => Ok(Segment::Literal(s.clone())),
                Segment::Field { key, pad } => keys
                    .iter()
                    .position(|k| *k == key.as_str())
                    .map(|slot| Segment::Field { key: slot, pad: *pad })
                    .ok_or_else(|| {
                        FrameError::template(format!(
                            "unknown placeholder '{{{key}}}', expected one of {keys:?}"
                        ))
                    }),
            })
            .collect::<FrameResult<Vec<_>>>()?;
        Ok(BoundTemplate { segments })
    }
}

impl BoundTemplate {
    /// Render with one value per bound key, in key order.
    pub(crate) fn render(&self, values: &[Frame]) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Literal(s) => out.push_str(s),
                Segment::Field { key, pad } => {
                    if let Some(v) = values.get(*key) {
                        pad.write(&mut out, *v);
                    }
                }
            }
        }
        out
    }
}

fn parse_field(body: &str, src: &str) -> FrameResult<Segment<String>> {
    let bad = || FrameError::template(format!("bad placeholder '{{{body}}}' in '{src}'"));

    let (name, spec) = match body.split_once(':') {
        Some((name, spec)) => (name, spec),
        None => (body, ""),
    };
    let mut name_chars = name.chars();
    let valid_name = name_chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name_chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_name {
        return Err(bad());
    }

    let spec = spec.strip_suffix('d').unwrap_or(spec);
    let (zero, digits) = match spec.strip_prefix('0') {
        Some(rest) => (true, rest),
        None => (false, spec),
    };
    let width = if digits.is_empty() {
        0
    } else {
        digits.parse::<usize>().map_err(|_| bad())?
    };

    Ok(Segment::Field {
        key: name.to_string(),
        pad: Pad { width, zero },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/expand/template.rs"]
mod tests;
