//! `<token>` substitution for job-level command strings.

use std::collections::BTreeMap;

use crate::foundation::error::{FrameError, FrameResult};

/// Substitutes `<token>` occurrences from a fixed context.
///
/// Tokens are a lowercase letter followed by lowercase letters or underscores.
/// `<<` is a literal `<`. Any other `<` is an error, as is a token missing from
/// the context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expander {
    context: BTreeMap<String, String>,
}

impl Expander {
    /// An expander with an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one token value.
    pub fn insert(&mut self, token: impl Into<String>, value: impl ToString) -> &mut Self {
        self.context.insert(token.into(), value.to_string());
        self
    }

    /// Token values by name.
    pub fn context(&self) -> &BTreeMap<String, String> {
        &self.context
    }

    /// Expand one string after trimming surrounding whitespace.
    pub fn evaluate_item(&self, item: &str) -> FrameResult<String> {
        let src = item.trim();
        let mut out = String::with_capacity(src.len());
        let mut rest = src;

        while let Some(open) = rest.find('<') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            if let Some(tail) = after.strip_prefix('<') {
                out.push('<');
                rest = tail;
                continue;
            }
            let token = after
                .find('>')
                .map(|close| &after[..close])
                .filter(|t| is_token(t))
                .ok_or_else(|| {
                    let at = src.len() - rest.len() + open;
                    FrameError::template(format!("invalid placeholder at byte {at} in '{src}'"))
                })?;
            let value = self.context.get(token).ok_or_else(|| {
                FrameError::template(format!(
                    "unknown token '<{token}>', valid tokens are: {}",
                    self.valid_tokens()
                ))
            })?;
            out.push_str(value);
            rest = &after[token.len() + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Expand each item of a list.
    pub fn evaluate_list<S: AsRef<str>>(&self, items: &[S]) -> FrameResult<Vec<String>> {
        items
            .iter()
            .map(|item| self.evaluate_item(item.as_ref()))
            .collect()
    }

    /// Expand every value of a map; keys are kept as they are.
    pub fn evaluate_map<K, S>(&self, items: &BTreeMap<K, S>) -> FrameResult<BTreeMap<K, String>>
    where
        K: Clone + Ord,
        S: AsRef<str>,
    {
        items
            .iter()
            .map(|(k, v)| Ok((k.clone(), self.evaluate_item(v.as_ref())?)))
            .collect()
    }

    fn valid_tokens(&self) -> String {
        self.context
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Expander {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut expander = Self::new();
        expander.extend(iter);
        expander
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for Expander {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

fn is_token(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c == '_')
}

#[cfg(test)]
#[path = "../../tests/unit/expand/tokens.rs"]
mod tests;
