use serde::{Deserialize, Serialize};

/// One element of a parsed selector.
///
/// The parser splits a selector such as `.selector-#{$var}-two` into literal
/// text and interpolated expressions. The expression itself cannot be
/// resolved at lint time, so it is kept only as a marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum SelectorToken {
  Literal(String),
  Interpolation,
}

impl SelectorToken {
  pub fn literal(text: impl Into<String>) -> Self {
    Self::Literal(text.into())
  }

  pub fn is_interpolation(&self) -> bool {
    matches!(self, Self::Interpolation)
  }
}

/// Return the selector words of `tokens` with interpolation removed.
///
/// Literal fragments are joined with no separator and the result is split on
/// ASCII whitespace, so `.selector-#{$var}-two` becomes `.selector--two`.
/// This is an approximation for rules that want to ignore interpolation.
///
/// Vertical tab counts as whitespace, no-break and other Unicode spaces do not.
pub fn extract_string_selectors(tokens: &[SelectorToken]) -> Vec<String> {
  let joined: String = tokens
    .iter()
    .filter_map(|token| match token {
      SelectorToken::Literal(text) => Some(text.as_str()),
      SelectorToken::Interpolation => None,
    })
    .collect();

  joined
    .split(is_selector_whitespace)
    .filter(|fragment| !fragment.is_empty())
    .map(String::from)
    .collect()
}

fn is_selector_whitespace(ch: char) -> bool {
  ch.is_ascii_whitespace() || ch == '\x0b'
}
