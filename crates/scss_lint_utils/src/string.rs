use std::sync::LazyLock;

use regex::Regex;

static QUOTED_STRING: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#""[^"]*"|'[^']*'"#).unwrap());

/// Remove every quoted string from `value`, quotes included.
///
/// Takes `hello "world" 'how are' you` and turns it into `hello   you`. This
/// lets rules scan shorthand properties or lists for keywords without
/// matching inside strings (the color keyword `red`, not the string `"red"`).
///
/// An opening quote with no closing quote after it is left as-is.
pub fn remove_quoted_strings(value: &str) -> String {
  QUOTED_STRING.replace_all(value, "").into_owned()
}

/// Strip one pair of matching surrounding quotes, if there is one.
pub fn strip_quotes(value: &str) -> &str {
  for quote in ['"', '\''] {
    if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
      return &value[1..value.len() - 1];
    }
  }

  value
}
