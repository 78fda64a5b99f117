use std::sync::LazyLock;

use regex::Regex;

static HEX_COLOR: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^#(?:[[:xdigit:]]{3}|[[:xdigit:]]{6})$").unwrap());

// `regex` has no lookahead, `\b` after the last digit rejects `#abcd` and `#fffg`.
static HEX_COLOR_IN_VALUE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"#(?:[[:xdigit:]]{6}|[[:xdigit:]]{3})\b").unwrap());

/// Return the shortest equivalent way of writing `hex`, lower-cased.
///
/// `#ff0066` becomes `#f06`. Anything that can't be condensed (see
/// [`can_be_condensed`]) is only lower-cased.
pub fn shortest_hex_form(hex: &str) -> String {
  if !can_be_condensed(hex) {
    return hex.to_lowercase();
  }

  let short: String = hex
    .chars()
    .enumerate()
    .filter(|(index, _)| matches!(index, 0 | 2 | 4 | 6))
    .map(|(_, ch)| ch)
    .collect();

  tracing::trace!(%hex, %short, "Condensed hex color");
  short.to_lowercase()
}

/// Check whether a `#rrggbb` color is made of three doubled digits.
///
/// This is a structural check on the characters only: the digits are not
/// validated and the comparison is case-sensitive.
pub fn can_be_condensed(hex: &str) -> bool {
  let chars: Vec<char> = hex.chars().collect();
  let [_, r1, r2, g1, g2, b1, b2] = chars.as_slice() else {
    return false;
  };

  r1 == r2 && g1 == g2 && b1 == b2
}

/// Whether `value` is exactly a `#rgb` or `#rrggbb` color literal.
pub fn is_hex_color(value: &str) -> bool {
  HEX_COLOR.is_match(value)
}

/// All hex color literals appearing in `value`, left to right.
///
/// Quoted strings are not skipped, mask them with
/// [`crate::remove_quoted_strings`] first if that matters.
pub fn find_hex_colors(value: &str) -> Vec<&str> {
  HEX_COLOR_IN_VALUE
    .find_iter(value)
    .map(|found| found.as_str())
    .collect()
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn test_shortest_hex_form() {
    assert_eq!(shortest_hex_form("#ff0066"), "#f06");
    assert_eq!(shortest_hex_form("#ff0067"), "#ff0067");
    assert_eq!(shortest_hex_form("#FFFFFF"), "#fff");
    assert_eq!(shortest_hex_form("#ABCDEF"), "#abcdef");
  }

  #[test]
  fn test_shortest_hex_form_passes_through_other_lengths() {
    assert_eq!(shortest_hex_form("#F06"), "#f06");
    assert_eq!(shortest_hex_form("#ff00661"), "#ff00661");
    assert_eq!(shortest_hex_form(""), "");
  }

  #[test]
  fn test_shortest_hex_form_does_not_validate_digits() {
    assert_eq!(shortest_hex_form("#zzyyxx"), "#zyx");
    assert_eq!(shortest_hex_form("RED"), "red");
  }

  #[test]
  fn test_shortest_hex_form_is_stable_once_short() {
    let once = shortest_hex_form("#AA33cc");
    assert_eq!(once, "#a3c");
    assert_eq!(shortest_hex_form(&once), once);
  }

  #[test]
  fn test_can_be_condensed() {
    assert!(can_be_condensed("#ff0066"));
    assert!(can_be_condensed("#000000"));
    assert!(!can_be_condensed("#ff0067"));
    assert!(!can_be_condensed("#f06"));
    assert!(!can_be_condensed("#ff00660"));
  }

  #[test]
  fn test_can_be_condensed_is_case_sensitive() {
    assert!(!can_be_condensed("#Ff0066"));
    assert!(can_be_condensed("#FF0066"));
  }

  #[test]
  fn test_can_be_condensed_counts_characters() {
    assert!(can_be_condensed("#ééaabb"));
    assert!(!can_be_condensed("#é0066"));
  }

  #[test]
  fn test_condensable_iff_short_form_has_four_characters() {
    for hex in ["#ff0066", "#ff0067", "#123456", "#112233", "#aabbcd"] {
      assert_eq!(
        can_be_condensed(hex),
        shortest_hex_form(hex).chars().count() == 4,
        "{hex}"
      );
    }
  }

  #[test]
  fn test_is_hex_color() {
    assert!(is_hex_color("#fff"));
    assert!(is_hex_color("#A1B2C3"));
    assert!(!is_hex_color("#ffff"));
    assert!(!is_hex_color("#ggg"));
    assert!(!is_hex_color("fff"));
    assert!(!is_hex_color("#fff "));
  }

  #[test]
  fn test_find_hex_colors() {
    assert_eq!(
      find_hex_colors("1px solid #FFF, #a1b2c3 #abcd #fffg #123"),
      vec!["#FFF", "#a1b2c3", "#123"]
    );
    assert!(find_hex_colors("red").is_empty());
  }
}
