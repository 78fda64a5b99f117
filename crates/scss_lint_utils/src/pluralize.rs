/// Format `count` followed by `noun`, adding an `s` unless the count is one.
pub fn pluralize(count: i64, noun: &str) -> String {
  if count == 1 {
    format!("{} {}", count, noun)
  } else {
    format!("{} {}s", count, noun)
  }
}
