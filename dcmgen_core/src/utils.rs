/// Removes all whitespace and padding characters from the end of a string
/// slice.
///
pub fn trim_end_whitespace(s: &str) -> &str {
  s.trim_end_matches([' ', '\0'])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trim_end_whitespace_test() {
    assert_eq!(trim_end_whitespace("20240101 "), "20240101");
    assert_eq!(trim_end_whitespace("1.2.3\0"), "1.2.3");
    assert_eq!(trim_end_whitespace(" abc"), " abc");
  }
}
