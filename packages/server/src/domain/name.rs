//! Display name validation.

use std::fmt;

use super::error::NameError;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Check whether `candidate` is an acceptable display name.
///
/// A name must not be empty or whitespace only, and may contain only ASCII
/// letters, digits, underscore and hyphen. There is no length limit.
pub fn is_valid_name(candidate: &str) -> bool {
    UserName::check(candidate).is_ok()
}

/// Validated display name of a chat user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName, rejecting invalid names
    pub fn new(value: String) -> Result<Self, NameError> {
        Self::check(&value)?;
        Ok(Self(value))
    }

    fn check(value: &str) -> Result<(), NameError> {
        if value.trim().is_empty() {
            return Err(NameError::Empty);
        }
        match value.chars().find(|c| !is_name_char(*c)) {
            Some(c) => Err(NameError::InvalidCharacter(c)),
            None => Ok(()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for the uniqueness rule
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl TryFrom<String> for UserName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_name_accepts_allowed_characters() {
        // テスト項目: 英数字・アンダースコア・ハイフンのみの名前が受け付けられる
        // given (前提条件):
        let names = ["alice", "Bob42", "snake_case", "kebab-case", "_", "-", "007"];

        // when (操作):
        let results: Vec<bool> = names.iter().map(|n| is_valid_name(n)).collect();

        // then (期待する結果):
        assert!(results.iter().all(|ok| *ok));
    }

    #[test]
    fn test_is_valid_name_rejects_empty_and_whitespace() {
        // テスト項目: 空文字列と空白のみの名前が拒否される
        // given (前提条件):
        let names = ["", " ", "\t", "   \n"];

        // when (操作):
        let results: Vec<bool> = names.iter().map(|n| is_valid_name(n)).collect();

        // then (期待する結果):
        assert!(results.iter().all(|ok| !ok));
    }

    #[test]
    fn test_is_valid_name_rejects_other_characters() {
        // テスト項目: 許可されていない文字を含む名前が拒否される
        // given (前提条件):
        let names = ["al ice", "bob!", "名前", "café", "a.b", "tab\tname", "x\n"];

        // when (操作):
        let results: Vec<bool> = names.iter().map(|n| is_valid_name(n)).collect();

        // then (期待する結果):
        assert!(results.iter().all(|ok| !ok));
    }

    #[test]
    fn test_is_valid_name_has_no_length_limit() {
        // テスト項目: 長い名前でも文字種が正しければ受け付けられる
        // given (前提条件):
        let name = "a".repeat(4096);

        // when (操作):
        let result = is_valid_name(&name);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_user_name_reports_reason() {
        // テスト項目: UserName::new が拒否理由を返す
        // given (前提条件):

        // when (操作):
        let empty = UserName::new("  ".to_string());
        let invalid = UserName::new("bob!".to_string());

        // then (期待する結果):
        assert_eq!(empty, Err(NameError::Empty));
        assert_eq!(invalid, Err(NameError::InvalidCharacter('!')));
    }

    #[test]
    fn test_user_name_matches_case_insensitively() {
        // テスト項目: 大文字小文字を区別せずに名前が一致する
        // given (前提条件):
        let name = UserName::try_from("Alice").unwrap();

        // when (操作):

        // then (期待する結果):
        assert!(name.matches("alice"));
        assert!(name.matches("ALICE"));
        assert!(!name.matches("alice2"));
        assert_eq!(name.to_string(), "Alice");
    }
}
