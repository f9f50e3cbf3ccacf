//! # ChatTarget Value Object
//!
//! 送信先の識別子

use std::fmt;

/// 送信先
///
/// 数値として解釈できる値は `Id`、それ以外（`@channel` など）は `Username` として保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTarget {
    Id(i64),
    Username(String),
}

impl ChatTarget {
    /// 生の文字列から送信先を解釈する
    ///
    /// 前後の空白は数値の解釈時のみ無視する（`Username` には元の値をそのまま残す）。
    /// 数値として解釈できない場合もエラーにはならない。
    ///
    /// ```
    /// use build_publisher::domain::entities::ChatTarget;
    ///
    /// assert_eq!(ChatTarget::parse("12345"), ChatTarget::Id(12345));
    /// assert_eq!(
    ///     ChatTarget::parse("@mychannel"),
    ///     ChatTarget::Username("@mychannel".to_string())
    /// );
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(id) => ChatTarget::Id(id),
            Err(_) => ChatTarget::Username(raw.to_string()),
        }
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatTarget::Id(id) => write!(f, "{}", id),
            ChatTarget::Username(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(ChatTarget::parse("12345"), ChatTarget::Id(12345));
    }

    #[test]
    fn test_parse_negative_supergroup_id() {
        assert_eq!(
            ChatTarget::parse("-1001234567890"),
            ChatTarget::Id(-1001234567890)
        );
    }

    #[test]
    fn test_parse_username_kept_verbatim() {
        assert_eq!(
            ChatTarget::parse("@mychannel"),
            ChatTarget::Username("@mychannel".to_string())
        );
    }

    #[test]
    fn test_parse_numeric_with_surrounding_whitespace() {
        assert_eq!(ChatTarget::parse(" 12345\n"), ChatTarget::Id(12345));
        assert_eq!(ChatTarget::parse("-100123\n"), ChatTarget::Id(-100123));
    }

    #[test]
    fn test_parse_username_keeps_whitespace() {
        assert_eq!(
            ChatTarget::parse("@mychannel\n"),
            ChatTarget::Username("@mychannel\n".to_string())
        );
    }

    #[test]
    fn test_parse_empty_is_username() {
        assert_eq!(ChatTarget::parse(""), ChatTarget::Username(String::new()));
    }

    #[test]
    fn test_display() {
        assert_eq!(ChatTarget::Id(-42).to_string(), "-42");
        assert_eq!(ChatTarget::parse("@ch").to_string(), "@ch");
    }
}
