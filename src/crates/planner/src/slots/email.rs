use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

/// First e-mail shaped address in the goal
pub fn extract_email(goal: &str) -> Option<String> {
    EMAIL.find(goal).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_address_wins() {
        assert_eq!(
            extract_email("a.kim+rag@lab.example.ac.kr 그리고 b@example.com 에게").as_deref(),
            Some("a.kim+rag@lab.example.ac.kr")
        );
    }

    #[test]
    fn test_address_glued_to_hangul() {
        assert_eq!(
            extract_email("me@example.com으로 보내줘").as_deref(),
            Some("me@example.com")
        );
    }

    #[test]
    fn test_no_address() {
        assert_eq!(extract_email("메일로 보내줘"), None);
        assert_eq!(extract_email("user@localhost"), None);
    }
}
