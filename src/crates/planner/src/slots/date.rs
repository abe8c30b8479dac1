use regex::Regex;
use std::sync::LazyLock;

pub const DATE_TODAY: &str = "today";
pub const DATE_TOMORROW: &str = "tomorrow";
pub const DATE_UNKNOWN: &str = "unknown";

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b20\d{2}-\d{2}-\d{2}\b").expect("valid date regex"));

/// Date token for a goal: an explicit `YYYY-MM-DD` verbatim, then the
/// relative words 오늘 / 내일, else `unknown`.
///
/// The explicit date is not calendar-checked; `2025-13-40` comes back as-is.
pub fn extract_date_token(goal: &str) -> String {
    if let Some(m) = ISO_DATE.find(goal) {
        return m.as_str().to_string();
    }

    if goal.contains("오늘") {
        DATE_TODAY.to_string()
    } else if goal.contains("내일") {
        DATE_TOMORROW.to_string()
    } else {
        DATE_UNKNOWN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_date_wins_over_relative_words() {
        assert_eq!(extract_date_token("오늘 말고 2025-03-14 회의"), "2025-03-14");
    }

    #[test]
    fn test_relative_words() {
        assert_eq!(extract_date_token("오늘 저녁"), "today");
        assert_eq!(extract_date_token("내일 아침"), "tomorrow");
        assert_eq!(extract_date_token("오늘이나 내일"), "today");
        assert_eq!(extract_date_token("다음주 월요일"), "unknown");
    }

    #[test]
    fn test_date_needs_word_boundary() {
        // Hangul is a word character, so a particle glued to the date hides it
        assert_eq!(extract_date_token("2025-03-14에 회의"), "unknown");
        assert_eq!(extract_date_token("1999-03-14 회의"), "unknown");
    }
}
