use regex::Regex;
use std::sync::LazyLock;

static TITLE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"제목\s*[:=]\s*([^,\n]+)").expect("valid title regex"));

static QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["“”']([^\n\r\t]{2,50})["“”']"#).expect("valid quoted regex")
});

/// Event title: an explicit `제목: …` / `제목=…` marker up to the next comma
/// or newline, else the first quoted run of 2–50 characters
pub fn extract_title(goal: &str) -> Option<String> {
    let caps = TITLE_MARKER
        .captures(goal)
        .or_else(|| QUOTED.captures(goal))?;

    let title = caps[1].trim();
    (!title.is_empty()).then(|| title.to_string())
}
