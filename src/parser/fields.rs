use std::sync::LazyLock;

use regex::Regex;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"###\s*\d+\.\s*(.+)").unwrap());
static DASH_SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"— (.+?) ·").unwrap());
static BOLD_SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"— \*\*(.+?)\*\*").unwrap());
static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"· ([🤖🔒⚙\x{FE0F}🛠💡📝].+?)$").unwrap());
static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"⭐\s*([0-9]+)/30").unwrap());
static REASON_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":\s*(.+)$").unwrap());

pub const MEDALS: &[&str] = &["🥇", "🥈", "🥉"];
pub const CATEGORY_ICONS: &[&str] = &["🤖", "🔒", "⚙\u{FE0F}", "🛠", "💡", "📝"];
const REASON_MARKERS: &[&str] = &["Tại sao nên đọc", "为什么值得读"];

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// Title of a top pick opened by a medal line: the first bold span, else the
/// whole line.
pub fn medal_title(line: &str) -> Option<String> {
    if !MEDALS.iter().any(|m| line.starts_with(m)) {
        return None;
    }
    let title = BOLD_RE
        .captures(line)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| line.to_string());
    Some(title)
}

/// Title of a category article opened by `### N. Title`. A `###` heading
/// without a number yields an empty title.
pub fn numbered_title(line: &str) -> Option<String> {
    if !line.starts_with("### ") {
        return None;
    }
    let title = NUMBERED_RE
        .captures(line)
        .map(|c| c[1].to_string())
        .unwrap_or_default();
    Some(title)
}

pub fn is_link_line(line: &str) -> bool {
    line.starts_with('[') && line.contains("](")
}

pub fn link(line: &str) -> Option<Link> {
    LINK_RE.captures(line).map(|c| Link {
        text: c[1].to_string(),
        url: c[2].to_string(),
    })
}

/// `— source ·` as written on top-pick link lines.
pub fn dash_source(line: &str) -> Option<String> {
    DASH_SOURCE_RE.captures(line).map(|c| c[1].to_string())
}

/// `— **source**` as written on category link lines.
pub fn bold_source(line: &str) -> Option<String> {
    BOLD_SOURCE_RE.captures(line).map(|c| c[1].to_string())
}

/// `· 🤖 AI / ML` up to end of line.
pub fn category(line: &str) -> Option<String> {
    CATEGORY_RE.captures(line).map(|c| c[1].to_string())
}

pub fn summary(line: &str) -> Option<String> {
    line.strip_prefix('>').map(|rest| rest.trim().to_string())
}

pub fn is_reason_line(line: &str) -> bool {
    REASON_MARKERS.iter().any(|m| line.contains(m))
}

/// Text after the first colon of a reason line.
pub fn reason(line: &str) -> Option<String> {
    REASON_RE.captures(line).map(|c| c[1].to_string())
}

/// `⭐ 25/30` → 25. Only ASCII digits are read; digits that overflow `u32`
/// count as no match.
pub fn score(line: &str) -> Option<u32> {
    SCORE_RE.captures(line).and_then(|c| c[1].parse().ok())
}
