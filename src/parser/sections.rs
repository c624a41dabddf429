use super::fields::CATEGORY_ICONS;

/// A line that opens a new section of the digest.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    Highlights,
    TopPicks,
    Overview,
    Category(String),
}

/// Which section's content rules apply to the lines being read. Independent
/// of the current category label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Neutral,
    Highlights,
    TopPicks,
}

/// Classify a trimmed line as a section marker. Checked in fixed order:
/// highlights, top picks, overview, category.
pub fn detect_marker(line: &str) -> Option<Marker> {
    if line.contains("## 📝") || line.contains("Điểm nổi bật") {
        return Some(Marker::Highlights);
    }
    if line.contains("## 🏆") || line.contains("Bài đọc tiêu biểu") {
        return Some(Marker::TopPicks);
    }
    if line.starts_with("## 📊") || line.contains("Tổng quan") {
        return Some(Marker::Overview);
    }
    if line.starts_with("## ") && CATEGORY_ICONS.iter().any(|icon| line.contains(icon)) {
        let label = line.replace("## ", "").trim().to_string();
        return Some(Marker::Category(label));
    }
    None
}

impl Marker {
    pub fn mode(&self) -> Mode {
        match self {
            Marker::Highlights => Mode::Highlights,
            Marker::TopPicks => Mode::TopPicks,
            Marker::Overview | Marker::Category(_) => Mode::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_by_icon_or_phrase() {
        assert_eq!(detect_marker("## 📝 Điểm nổi bật hôm nay"), Some(Marker::Highlights));
        assert_eq!(detect_marker("### Điểm nổi bật"), Some(Marker::Highlights));
    }

    #[test]
    fn top_picks_by_icon_or_phrase() {
        assert_eq!(detect_marker("## 🏆 Bài đọc tiêu biểu"), Some(Marker::TopPicks));
        assert_eq!(detect_marker("## Bài đọc tiêu biểu"), Some(Marker::TopPicks));
    }

    #[test]
    fn overview_needs_prefix_or_phrase() {
        assert_eq!(detect_marker("## 📊 Tổng quan dữ liệu"), Some(Marker::Overview));
        assert_eq!(detect_marker("## 📊 Stats"), Some(Marker::Overview));
        assert_eq!(detect_marker("Some text 📊"), None);
    }

    #[test]
    fn category_label_strips_heading() {
        assert_eq!(
            detect_marker("## 🤖 AI / ML"),
            Some(Marker::Category("🤖 AI / ML".into()))
        );
        assert_eq!(
            detect_marker("## ⚙️ Kỹ thuật"),
            Some(Marker::Category("⚙️ Kỹ thuật".into()))
        );
    }

    #[test]
    fn category_requires_level_two_heading() {
        assert_eq!(detect_marker("### 🤖 Not a category"), None);
        assert_eq!(detect_marker("🤖 AI / ML"), None);
        assert_eq!(detect_marker("## Plain heading"), None);
    }

    #[test]
    fn note_icon_heading_opens_highlights() {
        // The highlights check runs first, so 📝 never reaches the category rule.
        assert_eq!(detect_marker("## 📝 Khác"), Some(Marker::Highlights));
    }

    #[test]
    fn plain_lines_are_not_markers() {
        assert_eq!(detect_marker(""), None);
        assert_eq!(detect_marker("---"), None);
        assert_eq!(detect_marker("[Title](https://x.test)"), None);
    }

    #[test]
    fn marker_modes() {
        assert_eq!(Marker::Highlights.mode(), Mode::Highlights);
        assert_eq!(Marker::TopPicks.mode(), Mode::TopPicks);
        assert_eq!(Marker::Overview.mode(), Mode::Neutral);
        assert_eq!(Marker::Category("x".into()).mode(), Mode::Neutral);
    }
}
