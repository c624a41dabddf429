/// Free text collected from the highlights section.
#[derive(Debug, Default)]
pub struct Highlights {
    text: String,
}

impl Highlights {
    /// Appends `line` unless it is blank, a heading, or a horizontal rule.
    pub fn push(&mut self, line: &str) {
        if line.is_empty() || line.starts_with('#') || line.starts_with("---") {
            return;
        }
        self.text.push_str(line);
        self.text.push(' ');
    }

    pub fn finish(self) -> String {
        self.text.trim().to_string()
    }
}
