use crate::digest::Article;
use crate::parser::fields;

/// Update an open category article from one line. Link lines carry the
/// link, the bold source and usually the rating; a blockquote is the
/// summary; a rating may also stand on its own line.
pub fn apply(article: &mut Article, line: &str) {
    if fields::is_link_line(line) {
        if let Some(link) = fields::link(line) {
            article.title = link.text;
            article.link = link.url;
        }
        if let Some(source) = fields::bold_source(line) {
            article.source = source;
        }
        if let Some(score) = fields::score(line) {
            article.score = score;
        }
    } else if let Some(summary) = fields::summary(line) {
        article.summary = summary;
    } else if let Some(score) = fields::score(line) {
        article.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(lines: &[&str]) -> Article {
        let mut article = Article::titled("Tiêu đề".into());
        for line in lines {
            apply(&mut article, line);
        }
        article
    }

    #[test]
    fn byline_fields() {
        let a = build(&[
            "[English Title](https://a.test/post) — **a.test** · 3 giờ trước · ⭐ 22/30",
            "> Tóm tắt ngắn.",
        ]);
        assert_eq!(a.title, "English Title");
        assert_eq!(a.title_vi, "Tiêu đề");
        assert_eq!(a.link, "https://a.test/post");
        assert_eq!(a.source, "a.test");
        assert_eq!(a.score, 22);
        assert_eq!(a.summary, "Tóm tắt ngắn.");
    }

    #[test]
    fn standalone_rating_line() {
        assert_eq!(build(&["⭐ 18/30"]).score, 18);
    }

    #[test]
    fn plain_source_not_taken() {
        // Category bylines bold the source; the top-pick form is ignored here.
        let a = build(&["[T](https://a.test) — a.test · 1 giờ trước"]);
        assert!(a.source.is_empty());
    }

    #[test]
    fn unrelated_lines_ignored() {
        let a = build(&["🏷️ Rust, Compilers", "---", "random text"]);
        assert_eq!(a, Article::titled("Tiêu đề".into()));
    }
}
