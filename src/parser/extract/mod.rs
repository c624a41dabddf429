pub mod articles;
pub mod highlights;
pub mod top_picks;

use tracing::debug;

use super::fields;
use super::sections::{self, Marker, Mode};
use crate::digest::{Article, Categories, Digest, TopPick};
use highlights::Highlights;

/// The single record being filled in, tagged with where it goes when closed.
#[derive(Debug)]
enum OpenRecord {
    TopPick(TopPick),
    Article { category: String, article: Article },
}

/// Single forward pass over the digest lines.
///
/// Section mode and the current category are tracked separately: a category
/// heading stays current through later highlights or top-pick sections. At
/// most one record is open at a time. Section markers leave it open; it is
/// closed into its own destination when the next record starts or in
/// [`Scanner::finish`].
#[derive(Debug, Default)]
pub struct Scanner {
    mode: Mode,
    category: Option<String>,
    open: Option<OpenRecord>,
    highlights: Highlights,
    top_picks: Vec<TopPick>,
    categories: Categories,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some(marker) = sections::detect_marker(line) {
            self.enter(marker);
            return;
        }

        if self.mode == Mode::Highlights {
            self.highlights.push(line);
        }
        if self.mode == Mode::TopPicks {
            self.top_pick_line(line);
        }
        if self.category.is_some() {
            self.article_line(line);
        }
    }

    pub fn finish(mut self, generated_at: &str) -> Digest {
        self.close_open();
        Digest {
            generated_at: generated_at.to_string(),
            highlights: self.highlights.finish(),
            top_picks: self.top_picks,
            categories: self.categories,
        }
    }

    fn enter(&mut self, marker: Marker) {
        self.mode = marker.mode();
        debug!(?marker, mode = ?self.mode, "section");
        if let Marker::Category(label) = marker {
            self.categories.register(&label);
            self.category = Some(label);
        }
    }

    fn top_pick_line(&mut self, line: &str) {
        if let Some(title) = fields::medal_title(line) {
            self.close_open();
            self.open = Some(OpenRecord::TopPick(TopPick::titled(title)));
        } else if let Some(OpenRecord::TopPick(pick)) = &mut self.open {
            top_picks::apply(pick, line);
        }
    }

    fn article_line(&mut self, line: &str) {
        let Some(category) = self.category.as_ref() else {
            return;
        };
        if let Some(title) = fields::numbered_title(line) {
            let category = category.clone();
            self.close_open();
            self.open = Some(OpenRecord::Article {
                category,
                article: Article::titled(title),
            });
        } else if let Some(OpenRecord::Article { article, .. }) = &mut self.open {
            articles::apply(article, line);
        }
    }

    fn close_open(&mut self) {
        match self.open.take() {
            Some(OpenRecord::TopPick(pick)) => {
                debug!(title = %pick.title, "top pick closed");
                self.top_picks.push(pick);
            }
            Some(OpenRecord::Article { category, article }) => {
                debug!(%category, title = %article.title, "article closed");
                self.categories.push(&category, article);
            }
            None => {}
        }
    }
}
