use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Digest {
    pub generated_at: String,
    pub highlights: String,
    pub top_picks: Vec<TopPick>,
    pub categories: Categories,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPick {
    pub title: String,
    pub title_vi: String,
    pub link: String,
    pub source: String,
    pub category: String,
    pub score: u32,
    pub summary: String,
    pub reason: String,
}

impl TopPick {
    pub fn titled(title: String) -> Self {
        Self {
            title_vi: title.clone(),
            title,
            ..Default::default()
        }
    }
}

/// An article listed under a category heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub title_vi: String,
    pub link: String,
    pub source: String,
    pub score: u32,
    pub summary: String,
}

impl Article {
    pub fn titled(title: String) -> Self {
        Self {
            title_vi: title.clone(),
            title,
            ..Default::default()
        }
    }
}

/// Category label → articles, kept in the order headings were first seen.
///
/// Serialises as a JSON object. A digest has a handful of categories, so
/// lookups are linear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categories {
    entries: Vec<(String, Vec<Article>)>,
}

impl Categories {
    /// Adds `label` with an empty list. Existing entries keep their articles.
    pub fn register(&mut self, label: &str) {
        if self.get(label).is_none() {
            self.entries.push((label.to_string(), Vec::new()));
        }
    }

    pub fn push(&mut self, label: &str, article: Article) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, articles)) => articles.push(article),
            None => self.entries.push((label.to_string(), vec![article])),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[Article]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, articles)| articles.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn article_count(&self) -> usize {
        self.entries.iter().map(|(_, a)| a.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, articles) in &self.entries {
            map.serialize_entry(label, articles)?;
        }
        map.end()
    }
}
