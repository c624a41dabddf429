use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::digest::Digest;
use crate::error::{DigestError, Result};

/// Pretty JSON with two-space indent. Non-ASCII text is written as-is.
pub fn to_json(digest: &Digest) -> Result<String> {
    Ok(serde_json::to_string_pretty(digest)?)
}

/// Write `json` plus a trailing newline to `path`, or to stdout when `None`.
pub fn write(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{json}\n")).map_err(|source| DigestError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{json}")
                .and_then(|_| out.flush())
                .map_err(|source| DigestError::Write {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{Article, TopPick};
    use pretty_assertions::assert_eq;

    #[test]
    fn pretty_json_keeps_unicode() {
        let mut digest = Digest {
            generated_at: "2026-10-16".into(),
            highlights: "Điểm nổi bật".into(),
            ..Default::default()
        };
        let mut pick = TopPick::titled("Chạy LLM".into());
        pick.score = 28;
        digest.top_picks.push(pick);
        digest.categories.register("🔒 Bảo mật");
        digest
            .categories
            .push("🤖 AI / ML", Article::titled("Mô hình".into()));

        let expected = r#"{
  "generatedAt": "2026-10-16",
  "highlights": "Điểm nổi bật",
  "topPicks": [
    {
      "title": "Chạy LLM",
      "titleVi": "Chạy LLM",
      "link": "",
      "source": "",
      "category": "",
      "score": 28,
      "summary": "",
      "reason": ""
    }
  ],
  "categories": {
    "🔒 Bảo mật": [],
    "🤖 AI / ML": [
      {
        "title": "Mô hình",
        "titleVi": "Mô hình",
        "link": "",
        "source": "",
        "score": 0,
        "summary": ""
      }
    ]
  }
}"#;
        assert_eq!(to_json(&digest).unwrap(), expected);
    }

    #[test]
    fn write_to_file_adds_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digest.json");
        write("{}", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("digest.json");
        let err = write("{}", Some(&path)).unwrap_err();
        assert!(matches!(err, DigestError::Write { .. }));
    }
}
