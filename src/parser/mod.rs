pub mod extract;
pub mod fields;
pub mod sections;

use crate::digest::Digest;
use extract::Scanner;

/// One forward scan: every line is classified for section markers, then fed
/// to whichever record builders its section enables.
pub fn parse_digest(markdown: &str, generated_at: &str) -> Digest {
    let mut scanner = Scanner::new();
    for line in markdown.lines() {
        scanner.feed(line);
    }
    scanner.finish(generated_at)
}

// ── Tests ──
