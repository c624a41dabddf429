use crate::digest::TopPick;
use crate::parser::fields;

/// Update an open top pick from one line. Field families are tried in order:
/// link line, blockquote, reason, rating. Only the first family that claims
/// the line is applied.
pub fn apply(pick: &mut TopPick, line: &str) {
    if fields::is_link_line(line) {
        if let Some(link) = fields::link(line) {
            pick.title = link.text;
            pick.link = link.url;
        }
        if let Some(source) = fields::dash_source(line) {
            pick.source = source;
        }
        if let Some(category) = fields::category(line) {
            pick.category = category;
        }
    } else if let Some(summary) = fields::summary(line) {
        pick.summary = summary;
    } else if fields::is_reason_line(line) {
        if let Some(reason) = fields::reason(line) {
            pick.reason = reason;
        }
    } else if let Some(score) = fields::score(line) {
        pick.score = score;
    }
}
