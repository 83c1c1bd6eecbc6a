//! Plain-text binding used by the command line.

use std::fmt::Write;

use crate::render::{Card, CardList};

pub const FAVORITE_MARK: &str = "★";

/// One block per card, separated by blank lines.
pub fn render_text(list: &CardList) -> String {
    let mut out = String::new();
    for (i, card) in list.cards.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_card(&mut out, card);
    }
    out
}

fn write_card(out: &mut String, card: &Card) {
    let mark = if card.favorite.active { FAVORITE_MARK } else { " " };
    let _ = writeln!(out, "{} [{}] {}", mark, card.record_id(), card.title);
    for line in card.body_lines() {
        let _ = writeln!(out, "    {}", line);
    }
    if let Some(link) = &card.link {
        let _ = writeln!(out, "    Link: {}", link.href);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FavoriteSet, Record};
    use crate::render::render;

    #[test]
    fn test_text_layout() {
        let records = vec![
            Record {
                title: Some("Wall".into()),
                author: Some("A".into()),
                ..Record::new(1)
            },
            Record {
                link: Some("https://example.com".into()),
                ..Record::new(2)
            },
        ];
        let out = render_text(&render(&records, &FavoriteSet::from(vec![2])));
        assert_eq!(
            out,
            "  [1] Wall\n    By: A\n\n★ [2] Untitled\n    Link: https://example.com\n"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_text(&CardList::default()), "");
    }
}
