//! Static HTML page binding for a [`CardList`].

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::render::{Card, CardList, LinkTarget};

const STYLE: &str = r#"
body { font-family: sans-serif; background: #1b1b1b; color: #eee; margin: 2rem; }
.cards { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); }
.card { background: #2a2a2a; border-radius: 6px; overflow: hidden; }
.card-header { background: #c9a227; color: #111; display: flex; justify-content: space-between; padding: 0.5rem 1rem; }
.card-header h2 { font-size: 1.1rem; margin: 0; }
.fav-toggle { color: #555; }
.fav-toggle.favorited { color: #fff; }
.card-body { padding: 0.5rem 1rem; }
.card-body a { color: #8ab4f8; }
"#;

/// Render a complete HTML document with one card per entry.
pub fn render_page(page_title: &str, list: &CardList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", encode_text(page_title));
    let _ = writeln!(out, "<style>{}</style>", STYLE);
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{}</h1>", encode_text(page_title));
    let _ = writeln!(out, "<div id=\"cardsContainer\" class=\"cards\">");
    for card in &list.cards {
        render_card(&mut out, card);
    }
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn render_card(out: &mut String, card: &Card) {
    let fav_class = if card.favorite.active {
        "fav-toggle favorited"
    } else {
        "fav-toggle"
    };

    let _ = writeln!(out, "<div class=\"card\" data-id=\"{}\">", card.record_id());
    let _ = writeln!(out, "<div class=\"card-header\">");
    let _ = writeln!(out, "<h2>{}</h2>", encode_text(&card.title));
    let _ = writeln!(out, "<span class=\"{}\">&#9733;</span>", fav_class);
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "<div class=\"card-body\">");

    let lines = [
        ("author", &card.author),
        ("content", &card.content),
        ("platform", &card.platform),
        ("date", &card.date),
    ];
    for (class, line) in lines {
        if let Some(text) = line {
            let _ = writeln!(out, "<p class=\"{}\">{}</p>", class, encode_text(text));
        }
    }

    if let Some(link) = &card.link {
        let target = match link.target {
            LinkTarget::NewContext => "_blank",
        };
        let _ = writeln!(
            out,
            "<p class=\"link\">Link: <a href=\"{}\" target=\"{}\" rel=\"noopener noreferrer\">{}</a></p>",
            encode_double_quoted_attribute(&link.href),
            target,
            encode_text(&link.href)
        );
    }

    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FavoriteSet, Record};
    use crate::render::render;

    fn record() -> Record {
        Record {
            id: 5,
            title: Some("<b>Bold</b> claims".into()),
            author: Some("A & B".into()),
            link: Some("https://example.com/?q=\"x\"".into()),
            content: Some("stone".into()),
            platform: None,
            date: None,
        }
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let page = render_page("Deck", &render(&[record()], &FavoriteSet::new()));
        assert!(page.contains("&lt;b&gt;Bold&lt;/b&gt; claims"));
        assert!(page.contains("By: A &amp; B"));
        assert!(page.contains("href=\"https://example.com/?q=&quot;x&quot;\""));
        assert!(!page.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_link_opens_in_new_context() {
        let page = render_page("Deck", &render(&[record()], &FavoriteSet::new()));
        assert!(page.contains("target=\"_blank\""));
    }

    #[test]
    fn test_omits_absent_lines() {
        let page = render_page("Deck", &render(&[record()], &FavoriteSet::new()));
        assert!(!page.contains("class=\"platform\""));
        assert!(!page.contains("class=\"date\""));
    }

    #[test]
    fn test_favorite_class() {
        let favorites = FavoriteSet::from(vec![5]);
        let page = render_page("Deck", &render(&[record()], &favorites));
        assert!(page.contains("<span class=\"fav-toggle favorited\">"));

        let page = render_page("Deck", &render(&[record()], &FavoriteSet::new()));
        assert!(page.contains("<span class=\"fav-toggle\">"));
        assert!(!page.contains("<span class=\"fav-toggle favorited\">"));
    }

    #[test]
    fn test_empty_list_still_renders_document() {
        let page = render_page("Deck", &CardList::default());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(!page.contains("class=\"card\""));
    }
}
