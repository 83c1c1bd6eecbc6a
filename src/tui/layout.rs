use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::AuthorFilter;
use crate::render::text::FAVORITE_MARK;
use crate::tui::app::TuiApp;

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Min(10),   // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_filter_bar(frame, app, chunks[0], colors);
    render_card_list(frame, app, body[0], colors);
    render_card_detail(frame, app, body[1], colors);
    render_status_bar(frame, app, chunks[2], colors);
}

fn render_filter_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let criteria = app.controller.criteria();
    let label = Style::default().fg(colors.filter_label);
    let value = |active: bool| {
        if active {
            Style::default()
                .fg(colors.filter_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let search = if criteria.text.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", criteria.text)
    };
    let date = |d: Option<chrono::NaiveDate>| d.map_or_else(|| "-".to_string(), |d| d.to_string());

    let spans = vec![
        Span::styled("Search ", label),
        Span::styled(search, value(criteria.needle().is_some())),
        Span::styled(" in ", label),
        Span::styled(criteria.scope.as_str(), value(false)),
        Span::styled("  Author ", label),
        Span::styled(
            criteria.author.label().to_string(),
            value(criteria.author != AuthorFilter::All),
        ),
        Span::styled("  From ", label),
        Span::styled(date(criteria.start_date), value(criteria.start_date.is_some())),
        Span::styled("  To ", label),
        Span::styled(date(criteria.end_date), value(criteria.end_date.is_some())),
        Span::styled("  Favorites only ", label),
        Span::styled(
            if criteria.favorites_only { "on" } else { "off" },
            value(criteria.favorites_only),
        ),
    ];

    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_card_list(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let view = app.controller.view();

    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| {
            let mark = if card.favorite.active {
                Span::styled(FAVORITE_MARK, Style::default().fg(colors.favorite))
            } else {
                Span::raw(" ")
            };
            ListItem::new(Line::from(vec![mark, Span::raw(" "), Span::raw(card.title.clone())]))
        })
        .collect();

    let title = format!(
        " Cards ({}/{}) ",
        view.len(),
        app.controller.records().len()
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_card_detail(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let Some(card) = app.selected_card() else {
        let empty = if app.controller.records().is_empty() {
            "No records loaded"
        } else {
            "No cards match the filters"
        };
        frame.render_widget(Paragraph::new(empty).block(block.title(" Card ")), area);
        return;
    };

    let mut lines = Vec::new();
    let star = if card.favorite.active {
        Span::styled(
            format!("{} favorite", FAVORITE_MARK),
            Style::default().fg(colors.favorite),
        )
    } else {
        Span::styled("☆", Style::default().fg(colors.border))
    };
    lines.push(Line::from(vec![
        Span::styled(
            card.title.clone(),
            Style::default()
                .fg(colors.card_header)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        star,
    ]));
    lines.push(Line::from(""));

    if let Some(author) = &card.author {
        lines.push(Line::from(Span::styled(
            author.clone(),
            Style::default().fg(colors.metadata_author),
        )));
    }
    if let Some(content) = &card.content {
        lines.push(Line::from(""));
        for line in content.lines() {
            lines.push(Line::from(line.to_string()));
        }
        lines.push(Line::from(""));
    }
    if let Some(platform) = &card.platform {
        lines.push(Line::from(Span::styled(
            platform.clone(),
            Style::default().fg(colors.metadata_platform),
        )));
    }
    if let Some(date) = &card.date {
        lines.push(Line::from(Span::styled(
            date.clone(),
            Style::default().fg(colors.metadata_date),
        )));
    }
    if let Some(link) = &card.link {
        lines.push(Line::from(Span::styled(
            format!("Link: {}", link.href),
            Style::default()
                .fg(colors.metadata_link)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block.title(format!(" #{} ", card.record_id())))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if let Some(input) = &app.input {
        format!("{}: {}_  (Enter:Apply  Esc:Cancel)", input.field.label(), input.buffer)
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        "j/k:Nav  f:Fav  o:Open  /:Search  s:Scope  a:Author  [/]:Dates  F:Favs only  x:Clear  q:Quit"
            .to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
