use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let input = &app.report.user_input;
    let header = Paragraph::new(format!(
        "NUMEROLOGY · {} · {}",
        input.full_name, input.date_of_birth
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(main_chunks[1]);

    draw_section_list(f, app, content_chunks[0]);
    draw_section_body(f, app, content_chunks[1]);

    let footer = Paragraph::new("j/k: Section | J/K: Scroll | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_section_list(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .sections
        .iter()
        .map(|s| ListItem::new(s.title))
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Sections ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.state);
}

fn draw_section_body(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded);

    match app.selected() {
        Some(section) => {
            let lines: Vec<Line> = section
                .body
                .iter()
                .map(|l| {
                    if l.ends_with(':') {
                        Line::from(Span::styled(l.as_str(), Style::default().fg(Color::Blue)))
                    } else {
                        Line::from(l.as_str())
                    }
                })
                .collect();

            let body = Paragraph::new(lines)
                .block(block.title(format!(" {} ", section.title)))
                .wrap(Wrap { trim: false })
                .scroll((app.scroll, 0));
            f.render_widget(body, area);
        }
        None => f.render_widget(block.title(" Detail "), area),
    }
}
