use crate::model::total_prints;
use crate::ui::app::{image_label, App};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
    Frame,
};

const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const QTY_COLOR: Color = BRAND_GREEN;
const HINT_COLOR: Color = BRAND_ORANGE;

pub fn draw_planner(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Parts table
        Constraint::Length(3), // Status
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let kit = app
        .active_kit_name()
        .map(|name| format!(" | kit: {name}"))
        .unwrap_or_default();
    let title = format!(
        " Marble Run Print Planner | {} parts | {} selected{} ",
        app.catalog.total_parts(),
        app.selection.total_parts(),
        kit
    );
    draw_header(frame, chunks[0], &title);
    draw_parts(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
    draw_footer(
        frame,
        chunks[3],
        " ↑↓ Part | 0-9 Qty | +/- Adjust | n Next kit | x Clear | Enter Checklist | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title.to_string())
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_parts(frame: &mut Frame, area: Rect, app: &App) {
    let parts = &app.catalog.parts;

    // Borders and header row
    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = if app.selected_part >= visible_rows {
        app.selected_part - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["Image", "Part Name", "Description", "Qty"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = parts
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, part)| {
            let qty = app.quantity_label(part);
            let style = if i == app.selected_part {
                SELECTED_STYLE
            } else if qty.is_empty() {
                Style::default()
            } else {
                Style::default().fg(QTY_COLOR)
            };

            Row::new(vec![
                image_label(&part.image),
                part.name.clone(),
                part.metadata.description.clone(),
                qty,
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(18),
        Constraint::Percentage(27),
        Constraint::Percentage(47),
        Constraint::Percentage(8),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Parts ({}) ", parts.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_ORANGE)),
    );
    frame.render_widget(table, area);

    if parts.len() > visible_rows {
        draw_scrollbar(frame, area, parts.len(), app.selected_part);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = match (&app.status, app.get_selected_part()) {
        (Some(status), _) => status.clone(),
        (None, Some(part)) if !part.dependencies.is_empty() => {
            format!("Works with: {}", part.dependencies.join(", "))
        }
        (None, Some(part)) => format!("{} sub-parts", part.sub_parts.len()),
        (None, None) => "Catalog is empty".to_string(),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

pub fn draw_checklist(frame: &mut Frame, app: &App) {
    let print_list = app.print_list();
    let hints = app.dependency_hints();
    let hint_height = if hints.is_empty() {
        0
    } else {
        (hints.len() as u16).min(5) + 2
    };

    let chunks = Layout::vertical([
        Constraint::Length(3),           // Header
        Constraint::Min(6),              // Print list
        Constraint::Length(hint_height), // Dependency hints
        Constraint::Length(3),           // Status
        Constraint::Length(3),           // Footer
    ])
    .split(frame.area());

    let title = format!(
        " Print Checklist | {} files | {} prints ",
        print_list.len(),
        total_prints(&print_list)
    );
    draw_header(frame, chunks[0], &title);

    if print_list.is_empty() {
        let empty = Paragraph::new("No parts selected.")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, chunks[1]);
    } else {
        let visible_rows = (chunks[1].height as usize).saturating_sub(3);

        let header = Row::new(vec![
            "Parent Part(s)",
            "Sub-Part",
            "Qty",
            "Support",
            "Brim",
            "Optional",
            "Infill",
        ])
        .style(HEADER_STYLE)
        .height(1);

        let rows: Vec<Row> = print_list
            .iter()
            .skip(app.checklist_scroll_offset)
            .take(visible_rows)
            .map(|entry| {
                Row::new(vec![
                    entry.parents_label(),
                    entry.name.clone(),
                    entry.count.to_string(),
                    check_mark(entry.metadata.support),
                    check_mark(entry.metadata.brim),
                    check_mark(entry.metadata.optional),
                    entry.metadata.infill.clone(),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(28),
            Constraint::Percentage(32),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(7),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(" Print List ").borders(Borders::ALL));
        frame.render_widget(table, chunks[1]);

        if print_list.len() > visible_rows {
            draw_scrollbar(
                frame,
                chunks[1],
                print_list.len(),
                app.checklist_scroll_offset,
            );
        }
    }

    if !hints.is_empty() {
        let items: Vec<ListItem> = hints
            .iter()
            .map(|hint| ListItem::new(Line::from(hint.to_string())))
            .collect();
        let list = List::new(items).style(Style::default().fg(HINT_COLOR)).block(
            Block::default()
                .title(" Not selected companions ")
                .borders(Borders::ALL),
        );
        frame.render_widget(list, chunks[2]);
    }

    let status = app
        .status
        .clone()
        .unwrap_or_else(|| format!("CSV target: {}", app.export_path.display()));
    let status_widget = Paragraph::new(status)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, chunks[3]);

    draw_footer(
        frame,
        chunks[4],
        " Esc Back to Planner | ↑↓ Scroll | e Export CSV | q Quit ",
    );
}

fn check_mark(flag: bool) -> String {
    if flag {
        "Yes".to_string()
    } else {
        String::new()
    }
}

fn draw_scrollbar(frame: &mut Frame, area: Rect, len: usize, position: usize) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));
    let mut scrollbar_state = ScrollbarState::new(len).position(position);
    frame.render_stateful_widget(scrollbar, scrollbar_area(area), &mut scrollbar_state);
}

/// Right-hand column inside the table border, below the header row.
fn scrollbar_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(area.width.saturating_sub(1)),
        y: area.y.saturating_add(2),
        width: area.width.min(1),
        height: area.height.saturating_sub(3),
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scrollbar_sits_on_the_right_border() {
        assert_eq!(
            scrollbar_area(Rect::new(2, 4, 40, 20)),
            Rect::new(41, 6, 1, 17)
        );
    }

    #[test]
    fn scrollbar_on_collapsed_area_is_empty() {
        assert_eq!(scrollbar_area(Rect::new(0, 0, 0, 0)), Rect::new(0, 2, 0, 0));
        assert_eq!(
            scrollbar_area(Rect::new(u16::MAX, u16::MAX, 0, 1)),
            Rect::new(u16::MAX, u16::MAX, 0, 0)
        );
    }
}
