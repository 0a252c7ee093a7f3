//! Drawing the current step and the completion view.

use leadform::{StepKind, Submitter, WizardController};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::Theme;

const INPUT_PLACEHOLDER: &str = "→ your response";
const COMBOBOX_PLACEHOLDER: &str = "→ type & select an option";

/// Draw the step the wizard is on.
pub fn draw_wizard<S: Submitter>(
    frame: &mut Frame,
    wizard: &WizardController<S>,
    theme: &Theme,
    title: &str,
) {
    let area = frame.area();
    draw_background(frame, area, theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(10),   // Step
            Constraint::Length(3), // Confirm + help
        ])
        .split(area);

    draw_header(frame, chunks[0], wizard.can_retreat(), theme, title);
    draw_progress(frame, chunks[1], wizard, theme);

    let content = wizard.content();
    let content_height = content
        .as_deref()
        .map(|c| c.lines().count() as u16 + 1)
        .unwrap_or(0);

    let step_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Heading
            Constraint::Length(content_height), // Body text
            Constraint::Min(3),                 // Input
            Constraint::Length(2),              // Error message
        ])
        .split(chunks[2]);

    let heading = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}. ", wizard.current_index() + 1),
            Style::default().fg(theme.border),
        ),
        Span::styled(wizard.heading(), Style::default().fg(theme.text).bold()),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    frame.render_widget(heading, step_chunks[0]);

    if let Some(content) = content {
        let body = Paragraph::new(content)
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false });
        frame.render_widget(body, step_chunks[1]);
    }

    match wizard.current_step().kind() {
        StepKind::Information => {}
        StepKind::SingleLineText(_) => {
            draw_text_input(frame, step_chunks[2], wizard, theme, INPUT_PLACEHOLDER);
        }
        StepKind::Combobox(_) => {
            let input_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1)])
                .split(step_chunks[2]);
            draw_text_input(frame, input_chunks[0], wizard, theme, COMBOBOX_PLACEHOLDER);
            draw_suggestions(frame, input_chunks[1], wizard, theme);
        }
        StepKind::SingleSelect(_) | StepKind::MultiSelect(_) => {
            draw_choices(frame, step_chunks[2], wizard, theme);
        }
    }

    if let Some(error) = wizard.error_message() {
        let error_widget = Paragraph::new(error.to_string())
            .style(Style::default().fg(theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, step_chunks[3]);
    }

    draw_footer(frame, chunks[3], wizard, theme);
}

fn draw_background(frame: &mut Frame, area: Rect, theme: &Theme) {
    let background = Block::default().style(Style::default().bg(theme.background));
    frame.render_widget(background, area);
}

fn draw_header(frame: &mut Frame, area: Rect, can_retreat: bool, theme: &Theme, title: &str) {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(theme.primary).bold(),
    )];
    if can_retreat {
        spans.push(Span::styled(
            "   ↑ back (Backspace)",
            Style::default().fg(theme.border),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, area);
}

fn draw_progress<S: Submitter>(
    frame: &mut Frame,
    area: Rect,
    wizard: &WizardController<S>,
    theme: &Theme,
) {
    let bar_width = area.width.saturating_sub(2);
    let filled_width = (wizard.progress() * f64::from(bar_width)) as u16;
    let bar_x = area.x + 1;

    let track = "─".repeat(bar_width as usize);
    let track_widget = Paragraph::new(track)
        .style(Style::default().fg(theme.border));
    frame.render_widget(track_widget, Rect::new(bar_x, area.y, bar_width, 1));

    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        let filled_widget = Paragraph::new(filled)
            .style(Style::default().fg(theme.primary));
        frame.render_widget(filled_widget, Rect::new(bar_x, area.y, filled_width, 1));
    }

    let progress_text = format!(
        " {} / {} ",
        wizard.current_index() + 1,
        wizard.catalog().len()
    );
    let text_width = progress_text.chars().count() as u16;
    let text_x = bar_x + bar_width.saturating_sub(text_width) / 2;
    if area.height > 1 {
        let text_widget = Paragraph::new(progress_text)
            .style(Style::default().fg(theme.secondary));
        frame.render_widget(
            text_widget,
            Rect::new(text_x, area.y + 1, text_width.min(bar_width), 1),
        );
    }
}

fn draw_text_input<S: Submitter>(
    frame: &mut Frame,
    area: Rect,
    wizard: &WizardController<S>,
    theme: &Theme,
    placeholder: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let inner_width = area.width.saturating_sub(2);
    let (scroll, column) = input_viewport(wizard.text(), wizard.cursor(), inner_width);
    let input = if wizard.text().is_empty() {
        Paragraph::new(placeholder.to_string())
            .style(Style::default().fg(theme.border))
    } else {
        Paragraph::new(wizard.text().to_string())
            .style(Style::default().fg(theme.highlight))
            .scroll((0, scroll))
    };
    frame.render_widget(input.block(block), area);

    frame.set_cursor_position((area.x + 1 + column, area.y + 1));
}

/// Horizontal scroll and cursor column, in cells, for a one-line input that
/// is `width` cells wide with the cursor after `cursor` chars of `text`.
fn input_viewport(text: &str, cursor: usize, width: u16) -> (u16, u16) {
    let before: String = text.chars().take(cursor).collect();
    let cursor_cells = before.width();
    let scroll = (cursor_cells + 1).saturating_sub(usize::from(width.max(1)));
    let column = cursor_cells - scroll;
    (
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(column).unwrap_or(u16::MAX),
    )
}

fn draw_suggestions<S: Submitter>(
    frame: &mut Frame,
    area: Rect,
    wizard: &WizardController<S>,
    theme: &Theme,
) {
    let suggestions = wizard.suggestions();
    if suggestions.is_empty() {
        return;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .map(|option| ListItem::new(format!("  {}", option.label)))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(theme.text))
        .highlight_style(Style::default().fg(theme.highlight).bold())
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(wizard.highlight()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_choices<S: Submitter>(
    frame: &mut Frame,
    area: Rect,
    wizard: &WizardController<S>,
    theme: &Theme,
) {
    let multi = matches!(wizard.current_step().kind(), StepKind::MultiSelect(_));

    let items: Vec<ListItem> = wizard
        .visible_choices()
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let selected = wizard.is_selected(&choice.value);
            let mark = match (multi, selected) {
                (true, true) => "[✓]",
                (true, false) => "[ ]",
                (false, true) => "(●)",
                (false, false) => "( )",
            };
            let style = if selected {
                Style::default().fg(theme.success).bold()
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{mark} {}", choice.label), style),
                Span::styled(format!("  ({})", i + 1), Style::default().fg(theme.border)),
            ]))
        })
        .collect();

    let title = if multi {
        format!(" {} selected ", wizard.selected().len())
    } else {
        " Choose one ".to_string()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(title)
                .title_style(Style::default().fg(theme.secondary)),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(wizard.highlight()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer<S: Submitter>(
    frame: &mut Frame,
    area: Rect,
    wizard: &WizardController<S>,
    theme: &Theme,
) {
    let help = match wizard.current_step().kind() {
        StepKind::SingleSelect(_) | StepKind::MultiSelect(_) => {
            "1-9/Space: Toggle  ↑/↓: Move  Backspace: Back  Esc: Quit"
        }
        StepKind::Combobox(_) => "↑/↓: Move  Tab: Complete  Backspace: Back  Esc: Quit",
        StepKind::Information | StepKind::SingleLineText(_) => "Backspace: Back  Esc: Quit",
    };

    let footer = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("[ {} ]", wizard.confirm_label()),
                Style::default().fg(theme.primary).bold(),
            ),
            Span::styled("  or press Enter ↵", Style::default().fg(theme.border)),
        ]),
        Line::from(Span::styled(help, Style::default().fg(theme.border))),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(footer, area);
}

/// Draw the view shown once the answers were submitted.
pub fn draw_completion(frame: &mut Frame, theme: &Theme, message: &str) {
    let area = frame.area();
    draw_background(frame, area, theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(" Complete ")
        .title_style(Style::default().fg(theme.success).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(format!("{message}\n\nPress Enter to exit."))
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(5),
            Constraint::Percentage(35),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}
