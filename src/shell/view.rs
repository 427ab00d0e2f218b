//! Rendering for the modal dialog.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::prompt::{PromptButton, PromptDialog};

/// Render the dialog centered in the frame, over whatever the host drew.
pub fn draw(frame: &mut Frame, dialog: &PromptDialog) {
    let area = centered_rect_sized(52, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", dialog.config().heading))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let body = Paragraph::new(body_text(dialog))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[0]);

    let buttons = Paragraph::new(button_text(dialog))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(buttons, chunks[1]);
}

/// The dialog body: instruction, title and message lines, skipping empties.
pub fn body_text(dialog: &PromptDialog) -> String {
    (0..3)
        .map(|i| dialog.line(i))
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The button row: focus marked with brackets, a disabled Play with dashes.
pub fn button_text(dialog: &PromptDialog) -> String {
    let play = render_button(
        &dialog.config().play_label,
        dialog.focus() == PromptButton::Play,
        dialog.play_enabled(),
    );
    let eject = render_button(
        &dialog.config().eject_label,
        dialog.focus() == PromptButton::Eject,
        true,
    );
    format!("{play}   {eject}")
}

fn render_button(label: &str, focused: bool, enabled: bool) -> String {
    if !enabled {
        format!("-{label}-")
    } else if focused {
        format!("[{label}]")
    } else {
        format!(" {label} ")
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller than the host UI it covers.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}
