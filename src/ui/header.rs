use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Data the summary bar is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryProps {
    /// Counters whose value is above zero.
    pub total_active: usize,
}

/// Header bar showing how many counters are in use.
pub struct Summary {
    props: SummaryProps,
}

impl Summary {
    pub fn new(props: SummaryProps) -> Self {
        Self { props }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let count_style = Style::default()
            .fg(STATUS_OK)
            .add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("tally", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Active counters: ", text_style),
            Span::styled(self.props.total_active.to_string(), count_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
