use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::{List, ListItem, ListState, StatefulWidget, Widget};

use crate::draw::default_border;

pub const PROMPT: &str = " Select your team ";

/// The team dropdown, rendered as an always-open list of full names.
pub struct TeamSelect<'a> {
    pub options: Vec<&'a str>,
    pub cursor: usize,
    /// Row of the committed team, if any.
    pub active: Option<usize>,
}

impl Widget for TeamSelect<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let has_options = !self.options.is_empty();
        let items: Vec<ListItem> = self
            .options
            .into_iter()
            .enumerate()
            .map(|(idx, label)| {
                let style = if self.active == Some(idx) {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(label).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(default_border(Color::White).title(PROMPT))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let selected = has_options.then_some(self.cursor);
        let mut state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn lists_full_names_in_given_order() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        TeamSelect { options: vec!["Boston Celtics", "Atlanta Hawks"], cursor: 0, active: None }
            .render(area, &mut buf);

        let rows = rows(&buf);
        assert!(rows[0].contains("Select your team"), "{rows:?}");
        assert!(rows[1].contains("> Boston Celtics"), "{rows:?}");
        assert!(rows[2].contains("Atlanta Hawks"), "{rows:?}");
    }

    #[test]
    fn empty_list_still_renders_prompt() {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);

        TeamSelect { options: Vec::new(), cursor: 0, active: None }.render(area, &mut buf);

        assert!(rows(&buf)[0].contains("Select your team"));
    }
}
