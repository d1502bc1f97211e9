use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/*
    Draws the base UI visible behind every view:
    1. The bordered main window with the application title
    2. A usage hint line at the bottom of the window
 */
pub struct UI {
    pub show_usage_hint: bool
}

pub fn build_ui() -> UI {
    UI {
        show_usage_hint: true
    }
}

fn build_main_block<'a>() -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title("ASEdit - UK Airspace Options")
        .style(Style::default().bg(Color::Black))
}

impl UI {
    pub fn render(&mut self, frame: &mut Frame) {
        let frame_area = frame.area();

        frame.render_widget(build_main_block(), frame_area);

        if self.show_usage_hint && frame_area.height > 2 && frame_area.width > 4 {
            let hint = Paragraph::new("Up/Down select, Enter open/choose, Esc save and quit")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Left);
            let hint_area = Rect::new(frame_area.x + 2, frame_area.y + frame_area.height - 2, frame_area.width - 4, 1);
            frame.render_widget(hint, hint_area);
        }
    }
}
