//! Folder tree screen
//!
//! Arrow keys move the selection, Enter/Space toggles, a left click on a row
//! toggles that row.

use super::with_terminal;
use crate::tree::{TreeRow, TreeView};
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

/// Folder tree screen state
pub struct TreeApp {
    pub view: TreeView,
    pub should_quit: bool,
    /// Where the list was last drawn, for mapping clicks to rows
    list_area: Rect,
    /// Scroll position carried between frames
    list_state: ListState,
}

impl TreeApp {
    #[must_use]
    pub fn new(view: TreeView) -> Self {
        Self {
            view,
            should_quit: false,
            list_area: Rect::default(),
            list_state: ListState::default(),
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.view.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.view.select_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let expanded = self.view.toggle_selected();
                tracing::debug!(selected = self.view.selected(), expanded, "toggled");
            }
            KeyCode::Char('c') => self.view.collapse_all(),
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = self.row_at(mouse.column, mouse.row) {
            let expanded = self.view.toggle_row(index);
            tracing::debug!(index, expanded, "row clicked");
        }
    }

    /// Visible row index under a terminal position
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.list_area;
        let inside = column >= inner.x
            && column < inner.x + inner.width
            && row >= inner.y
            && row < inner.y + inner.height;
        inside.then(|| self.list_state.offset() + usize::from(row - inner.y))
    }
}

/// Run the folder tree TUI
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails.
pub fn run_tree_tui(app: TreeApp) -> Result<()> {
    with_terminal(|terminal| run_app(terminal, app))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: TreeApp) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
            Event::Mouse(mouse) => app.handle_mouse_event(mouse),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Draw the screen, remembering where the folder list landed
pub fn ui(f: &mut Frame, app: &mut TreeApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Tree
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let rows = app.view.visible_rows();
    let items: Vec<ListItem> = rows.iter().map(row_item).collect();

    let block = Block::default()
        .title(" Folders ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(chunks[0]);

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    app.list_state.select(Some(app.view.selected()));
    f.render_stateful_widget(list, chunks[0], &mut app.list_state);
    app.list_area = inner;

    let help = Paragraph::new("↑/↓: Move | Enter/Space/Click: Toggle | c: Collapse all | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

fn row_item<'a>(row: &TreeRow<'a>) -> ListItem<'a> {
    let marker = match (row.expandable, row.expanded) {
        (false, _) => "  ",
        (true, false) => "▸ ",
        (true, true) => "▾ ",
    };
    let style = if row.expandable {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::raw(" ".repeat(row.indent())),
        Span::styled(marker, style),
        Span::styled(row.name, style),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::default_structure;
    use crossterm::event::KeyEventState;
    use ratatui::backend::TestBackend;

    fn app() -> TreeApp {
        TreeApp::new(TreeView::new(default_structure()))
    }

    fn press(app: &mut TreeApp, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut TreeApp, column: u16, row: u16) {
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn draw(app: &mut TreeApp) -> String {
        draw_sized(app, 60, 20)
    }

    fn draw_sized(app: &mut TreeApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn keyboard_toggles_selected_node() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));

        let names: Vec<&str> = app.view.visible_rows().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["root", "A", "A-1", "A-2", "A-3", "B"]);
    }

    #[test]
    fn rendered_rows_are_indented_by_depth() {
        let mut app = app();
        app.view.toggle(&[0]);
        let screen = draw(&mut app);

        let root_line = screen.lines().find(|l| l.contains("root")).unwrap();
        let a_line = screen.lines().find(|l| l.contains("▸ A")).unwrap();
        let root_col = root_line.chars().position(|c| c == 'r').unwrap();
        let a_col = a_line.chars().position(|c| c == 'A').unwrap();
        assert_eq!(a_col - root_col, 5);
    }

    #[test]
    fn click_toggles_row_under_cursor() {
        let mut app = app();
        draw(&mut app);
        let top = app.list_area.y;
        let left = app.list_area.x;

        click(&mut app, left + 2, top);
        assert!(app.view.is_expanded(&[0]));

        draw(&mut app);
        click(&mut app, left + 2, top + 1);
        assert!(app.view.is_expanded(&[0, 0]));
        assert_eq!(app.view.selected(), 1);
    }

    #[test]
    fn click_on_scrolled_list_toggles_visible_row() {
        let mut app = app();
        app.view.toggle(&[0]);
        app.view.toggle(&[0, 0]);
        app.view.toggle(&[0, 0, 0]);
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }

        // Three list rows on screen, so selecting A-1-1 scrolls past root
        draw_sized(&mut app, 40, 8);
        let offset = app.list_state.offset();
        assert!(offset > 0);
        let top_path = app.view.visible_rows()[offset].path.clone();

        let (left, top) = (app.list_area.x, app.list_area.y);
        click(&mut app, left + 2, top);
        assert!(app.view.is_expanded(&[0]));
        assert!(!app.view.is_expanded(&top_path));
        assert_eq!(app.view.selected(), offset);
    }

    #[test]
    fn click_outside_list_is_ignored() {
        let mut app = app();
        draw(&mut app);
        click(&mut app, 0, 0);
        assert!(!app.view.is_expanded(&[0]));
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_key_event(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(app.should_quit);
    }
}
