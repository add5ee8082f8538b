use crate::export::export_csv;
use crate::model::{Catalog, Kit, Part, PrintListEntry};
use crate::planner::{build_print_list, unmet_dependencies, MissingDependency, Selection};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::path::{Path, PathBuf};

/// Largest quantity that can be typed for one part.
pub const MAX_QTY: i64 = 999;

/// Shown instead of an image name when a part has none.
pub const IMAGE_PLACEHOLDER: &str = "□";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Planner,
    Checklist,
}

pub struct App {
    pub catalog: Catalog,
    pub kits: Vec<Kit>,
    pub selection: Selection,
    pub view: View,
    pub selected_part: usize,
    pub checklist_scroll_offset: usize,
    pub kit_index: Option<usize>,
    pub export_path: PathBuf,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(catalog: Catalog, kits: Vec<Kit>, selection: Selection) -> Self {
        Self {
            catalog,
            kits,
            selection,
            view: View::Planner,
            selected_part: 0,
            checklist_scroll_offset: 0,
            kit_index: None,
            export_path: PathBuf::from("marble_run_print_list.csv"),
            status: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = path;
        self
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Planner => super::planner::draw_planner(frame, self),
            View::Checklist => super::planner::draw_checklist(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.view {
            View::Planner => self.handle_planner_keys(code),
            View::Checklist => self.handle_checklist_keys(code),
        }
    }

    fn handle_planner_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.previous_part(),
            KeyCode::Down | KeyCode::Char('j') => self.next_part(),
            KeyCode::Char(c) if c.is_ascii_digit() => self.type_digit(c),
            KeyCode::Backspace => self.delete_digit(),
            KeyCode::Char('+' | '=') | KeyCode::Right => self.adjust_quantity(1),
            KeyCode::Char('-') | KeyCode::Left => self.adjust_quantity(-1),
            KeyCode::Char('n') => self.apply_next_kit(),
            KeyCode::Char('x') => {
                self.selection.clear();
                self.kit_index = None;
                self.status = Some("Selection cleared".to_string());
            }
            KeyCode::Enter => self.enter_checklist(),
            _ => {}
        }
    }

    fn handle_checklist_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.view = View::Planner;
                self.checklist_scroll_offset = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.checklist_scroll_offset = self.checklist_scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.print_list().len().saturating_sub(1);
                if self.checklist_scroll_offset < max {
                    self.checklist_scroll_offset += 1;
                }
            }
            KeyCode::Char('e') => self.export_checklist(),
            _ => {}
        }
    }

    fn previous_part(&mut self) {
        self.selected_part = self.selected_part.saturating_sub(1);
    }

    fn next_part(&mut self) {
        if self.selected_part < self.catalog.parts.len().saturating_sub(1) {
            self.selected_part += 1;
        }
    }

    fn type_digit(&mut self, digit: char) {
        let Some(value) = digit.to_digit(10) else {
            return;
        };
        let current = self.current_quantity().max(0);
        let next = current * 10 + i64::from(value);
        self.set_current_quantity(if next > MAX_QTY { i64::from(value) } else { next });
    }

    fn delete_digit(&mut self) {
        let current = self.current_quantity().max(0);
        self.set_current_quantity(current / 10);
    }

    fn adjust_quantity(&mut self, delta: i64) {
        let next = (self.current_quantity() + delta).clamp(0, MAX_QTY);
        self.set_current_quantity(next);
    }

    fn current_quantity(&self) -> i64 {
        self.get_selected_part()
            .map_or(0, |p| self.selection.get(&p.id))
    }

    fn set_current_quantity(&mut self, qty: i64) {
        let id = match self.get_selected_part() {
            Some(p) => p.id.clone(),
            None => return,
        };
        self.selection.set(&id, qty);
        self.status = None;
    }

    fn apply_next_kit(&mut self) {
        if self.kits.is_empty() {
            self.status = Some("No kits loaded".to_string());
            return;
        }
        let next = self.kit_index.map_or(0, |i| (i + 1) % self.kits.len());
        let kit = &self.kits[next];
        self.selection = Selection::from_kit(kit);
        self.status = Some(format!("Kit: {}", kit.name));
        self.kit_index = Some(next);
    }

    fn enter_checklist(&mut self) {
        if self.selection.has_selection() {
            self.view = View::Checklist;
            self.checklist_scroll_offset = 0;
        } else {
            self.status = Some("Select at least one part first".to_string());
        }
    }

    fn export_checklist(&mut self) {
        let print_list = self.print_list();
        self.status = Some(match export_csv(&print_list, &self.export_path) {
            Ok(()) => format!("Exported to CSV: {}", self.export_path.display()),
            Err(e) => format!("Export failed: {e}"),
        });
    }

    #[must_use]
    pub fn get_selected_part(&self) -> Option<&Part> {
        self.catalog.parts.get(self.selected_part)
    }

    /// Print list for the current selection, rebuilt on every call.
    #[must_use]
    pub fn print_list(&self) -> Vec<PrintListEntry> {
        build_print_list(&self.catalog, &self.selection)
    }

    #[must_use]
    pub fn dependency_hints(&self) -> Vec<MissingDependency> {
        unmet_dependencies(&self.catalog, &self.selection)
    }

    /// Quantity cell text: blank when nothing is requested.
    #[must_use]
    pub fn quantity_label(&self, part: &Part) -> String {
        match self.selection.get(&part.id) {
            qty if qty >= 1 => qty.to_string(),
            _ => String::new(),
        }
    }

    #[must_use]
    pub fn active_kit_name(&self) -> Option<&str> {
        self.kit_index
            .and_then(|i| self.kits.get(i))
            .map(|k| k.name.as_str())
    }
}

/// Short image label for the parts table; falls back to a placeholder.
#[must_use]
pub fn image_label(image: &str) -> String {
    Path::new(image)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string())
}
