use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::config::KeybindingConfig;
use crate::controller::{ControlChange, Controller};
use crate::domain::parse_calendar_date;
use crate::render::Card;
use crate::tui::event::Action;

pub const PAGE_SIZE: usize = 10;

/// Filter field currently being typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Search,
    StartDate,
    EndDate,
}

impl InputField {
    pub fn label(self) -> &'static str {
        match self {
            InputField::Search => "Search",
            InputField::StartDate => "From (YYYY-MM-DD)",
            InputField::EndDate => "To (YYYY-MM-DD)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub field: InputField,
    pub buffer: String,
    /// Search text before editing started, restored on cancel.
    original: String,
}

/// Side effects the event loop must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenLink(String),
}

pub struct TuiApp {
    pub controller: Controller,
    pub selected: usize,
    pub list_state: ListState,
    pub input: Option<InputState>,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl TuiApp {
    pub fn new(controller: Controller) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            controller,
            selected: 0,
            list_state,
            input: None,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.controller.view().get(self.selected)
    }

    pub fn handle_key(&mut self, key: &KeyEvent, keybindings: &KeybindingConfig) -> Effect {
        if self.input.is_some() {
            self.handle_input_key(key);
            return Effect::None;
        }
        self.handle_action(keybindings.get_action(key))
    }

    pub fn handle_action(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_to(self.selected.saturating_sub(1)),
            Action::MoveDown => self.move_to(self.selected + 1),
            Action::NextPage => self.move_to(self.selected + PAGE_SIZE),
            Action::PrevPage => self.move_to(self.selected.saturating_sub(PAGE_SIZE)),
            Action::ToggleFavorite => self.toggle_favorite(),
            Action::OpenLink => {
                if let Some(link) = self.selected_card().and_then(|c| c.link.as_ref()) {
                    return Effect::OpenLink(link.href.clone());
                }
                self.set_status("No link on this card".to_string());
            }
            Action::Search => self.begin_input(InputField::Search),
            Action::SetStartDate => self.begin_input(InputField::StartDate),
            Action::SetEndDate => self.begin_input(InputField::EndDate),
            Action::CycleScope => {
                let scope = self.controller.criteria().scope.next();
                self.apply(ControlChange::Scope(scope));
            }
            Action::CycleAuthor => {
                let author = self.controller.next_author();
                self.apply(ControlChange::Author(author));
            }
            Action::ToggleFavoritesOnly => {
                let on = !self.controller.criteria().favorites_only;
                self.apply(ControlChange::FavoritesOnly(on));
            }
            Action::ClearFilters => {
                self.controller.reset_filters();
                self.clamp_selection();
                self.set_status("Filters cleared".to_string());
            }
            Action::None => {}
        }
        Effect::None
    }

    fn handle_input_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_input(),
            KeyCode::Esc => self.cancel_input(),
            KeyCode::Backspace => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.pop();
                }
                self.live_search();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.push(c);
                }
                self.live_search();
            }
            _ => {}
        }
    }

    fn begin_input(&mut self, field: InputField) {
        let criteria = self.controller.criteria();
        let current = match field {
            InputField::Search => criteria.text.clone(),
            InputField::StartDate => criteria.start_date.map(|d| d.to_string()).unwrap_or_default(),
            InputField::EndDate => criteria.end_date.map(|d| d.to_string()).unwrap_or_default(),
        };
        self.input = Some(InputState {
            field,
            buffer: current.clone(),
            original: current,
        });
    }

    // Search text filters as it is typed.
    fn live_search(&mut self) {
        let text = match &self.input {
            Some(input) if input.field == InputField::Search => input.buffer.clone(),
            _ => return,
        };
        self.apply(ControlChange::Text(text));
    }

    fn commit_input(&mut self) {
        let Some(input) = self.input.take() else {
            return;
        };

        let change = match input.field {
            InputField::Search => ControlChange::Text(input.buffer),
            InputField::StartDate | InputField::EndDate => {
                let value = input.buffer.trim();
                let date = if value.is_empty() {
                    None
                } else {
                    match parse_calendar_date(value) {
                        Some(date) => Some(date),
                        None => {
                            self.set_status(format!("Invalid date: {}", value));
                            return;
                        }
                    }
                };
                if input.field == InputField::StartDate {
                    ControlChange::StartDate(date)
                } else {
                    ControlChange::EndDate(date)
                }
            }
        };
        self.apply(change);
    }

    fn cancel_input(&mut self) {
        if let Some(input) = self.input.take() {
            if input.field == InputField::Search {
                self.apply(ControlChange::Text(input.original));
            }
        }
    }

    fn apply(&mut self, change: ControlChange) {
        self.controller.apply_change(change);
        self.clamp_selection();
        self.clear_status();
    }

    fn toggle_favorite(&mut self) {
        let Some(id) = self.selected_card().map(Card::record_id) else {
            return;
        };
        let outcome = self.controller.toggle_favorite(id);
        if outcome.rerendered {
            self.clamp_selection();
        }
        self.set_status(if outcome.favorited {
            "Added to favorites".to_string()
        } else {
            "Removed from favorites".to_string()
        });
    }

    fn move_to(&mut self, index: usize) {
        let max_index = self.controller.view().len().saturating_sub(1);
        self.selected = index.min(max_index);
        self.list_state.select(Some(self.selected));
    }

    fn clamp_selection(&mut self) {
        self.move_to(self.selected);
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
