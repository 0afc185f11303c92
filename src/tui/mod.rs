// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal viewer/driver for an editor session.
//!
//! The TUI is deliberately thin: every key that changes selection or
//! viewport goes through [`Editor::dispatch`], and every pane renders from
//! the feedback registry — the same surface the tests assert against.

mod theme;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::dispatch::{Editor, EditorEvent};
use crate::feedback::{FeedbackInstruction, FeedbackKind};
use crate::model::{Diagram, ElementId, Point, SelectionState};
use crate::overlay::{self, AnchorCorner, Viewport};
use theme::TuiTheme;

const ZOOM_STEP: f64 = 1.25;
const ZOOM_MIN: f64 = 0.25;
const ZOOM_MAX: f64 = 4.0;
const PAN_STEP: f64 = 20.0;

/// The built-in demo process used by `--demo` and the viewer tests.
pub fn demo_diagram() -> Diagram {
    crate::model::fixtures::demo_process()
}

/// Runs the interactive viewer until the user quits.
pub fn run_editor(editor: Editor) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(editor);

    while !app.should_quit {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchKind {
    Substring,
    Fuzzy,
}

struct App {
    editor: Editor,
    rows: Vec<ElementId>,
    haystacks: Vec<String>,
    list_state: ListState,
    theme: TuiTheme,
    search_mode: SearchMode,
    search_kind: SearchKind,
    search_query: String,
    search_results: Vec<usize>,
    search_result_index: usize,
    show_help: bool,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(editor: Editor) -> Self {
        let rows = element_rows(editor.diagram());
        let haystacks = search_haystacks(editor.diagram(), &rows);
        let mut list_state = ListState::default();
        if !rows.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            editor,
            rows,
            haystacks,
            list_state,
            theme: TuiTheme,
            search_mode: SearchMode::Inactive,
            search_kind: SearchKind::Substring,
            search_query: String::new(),
            search_results: Vec::new(),
            search_result_index: 0,
            show_help: false,
            status: None,
            should_quit: false,
        }
    }

    fn cursor_element(&self) -> Option<&ElementId> {
        self.list_state.selected().and_then(|idx| self.rows.get(idx))
    }

    fn set_cursor(&mut self, idx: usize) {
        if idx < self.rows.len() {
            self.list_state.select(Some(idx));
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, self.rows.len() as isize - 1);
        self.list_state.select(Some(next as usize));
    }

    fn dispatch_selection(&mut self, added: Vec<ElementId>, removed: Vec<ElementId>) {
        let result = self
            .editor
            .dispatch(EditorEvent::SelectionChanged { added, removed });
        if let Err(err) = result {
            self.status = Some(format!("Selection rejected: {err}"));
        }
    }

    fn dispatch_viewport(&mut self, scroll: Point, zoom: f64) {
        match Viewport::new(scroll, zoom) {
            Ok(viewport) => {
                // ViewportChanged never fails.
                let _ = self.editor.dispatch(EditorEvent::ViewportChanged { viewport });
            }
            Err(err) => self.status = Some(format!("Viewport rejected: {err}")),
        }
    }

    fn zoom_by(&mut self, factor: f64) {
        let viewport = *self.editor.viewport();
        let zoom = (viewport.zoom() * factor).clamp(ZOOM_MIN, ZOOM_MAX);
        self.dispatch_viewport(viewport.scroll(), zoom);
    }

    fn pan_by(&mut self, dx: f64, dy: f64) {
        let viewport = *self.editor.viewport();
        let scroll = Point::new(viewport.scroll().x + dx, viewport.scroll().y + dy);
        self.dispatch_viewport(scroll, viewport.zoom());
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.search_mode == SearchMode::Active {
            self.handle_search_key(key);
            return;
        }

        self.status = None;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Char(' ') => {
                if let Some(element_id) = self.cursor_element().cloned() {
                    let (added, removed) = toggle_plan(self.editor.selection(), &element_id);
                    self.dispatch_selection(added, removed);
                }
            }
            KeyCode::Enter => {
                if let Some(element_id) = self.cursor_element().cloned() {
                    let (added, removed) = replace_plan(self.editor.selection(), &element_id);
                    self.dispatch_selection(added, removed);
                }
            }
            KeyCode::Char('c') => {
                let (added, removed) = clear_plan(self.editor.selection());
                self.dispatch_selection(added, removed);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom_by(ZOOM_STEP),
            KeyCode::Char('-') => self.zoom_by(1.0 / ZOOM_STEP),
            KeyCode::Left | KeyCode::Char('h') => self.pan_by(-PAN_STEP, 0.0),
            KeyCode::Right | KeyCode::Char('l') => self.pan_by(PAN_STEP, 0.0),
            KeyCode::Char('/') => self.enter_search(SearchKind::Substring),
            KeyCode::Char('\\') => self.enter_search(SearchKind::Fuzzy),
            KeyCode::Char('n') => self.cycle_search_result(1),
            KeyCode::Char('N') => self.cycle_search_result(-1),
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    let (added, removed) = clear_plan(self.editor.selection());
                    self.dispatch_selection(added, removed);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_mode = SearchMode::Inactive;
                self.search_query.clear();
                self.search_results.clear();
            }
            KeyCode::Enter => self.search_mode = SearchMode::Inactive,
            KeyCode::Backspace => {
                self.search_query.pop();
                self.refresh_search();
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.refresh_search();
            }
            _ => {}
        }
    }

    fn enter_search(&mut self, kind: SearchKind) {
        self.search_mode = SearchMode::Active;
        self.search_kind = kind;
        self.search_query.clear();
        self.search_results.clear();
        self.search_result_index = 0;
    }

    fn refresh_search(&mut self) {
        self.search_results = ranked_rows(&self.haystacks, &self.search_query, self.search_kind);
        self.search_result_index = 0;
        if let Some(&row) = self.search_results.first() {
            self.set_cursor(row);
        }
    }

    fn cycle_search_result(&mut self, delta: isize) {
        if self.search_results.is_empty() {
            return;
        }
        let len = self.search_results.len() as isize;
        let next = (self.search_result_index as isize + delta).rem_euclid(len) as usize;
        self.search_result_index = next;
        let row = self.search_results[next];
        self.set_cursor(row);
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.size();
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(1)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(vertical[0]);
        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(25),
                Constraint::Percentage(35),
            ])
            .split(columns[1]);

        let items: Vec<ListItem<'_>> = self
            .rows
            .iter()
            .map(|element_id| {
                let selected = self.editor.selection().contains(element_id);
                let style = if selected {
                    self.theme.selected_style()
                } else {
                    self.theme.base_style()
                };
                ListItem::new(row_line(self.editor.diagram(), self.editor.selection(), element_id))
                    .style(style)
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Elements"))
            .highlight_style(self.theme.cursor_style())
            .highlight_symbol("▸ ");
        frame.render_stateful_widget(list, columns[0], &mut self.list_state);

        let menu_title = pane_title(&self.editor, FeedbackKind::QuickActionMenu, "Quick actions");
        let menu = Paragraph::new(pane_text(&self.editor, FeedbackKind::QuickActionMenu))
            .block(Block::default().borders(Borders::ALL).title(menu_title))
            .wrap(Wrap { trim: false });
        frame.render_widget(menu, panes[0]);

        let hint_title = pane_title(&self.editor, FeedbackKind::SmartActionHint, "Smart hint");
        let hint = Paragraph::new(pane_text(&self.editor, FeedbackKind::SmartActionHint))
            .block(Block::default().borders(Borders::ALL).title(hint_title))
            .style(self.theme.hint_style())
            .wrap(Wrap { trim: false });
        frame.render_widget(hint, panes[1]);

        let inspector = Paragraph::new(feedback_lines(&self.editor).join("\n"))
            .block(Block::default().borders(Borders::ALL).title("Feedback"))
            .wrap(Wrap { trim: false });
        frame.render_widget(inspector, panes[2]);

        let footer_line = self.footer_line();
        let footer_style = if self.status.is_some() {
            self.theme.error_style()
        } else {
            self.theme.muted_style()
        };
        let footer = Paragraph::new(Line::styled(footer_line, footer_style));
        frame.render_widget(footer, vertical[1]);

        if self.show_help {
            let help = Paragraph::new(help_text())
                .block(Block::default().borders(Borders::ALL).title("Keys"))
                .wrap(Wrap { trim: false });
            frame.render_widget(help, area);
        }
    }

    fn footer_line(&self) -> String {
        if self.search_mode == SearchMode::Active {
            let sigil = match self.search_kind {
                SearchKind::Substring => '/',
                SearchKind::Fuzzy => '\\',
            };
            return format!(
                "{sigil}{}▏ {} match(es) — Enter keep, Esc cancel",
                self.search_query,
                self.search_results.len()
            );
        }
        if let Some(status) = &self.status {
            return status.clone();
        }
        footer_help_line().to_owned()
    }
}

fn footer_help_line() -> &'static str {
    "space toggle · enter replace · c clear · +/- zoom · ←/→ pan · / \\ search · ? keys · q quit"
}

fn help_text() -> String {
    [
        "↑/↓, k/j    move cursor",
        "space       toggle selection of the cursor element",
        "enter       replace selection with the cursor element",
        "c, esc      clear selection",
        "+/-         zoom in / out",
        "←/→, h/l    pan",
        "/           substring search",
        "\\           fuzzy search",
        "n/N         next / previous search match",
        "q           quit",
    ]
    .join("\n")
}

/// Stable listing order: element ids in map order.
fn element_rows(diagram: &Diagram) -> Vec<ElementId> {
    diagram.elements().keys().cloned().collect()
}

fn row_line(diagram: &Diagram, selection: &SelectionState, element_id: &ElementId) -> String {
    let marker = if selection.contains(element_id) { '◼' } else { '◻' };
    match diagram.element(element_id) {
        Some(element) => {
            let hover = if element.hovered() { " *" } else { "" };
            format!(
                "{marker} {:<18} {} [{element_id}]{hover}",
                element.variant().tag(),
                element.label()
            )
        }
        None => format!("{marker} ? [{element_id}]"),
    }
}

fn action_line(action: &crate::actions::Action) -> String {
    match action.shortcut() {
        Some(shortcut) => format!("{}  {} ({})", action.sorting(), action.label(), shortcut),
        None => format!("{}  {}", action.sorting(), action.label()),
    }
}

fn pane_title(editor: &Editor, kind: FeedbackKind, base: &str) -> String {
    match editor.feedback().instruction(kind) {
        Some(FeedbackInstruction::Show { element_ids, .. }) => match element_ids.last() {
            Some(element_id) => format!("{base} — {element_id}"),
            None => base.to_owned(),
        },
        _ => base.to_owned(),
    }
}

/// Body of a single-target feedback pane, anchor included.
///
/// The anchor is recomputed from the live viewport on every draw; nothing
/// on-screen survives a pan/zoom.
fn pane_text(editor: &Editor, kind: FeedbackKind) -> String {
    let Some(FeedbackInstruction::Show { element_ids, actions, .. }) =
        editor.feedback().instruction(kind)
    else {
        return "(hidden)".to_owned();
    };

    let mut lines: Vec<String> = actions.iter().map(action_line).collect();
    if lines.is_empty() {
        lines.push("(no actions)".to_owned());
    }

    let corner = match kind {
        FeedbackKind::QuickActionMenu => AnchorCorner::TopRight,
        _ => AnchorCorner::BottomLeft,
    };
    if let Some(bounds) = element_ids
        .last()
        .and_then(|element_id| editor.diagram().element(element_id))
        .map(|element| *element.bounds())
    {
        let anchor = overlay::anchor(&bounds, corner, editor.viewport());
        lines.push(format!("anchor: {:.1},{:.1}", anchor.x, anchor.y));
    }
    lines.join("\n")
}

fn feedback_lines(editor: &Editor) -> Vec<String> {
    let mut lines = Vec::new();
    for (kind, instruction) in editor.feedback().current_state() {
        match instruction {
            FeedbackInstruction::Show { element_ids, actions, .. } => {
                let ids: Vec<String> = element_ids.iter().map(ToString::to_string).collect();
                lines.push(format!(
                    "{kind}: show [{}] ({} actions)",
                    ids.join(", "),
                    actions.len()
                ));
            }
            FeedbackInstruction::Hide { .. } => lines.push(format!("{kind}: hide")),
        }
    }
    if let Some(extent) = overlay::selection_extent(editor.diagram(), editor.selection()) {
        if editor.selection().len() > 1 {
            lines.push(format!(
                "extent: {:.0},{:.0} {:.0}x{:.0}",
                extent.x, extent.y, extent.width, extent.height
            ));
        }
    }
    lines
}

/// What to add/remove so the element's selected state flips.
fn toggle_plan(
    selection: &SelectionState,
    element_id: &ElementId,
) -> (Vec<ElementId>, Vec<ElementId>) {
    if selection.contains(element_id) {
        (Vec::new(), vec![element_id.clone()])
    } else {
        (vec![element_id.clone()], Vec::new())
    }
}

/// What to add/remove so the element becomes the only selected one.
fn replace_plan(
    selection: &SelectionState,
    element_id: &ElementId,
) -> (Vec<ElementId>, Vec<ElementId>) {
    let removed: Vec<ElementId> = selection
        .ids()
        .iter()
        .filter(|id| *id != element_id)
        .cloned()
        .collect();
    let added = if selection.contains(element_id) {
        Vec::new()
    } else {
        vec![element_id.clone()]
    };
    (added, removed)
}

fn clear_plan(selection: &SelectionState) -> (Vec<ElementId>, Vec<ElementId>) {
    (Vec::new(), selection.ids().to_vec())
}

fn search_haystacks(diagram: &Diagram, rows: &[ElementId]) -> Vec<String> {
    rows.iter()
        .map(|element_id| {
            let mut haystack = element_id.to_string();
            if let Some(element) = diagram.element(element_id) {
                haystack.push(' ');
                haystack.push_str(element.label());
                haystack.push(' ');
                haystack.push_str(element.variant().tag());
            }
            haystack.to_lowercase()
        })
        .collect()
}

fn substring_score(needle: &str, haystack: &str) -> Option<i64> {
    if needle.is_empty() {
        return None;
    }
    let first = haystack.find(needle)?;
    let mut score = 100_000i64.saturating_sub((first as i64) * 1000);
    score -= haystack.chars().count() as i64;
    if first == 0 {
        score += 20_000;
    }
    if haystack == needle {
        score += 50_000;
    }
    Some(score)
}

fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    if needle.is_empty() {
        return None;
    }
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let mut score = (ratio * 1000.0).round() as i64;
    if haystack.contains(needle) {
        score += 20_000;
    }
    if score <= 0 {
        return None;
    }
    Some(score)
}

/// Row indices ranked best-first; ties keep row order.
fn ranked_rows(haystacks: &[String], query: &str, kind: SearchKind) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(i64, usize)> = haystacks
        .iter()
        .enumerate()
        .filter_map(|(idx, haystack)| {
            let score = match kind {
                SearchKind::Substring => substring_score(&needle, haystack),
                SearchKind::Fuzzy => fuzzy_score(&needle, haystack),
            };
            score.map(|score| (score, idx))
        })
        .collect();

    scored.sort_by(|(score_a, idx_a), (score_b, idx_b)| {
        score_b.cmp(score_a).then_with(|| idx_a.cmp(idx_b))
    });
    scored.into_iter().map(|(_, idx)| idx).collect()
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
