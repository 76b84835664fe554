//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: translating terminal events into messages,
//! applying them to [`AppState`], and rendering the dashboard.

use chrono::{Local, NaiveDate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::{info, trace};
use triage_config::Config;
use triage_protocol::{KanbanBoard, Message, TaskStore, ViewMode};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    layout::{
        FILTER_BAR_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH,
        STATS_BAR_HEIGHT, STATUS_BAR_HEIGHT,
    },
    terminal::AppTerminal,
    widgets::{
        BoardCursor, ListCursor, render_board, render_filter_bar, render_help_overlay,
        render_stats_bar, render_status_bar, render_task_list,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    clock: fn() -> NaiveDate,
}

/// Reads the current date from the local clock.
fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl App {
    /// Creates a new application over `store`, with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use triage_protocol::TaskStore;
    /// use triage_tui::App;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    /// let app = App::new(TaskStore::default(), today);
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(store: TaskStore, today: NaiveDate) -> Self {
        Self {
            state: AppState::new(store, today),
            should_quit: false,
            clock: local_today,
        }
    }

    /// Creates a new application over `store`, using the configured actor,
    /// upcoming window and starting view.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use triage_config::Config;
    /// use triage_protocol::{TaskStore, ViewMode};
    /// use triage_tui::App;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    /// let config = Config {
    ///     default_view: ViewMode::Kanban,
    ///     ..Config::default()
    /// };
    /// let app = App::with_config(TaskStore::default(), today, &config);
    /// assert_eq!(app.state().view_mode, ViewMode::Kanban);
    /// ```
    #[must_use]
    pub fn with_config(store: TaskStore, today: NaiveDate, config: &Config) -> Self {
        Self {
            state: AppState::with_config(store, today, config),
            should_quit: false,
            clock: local_today,
        }
    }

    /// Replaces the clock consulted by [`App::refresh_today`].
    ///
    /// Defaults to the local date.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Re-reads the date from the clock so due labels and counters follow
    /// the calendar while the dashboard stays open.
    pub fn refresh_today(&mut self) {
        let today = (self.clock)();
        if today != self.state.today {
            info!(from = %self.state.today, to = %today, "date changed");
            self.state.today = today;
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether the application has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// While the help overlay is visible, any message other than `Quit`
    /// only dismisses it.
    pub fn update(&mut self, msg: Message) {
        trace!(?msg, "update");

        if self.state.help_visible {
            if msg.is_terminating() {
                self.should_quit = true;
            } else {
                let _ = self.state.dismiss_help();
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::Escape => {
                // Contextual escape: stop editing the query, else collapse
                if self.state.search_editing {
                    self.state.end_search();
                } else {
                    self.state.collapse();
                }
            }

            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),

            Message::ToggleExpand => self.state.toggle_expand(),
            Message::ToggleStar => self.state.toggle_star(),
            Message::NextSubtask => self.state.next_subtask(),
            Message::ToggleSubtask => self.state.toggle_subtask(),
            Message::ToggleView => self.state.toggle_view(),

            Message::StartSearch => self.state.start_search(),
            Message::SearchInput { ch } => self.state.push_search_char(ch),
            Message::SearchBackspace => self.state.pop_search_char(),
            Message::EndSearch => self.state.end_search(),

            Message::CycleStatus => self.state.cycle_status(),
            Message::CyclePriority => self.state.cycle_priority(),
            Message::CycleCategory => self.state.cycle_category(),
            Message::ClearFilters => self.state.clear_filters(),

            Message::ToggleHelp => self.state.toggle_help(),
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        let [header_area, stats_area, filter_area, content_area, status_area] =
            Layout::vertical([
                Constraint::Length(if show_header { HEADER_HEIGHT } else { 0 }),
                Constraint::Length(STATS_BAR_HEIGHT),
                Constraint::Length(FILTER_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(area);

        let ids = self.state.visible_ids();
        let state = &self.state;
        let tasks = state.tasks_for(&ids);

        if show_header {
            render_header(frame, state.view_mode, state.today, header_area);
        }

        let buf = frame.buffer_mut();
        render_stats_bar(&state.stats(), stats_area, buf);
        render_filter_bar(
            &state.filter,
            state.search_editing,
            tasks.len(),
            state.store.len(),
            filter_area,
            buf,
        );

        match state.view_mode {
            ViewMode::List => {
                let cursor = ListCursor {
                    row: state.selected_row,
                    expanded: state.expanded,
                    subtask: state.subtask_cursor,
                };
                render_task_list(
                    &tasks,
                    cursor,
                    state.today,
                    state.window_days,
                    content_area,
                    buf,
                );
            }
            ViewMode::Kanban => {
                let board = KanbanBoard::partition(&tasks);
                let cursor = BoardCursor {
                    column: state.selected_column,
                    card: state.selected_card,
                };
                render_board(
                    &board,
                    cursor,
                    state.today,
                    state.window_days,
                    content_area,
                    buf,
                );
            }
        }

        render_status_bar(state.view_mode, state.search_editing, status_area, buf);

        if state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop.
    ///
    /// This function returns once the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::Local;
    /// use triage_protocol::seed::seed_store;
    /// use triage_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let today = Local::now().date_naive();
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(seed_store(today)?, today);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        while !self.should_quit {
            self.refresh_today();
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.state.search_editing)
            {
                self.update(msg);
            }
        }

        Ok(())
    }
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        y: area.y + vertical_offset,
        height: area.height.saturating_sub(vertical_offset),
        ..area
    };

    frame.render_widget(paragraph, centered_area);
}

/// Renders the header bar with title, active view, date and help cue.
fn render_header(frame: &mut Frame, view_mode: ViewMode, today: NaiveDate, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, help_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(17), // "Press ? for help" = 16 chars + padding
    ])
    .areas(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "triage",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled("Task Dashboard", Style::default().fg(Color::White)),
        Span::styled(
            format!("  {} view", view_mode.display_name()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!("  {}", today.format("%a %b %-d, %Y")),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(title, title_area);

    let help_cue = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" for help", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(help_cue, help_area);
}
