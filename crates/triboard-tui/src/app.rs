use crate::events::{Event, EventHandler};
use crate::layout::BoardLayout;
use crate::modal::Modal;
use crate::ui;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Instant;
use triboard_core::{AppConfig, BoardResult};
use triboard_domain::{commands::Command, BoardState, ColumnId, DragSession};
use triboard_persistence::BoardRepository;

pub struct App {
    pub should_quit: bool,
    pub board: BoardState,
    pub drag: DragSession,
    pub modal: Option<Modal>,
    pub layout: BoardLayout,
    /// Index of the first drawn card in each column.
    pub scroll: [usize; 3],
    /// One-line message at the bottom, e.g. a failed save.
    pub status: Option<String>,
    pub config: AppConfig,
    repository: BoardRepository,
}

impl App {
    pub fn new(board: BoardState, repository: BoardRepository, config: AppConfig) -> Self {
        Self {
            should_quit: false,
            board,
            drag: DragSession::default(),
            modal: None,
            layout: BoardLayout::default(),
            scroll: [0; 3],
            status: None,
            config,
            repository,
        }
    }

    /// Builds the app from whatever the repository holds; an unreadable entry
    /// yields an empty board.
    pub async fn load(repository: BoardRepository, config: AppConfig) -> Self {
        let board = repository.load().await;
        Self::new(board, repository, config)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn resize(&mut self, area: Rect) {
        self.layout = BoardLayout::compute(area, &self.board, self.scroll);
        self.scroll = self.layout.scroll_offsets();
    }

    /// Moves the first drawn card of `column` by `delta`, within the cards
    /// the column holds.
    pub fn scroll_column(&mut self, column: ColumnId, delta: isize) {
        let offset = &mut self.scroll[column.index()];
        *offset = offset.saturating_add_signed(delta);
        self.relayout();
    }

    pub fn relayout(&mut self) {
        self.resize(self.layout.area);
    }

    /// Runs `command` against the board and saves the result. A failed save is
    /// reported on the status line; the in-memory change is kept.
    pub async fn execute_command(&mut self, command: impl Command) -> BoardResult<()> {
        let description = command.description();
        command.execute(&mut self.board)?;
        tracing::debug!("Executed: {}", description);
        self.persist().await;
        self.relayout();
        Ok(())
    }

    async fn persist(&mut self) {
        match self.repository.save(&self.board).await {
            Ok(()) => self.status = None,
            Err(e) => {
                tracing::error!("Failed to save board: {}", e);
                self.status = Some(format!("Could not save board: {}", e));
            }
        }
    }

    pub async fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key).await,
            Event::Mouse(mouse) => self.handle_mouse_event(mouse).await,
            Event::Resize(width, height) => self.resize(Rect::new(0, 0, width, height)),
            Event::FocusLost => self.cancel_drag(),
            Event::Tick => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.clear_expired_flash(Instant::now());
                }
            }
        }
    }

    pub async fn run(&mut self) -> BoardResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> BoardResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(event) => self.handle_event(event).await,
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
