use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use insight_lens_config::Config;
use insight_lens_engine::io;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

mod render;

const SCROLL_STEP: u16 = 10;

struct App {
    answers_root: PathBuf,
    files: Vec<PathBuf>,
    file_list_state: ListState,
    current_content: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(answers_path: PathBuf) -> Result<Self> {
        // A single file is shown on its own; a directory is scanned.
        let (answers_root, files) = if answers_path.is_file() {
            let root = answers_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            (root, vec![answers_path])
        } else {
            let files = io::scan_answer_files(&answers_path)?;
            (answers_path, files)
        };

        let mut app = Self {
            answers_root,
            files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
            scroll: 0,
        };

        // Select first item if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(SCROLL_STEP);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        if let Some(index) = self.file_list_state.selected()
            && let Some(path) = self.files.get(index)
        {
            self.current_content = match io::read_answer(path) {
                Ok(view) => render::view_lines(&view),
                Err(e) => {
                    log::warn!("Failed to load {}: {e}", path.display());
                    vec![Line::from(format!("Error loading answer: {e}"))]
                }
            };
        }
    }

    fn display_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.answers_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Determine answers path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let answers_path;
    let from_config;

    if args.len() == 2 {
        answers_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                answers_path = config.answers_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No answers path provided and no config file found");
                eprintln!("Usage: {} <answers-folder-or-file>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <answers-folder-or-file>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [answers-folder-or-file]", args[0]);
        process::exit(1);
    };

    if !answers_path.is_file()
        && let Err(e) = io::validate_answers_dir(&answers_path)
    {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Answers path '{}'{} is invalid: {e}",
            answers_path.display(),
            source
        );
        process::exit(1);
    }

    if !from_config {
        remember_answers_path(&config_path, &answers_path);
    }

    log::info!("Loading answers from {}", answers_path.display());
    let mut app = App::new(answers_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Makes the first answers path given on the command line the default for
/// later runs. Failures are logged and otherwise ignored.
fn remember_answers_path(config_path: &Path, answers_path: &Path) {
    let absolute = answers_path
        .canonicalize()
        .unwrap_or_else(|_| answers_path.to_path_buf());
    match Config::new(absolute).save_if_absent(config_path) {
        Ok(true) => log::info!("Saved answers path to {}", config_path.display()),
        Ok(false) => {}
        Err(e) => log::warn!("Could not save config: {e}"),
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(),
                KeyCode::PageUp | KeyCode::Char('b') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Answer list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| ListItem::new(Line::from(app.display_name(path))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Answers"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Analysis panel
    let content_text = if app.files.is_empty() {
        vec![Line::from("No saved answers found")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("AI Analysis"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgDn/Space: Scroll down | PgUp/b: Scroll up"),
    ]));

    f.render_widget(help, rows[1]);
}
