use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nxextract_rs::nxextract::{
    constants::{DEFAULT_OUTPUT_DIR, ORG_TABLE},
    helpers::extract_records,
    types::{ChecksumMismatch, ExtractOptions},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::{
    env,
    fs::{self, File},
    io::{self, BufReader, Stdout},
    path::{Path, PathBuf},
};

#[derive(Debug, Clone)]
struct Outcome {
    output_dir: String,
    written: usize,
    mismatches: Vec<ChecksumMismatch>,
}

#[derive(Debug, Clone)]
enum AppState {
    FileBrowser,
    Success(Outcome),
    Error(String),
}

#[derive(Debug)]
struct App {
    state: AppState,
    files: Vec<PathBuf>,
    selected_file: ListState,
    current_dir: PathBuf,
    output_dir: PathBuf,
}

fn is_executable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
}

impl App {
    fn new() -> anyhow::Result<App> {
        let current_dir = env::current_dir()?;
        let output_dir = current_dir.join(DEFAULT_OUTPUT_DIR);

        let mut app = App {
            state: AppState::FileBrowser,
            files: Vec::new(),
            selected_file: ListState::default(),
            current_dir,
            output_dir,
        };

        app.refresh_files()?;
        Ok(app)
    }

    fn refresh_files(&mut self) -> anyhow::Result<()> {
        self.files.clear();

        for entry in fs::read_dir(&self.current_dir)? {
            let path = entry?.path();
            if path.is_file() && is_executable(&path) {
                self.files.push(path);
            }
        }

        self.files.sort();
        self.selected_file
            .select(if self.files.is_empty() { None } else { Some(0) });
        Ok(())
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }

        let i = match self.selected_file.selected() {
            Some(i) if i + 1 < self.files.len() => i + 1,
            _ => 0,
        };
        self.selected_file.select(Some(i));
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }

        let i = match self.selected_file.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.selected_file.select(Some(i));
    }

    fn extract_selected_file(&mut self) {
        let Some(file_path) = self
            .selected_file
            .selected()
            .and_then(|i| self.files.get(i))
        else {
            return;
        };

        self.state = match self.extract_file(file_path) {
            Ok(outcome) => AppState::Success(outcome),
            Err(e) => AppState::Error(format!("{:#}", e)),
        };
    }

    fn extract_file(&self, exe_path: &Path) -> anyhow::Result<Outcome> {
        let mut source = BufReader::new(File::open(exe_path)?);
        let report = extract_records(
            ORG_TABLE,
            &mut source,
            &self.output_dir,
            ExtractOptions::default(),
        )?;

        Ok(Outcome {
            output_dir: self.output_dir.display().to_string(),
            written: report.written.len(),
            mismatches: report.mismatches,
        })
    }

    fn reset_to_browser(&mut self) {
        self.state = AppState::FileBrowser;
    }
}

pub fn run_tui() -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = App::new().and_then(|mut app| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match &app.state {
                AppState::FileBrowser => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                    KeyCode::Enter => app.extract_selected_file(),
                    KeyCode::Char('r') => app.refresh_files()?,
                    _ => {}
                },
                AppState::Success(_) | AppState::Error(_) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Enter | KeyCode::Char(' ') => app.reset_to_browser(),
                    _ => {}
                },
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new("nxextract")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let instructions = match &app.state {
        AppState::FileBrowser => "↑/↓: Navigate | Enter: Extract | R: Refresh | Q/Esc: Quit",
        AppState::Success(_) | AppState::Error(_) => {
            "Enter/Space: Back to file browser | Q/Esc: Quit"
        }
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);

    match &app.state {
        AppState::FileBrowser => render_file_browser(f, chunks[1], app),
        AppState::Success(outcome) => render_success(f, chunks[1], outcome),
        AppState::Error(error_msg) => render_error(f, chunks[1], error_msg),
    }
}

fn render_file_browser(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let block = Block::default()
        .title("Executables")
        .borders(Borders::ALL)
        .style(Style::default());

    if app.files.is_empty() {
        let no_files = Paragraph::new("No .exe files found in current directory")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(no_files, area);
        return;
    }

    let items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| {
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown");
            ListItem::new(Line::from(Span::raw(filename)))
        })
        .collect();

    let files_list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::White));

    f.render_stateful_widget(files_list, area, &mut app.selected_file.clone());
}

fn render_success(f: &mut Frame, area: ratatui::layout::Rect, outcome: &Outcome) {
    let (title, color) = if outcome.mismatches.is_empty() {
        ("Success", Color::Green)
    } else {
        ("Extracted with warnings", Color::Yellow)
    };

    let mut lines = vec![
        Line::from(format!(
            "✓ Wrote {} files to {}",
            outcome.written, outcome.output_dir
        )),
        Line::from(""),
    ];

    for mismatch in &outcome.mismatches {
        lines.push(Line::from(format!(
            "! {} failed checksum (expected {:#010x}, got {:#010x})",
            mismatch.name, mismatch.expected, mismatch.actual
        )));
    }
    if !outcome.mismatches.is_empty() {
        lines.push(Line::from(""));
    }
    lines.push(Line::from("Press Enter or Space to continue"));

    let success = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(success, area);
}

fn render_error(f: &mut Frame, area: ratatui::layout::Rect, error_msg: &str) {
    let error_text = format!(
        "✗ Extraction failed:\n\n{}\n\nPress Enter or Space to continue",
        error_msg
    );

    let error = Paragraph::new(error_text)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Error").borders(Borders::ALL));

    f.render_widget(error, area);
}
