use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use segments::build_info;
use segments::constants::{INPUT_POLL_MS, TICK_INTERVAL_MS};
use segments::game::{process_ai_thinking, process_input, GameSession, SessionInput};
use segments::ui::draw_ui;
use segments::GameConfig;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if let Some(first) = args.get(1) {
        match first.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
    }

    let mut config = load_config();
    if let Err(message) = config.apply_args(args.get(1..).unwrap_or_default()) {
        eprintln!("{}", message);
        eprintln!("Run 'segments --help' for usage.");
        std::process::exit(1);
    }

    let mut session = GameSession::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut session);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result?;
    let scores = session.state.scores();
    println!("Final score - X: {}  O: {}", scores.x, scores.o);

    Ok(())
}

/// Load the config file, falling back to defaults with a warning.
fn load_config() -> GameConfig {
    let path = match GameConfig::default_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Warning: {}; using default settings", e);
            return GameConfig::default();
        }
    };
    match GameConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: could not read {}: {}; using default settings",
                path.display(),
                e
            );
            GameConfig::default()
        }
    }
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, session))?;

        // Poll for input (non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                let input = match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        break
                    }
                    KeyCode::Up | KeyCode::Char('k') => SessionInput::Up,
                    KeyCode::Down | KeyCode::Char('j') => SessionInput::Down,
                    KeyCode::Left | KeyCode::Char('h') => SessionInput::Left,
                    KeyCode::Right | KeyCode::Char('l') => SessionInput::Right,
                    KeyCode::Enter | KeyCode::Char(' ') => SessionInput::Place,
                    KeyCode::Char('u') | KeyCode::Char('U') => SessionInput::Undo,
                    KeyCode::Char('r') | KeyCode::Char('R') => SessionInput::Reset,
                    _ => SessionInput::Other,
                };
                process_input(session, input);
            }
        }

        // Advisor pacing runs on the game tick
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            process_ai_thinking(session);
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn print_help() {
    println!("Segments - score lines of three and four on a 10x10 board\n");
    println!("Usage: segments [options]\n");
    println!("Options:");
    println!("  --ai <X|O|off>  Marker played by the advisor (default O)");
    println!("  --delay <ms>    Advisor thinking delay (default 400)");
    println!("  --version       Show version information");
    println!("  --help          Show this help message\n");
    println!("Keys: arrows/hjkl move, Enter/Space place, U undo, R reset, Q quit");
    if let Ok(path) = GameConfig::default_path() {
        println!("\nConfig file: {}", path.display());
    }
}
