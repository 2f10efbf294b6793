use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env, Target};
use ratatui::{backend::TermionBackend, Terminal};
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use vimirror::config::Config;
use vimirror::document::tree::BlockTree;
use vimirror::editor::dispatcher::Vim;
use vimirror::file::loader::{load_file, load_from_stdin, parse_text};
use vimirror::input::InputHandler;
use vimirror::session::Session;
use vimirror::ui::UI;

const SAMPLE: &str = "Welcome to vimirror.
Press i to insert before the cursor, a to append after it.
Escape returns to normal mode; h l w b j k move around.

> Quoted blocks are skipped over
> one line at a time.

The end.";

/// vimirror - Vim-style modal navigation over a block document
#[derive(Parser)]
#[command(name = "vimirror")]
#[command(version)]
#[command(about = "Vim-style modal navigation over a block document", long_about = None)]
struct Cli {
    /// Text file to open (omit to read from stdin if piped, or open a sample document)
    file: Option<String>,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Hide block numbers in the document view
    #[arg(long)]
    no_line_numbers: bool,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// Without this, panic messages would be hidden by the alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Sends log output to `path`. Nothing is logged without one, since the
/// terminal belongs to the UI.
fn setup_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    setup_logging(cli.log_file.as_ref())?;

    // Read the document before taking over the terminal, stdin may hold it
    let (tree, filename, stdin_was_piped) = if let Some(file_path) = cli.file {
        let tree = load_file(&file_path)?;
        (tree, Some(file_path), false)
    } else if !io::stdin().is_terminal() {
        (load_from_stdin()?, None, true)
    } else {
        (parse_text(SAMPLE), None, false)
    };
    log::info!(
        "opened {} with {} blocks",
        filename.as_deref().unwrap_or("[No Name]"),
        tree.blocks().len()
    );

    let config = Config::load();
    let show_line_numbers = config.show_line_numbers && !cli.no_line_numbers;

    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut ui = UI::new(show_line_numbers);
    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let mut session = new_session(tree, filename);
    let mut vim = Vim::new(
        &session,
        config.compile_keymap(),
        &config.cursor_class,
        Some(Box::new(|mode: &str| log::info!("mode changed to {}", mode))),
    );

    let result = run_event_loop(
        &mut terminal,
        &mut ui,
        &mut input_handler,
        &mut vim,
        &mut session,
    );

    // Termion restores the screen through Drop guards; the cursor needs showing
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn new_session(tree: BlockTree, filename: Option<String>) -> Session {
    let mut session = Session::at_start(tree);
    if let Some(name) = filename {
        session.set_filename(name);
    }
    session
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    vim: &mut Vim,
    session: &mut Session,
) -> Result<()> {
    loop {
        ui.render(terminal, vim, session, input_handler.last_error())?;

        match input_handler.poll_event(Duration::from_millis(100))? {
            Some(event) => {
                if input_handler.handle_event(event, vim, session)? {
                    break;
                }
            }
            None => break,
        }
    }

    Ok(())
}
