use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use typeahead::App;
use typeahead::config::{self, Config};
use typeahead::item::ItemReader;

/// Interactive picker over a JSON list of items
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive picker with debounced, cancellable search over a JSON item list"
)]
struct Args {
    /// JSON file with an array of {id, label, value} items (if not provided, reads from stdin)
    items: Option<PathBuf>,

    /// Minimum characters before searching
    #[arg(long)]
    min_chars: Option<usize>,

    /// Quiet period after the last keystroke, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Artificial delay added to every search, in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Text shown in the empty input
    #[arg(long)]
    placeholder: Option<String>,
}

impl Args {
    /// Command line flags win over the config file
    fn apply_to(&self, config: &mut Config) {
        if let Some(min_chars) = self.min_chars {
            config.autocomplete.min_chars = min_chars;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.autocomplete.debounce_ms = debounce_ms;
        }
        if let Some(latency_ms) = self.latency_ms {
            config.picker.latency_ms = latency_ms;
        }
        if let Some(placeholder) = &self.placeholder {
            config.autocomplete.placeholder = placeholder.clone();
        }
    }
}

fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let mut config_result = config::load_config();

    let args = Args::parse();
    args.apply_to(&mut config_result.config);

    // Read items before touching the terminal so errors reach stderr intact
    let items = ItemReader::read_items(args.items.as_deref())?;

    let terminal = init_terminal()?;

    let mut app = App::new(items, &config_result.config);
    if let Some(warning) = &config_result.warning {
        app.show_warning(warning);
    }

    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    print_confirmed(&app)?;

    log::debug!("typeahead session ended");

    Ok(())
}

/// Append DEBUG records to /tmp/typeahead-debug.log
///
/// Logging stays off when the file cannot be opened.
#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/typeahead-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            let now = chrono::Local::now();
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                now.format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log::debug!("typeahead session started");
}

/// Initialize terminal with raw mode, alternate screen, bracketed paste and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        leave_terminal();
        hook(info);
    }));

    enable_raw_mode()?;

    let entered = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    );
    let terminal = entered.and_then(|()| {
        ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout()))
    });

    terminal.map_err(|e| {
        leave_terminal();
        e.into()
    })
}

/// Best-effort undo of everything `init_terminal` switched on
fn leave_terminal() {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

/// Print the confirmed item as one line of JSON
fn print_confirmed(app: &App) -> Result<()> {
    match app.confirmed_item() {
        Some(item) => println!("{}", serde_json::to_string(item)?),
        None => log::debug!("exited without a selection"),
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    // Cancel anything still in flight before handing the app back
    app.autocomplete.teardown();
    Ok(app)
}
