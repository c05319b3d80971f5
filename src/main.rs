//! Fileplot - A terminal scatter plotter for coordinate files.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fileplot::app::App;
use fileplot::parser::{ParserConfig, RecordParser};
use fileplot::util::LayoutConfig;
use fileplot::{ui, PlotError};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "fileplot")]
#[command(about = "Plot coordinate pairs from a text file", long_about = None)]
struct Args {
    /// Path to the file of x y pairs
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Default point size when a record has no [S] specifier
    #[arg(long, value_name = "S")]
    size: Option<u32>,

    /// Default point colour when a record has no {R,G,B} specifier
    #[arg(long, value_name = "{R,G,B}", value_parser = parse_color_arg)]
    color: Option<fileplot::data::Rgb>,

    /// Line template with %x and %y placeholders, e.g. "(%x, %y)"
    #[arg(long, value_name = "TEMPLATE")]
    format: Option<String>,

    /// Validate the file and print a summary instead of opening the viewer
    #[arg(long)]
    check: bool,
}

fn parse_color_arg(value: &str) -> std::result::Result<fileplot::data::Rgb, String> {
    ParserConfig::parse_color(value).ok_or_else(|| format!("expected {{R,G,B}}, found {value:?}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Fileplot");
    }

    let path = args.file.clone().ok_or(PlotError::MissingArgument)?;
    let config = ParserConfig::from_options(args.size, args.color, args.format.as_deref())?;
    let parser = RecordParser::new(config);

    // Load fully before the terminal is touched
    let app = App::load(&path, &parser, LayoutConfig::default())?;

    if args.check {
        println!("{}", app.summary());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;

    if args.log.is_some() {
        tracing::info!("Fileplot exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        // Any event, including a resize, falls through to a repaint
        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.modifiers, key.code) {
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                        app.quit();
                    },
                    _ => {},
                }
            }
        }
    }

    Ok(())
}
