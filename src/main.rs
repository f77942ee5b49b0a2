use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::Target;
use jotter::cli;
use jotter::clipboard::Clipboard;
use jotter::config::JotterConfig;
use jotter::editor::Editor;
use jotter::keymap::{key_to_command, mouse_to_command};
use jotter::ui::Theme;
use jotter::ui::renderer::TuiRenderer;
use log::LevelFilter;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Application entry point: parse arguments, load the configuration, open the startup file if one
/// was given, then run the event loop until the editor asks to close. The terminal is restored
/// on every exit path, errors included.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first (before terminal setup)
    let cli_args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    init_logger(cli_args.log_file.as_deref())?;

    let config = JotterConfig::load(cli_args.config.as_deref())?;
    let theme = Theme::from_config(&config.theme)?;
    let clipboard = Clipboard::new();
    log::info!(
        "using the {} clipboard",
        if clipboard.is_system() { "system" } else { "internal" }
    );
    let mut editor = Editor::with_config(&config, clipboard);

    // Open the startup file, if any
    if let Some(path) = &cli_args.file {
        if cli_args.is_directory() {
            log::warn!("'{}' is a directory, starting with an empty document", path.display());
        } else if editor.open_file(path).is_err() {
            // The error dialog is already up; continue with an empty document
            log::debug!("startup file {} not opened", path.display());
        }
    }

    let _guard = TerminalGuard::enter()?;
    let mut renderer = TuiRenderer::new(theme)?;
    let refresh = Duration::from_millis(config.refresh_interval_ms);
    run(&mut renderer, &mut editor, refresh)
}

// xterm window title stack: push on entry, pop on exit
const PUSH_TITLE: &[u8] = b"\x1b[22;0t";
const POP_TITLE: &[u8] = b"\x1b[23;0t";

/// Raw mode, alternate screen, mouse capture and the saved window title. Dropping the guard
/// undoes whatever `enter` managed to set up, on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        // From here on a failure still restores the terminal through Drop
        let guard = Self;
        let mut stdout = io::stdout();
        stdout.write_all(PUSH_TITLE)?;
        crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = crossterm::execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
        let _ = stdout.write_all(POP_TITLE);
        let _ = stdout.flush();
        let _ = disable_raw_mode();
    }
}

fn init_logger(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder
                .filter_level(LevelFilter::Info)
                .target(Target::Pipe(Box::new(file)));
        }
        // stderr shares the screen with the editor
        None => {
            builder.filter_level(LevelFilter::Warn);
        }
    }
    // RUST_LOG still overrides the default level
    builder.parse_default_env().init();
    Ok(())
}

/// Draw, wait for input up to one refresh tick, dispatch, repeat
fn run(renderer: &mut TuiRenderer, editor: &mut Editor, refresh: Duration) -> anyhow::Result<()> {
    loop {
        let layout = renderer.layout(editor)?;
        let text = layout.text;
        if editor.viewport.rows != text.height as usize || editor.viewport.cols != text.width as usize
        {
            editor.handle_resize(text.height, text.width);
        }

        renderer.draw(editor, &layout)?;

        if !event::poll(refresh)? {
            // Timeout - keep the gutter in step with the buffer
            editor.tick();
            continue;
        }

        let command = match event::read()? {
            Event::Key(key_event) => key_to_command(key_event, editor.mode()),
            Event::Mouse(mouse_event) => {
                mouse_to_command(mouse_event, editor.mode(), &layout, editor.menu.as_ref())
            }
            // The next iteration picks up the new size
            Event::Resize(..) => None,
            _ => None,
        };

        if let Some(cmd) = command
            && editor.execute_command(cmd)
        {
            log::info!("window closed");
            return Ok(());
        }
    }
}
