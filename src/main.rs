use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event;
use lowcode_explorer::app::{EventResult, Workbench};
use lowcode_explorer::kernel::services::adapters::{
    demo_canvas, demo_workspace, ensure_settings_file, load_canvas, load_settings,
    load_settings_from, load_workspace, FixtureError, TracingAnalytics,
};
use lowcode_explorer::kernel::services::ports::Settings;
use lowcode_explorer::tui::terminal_guard::{TerminalSession, TerminationSignal};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const USAGE: &str = "usage: lowcode-explorer [--canvas FILE] [--apps FILE] [--settings FILE]";

#[derive(Debug, Default)]
struct Args {
    canvas: Option<PathBuf>,
    apps: Option<PathBuf>,
    settings: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "--canvas" => &mut parsed.canvas,
            "--apps" => &mut parsed.apps,
            "--settings" => &mut parsed.settings,
            other => return Err(format!("unknown argument: {other}")),
        };
        let value = args.next().ok_or_else(|| format!("{arg} needs a path"))?;
        *slot = Some(PathBuf::from(value));
    }
    Ok(parsed)
}

fn resolve_settings(path: Option<&PathBuf>) -> Settings {
    if let Some(path) = path {
        return load_settings_from(path);
    }
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    load_settings().unwrap_or_default()
}

fn fixture_error(what: &str, err: FixtureError) -> io::Error {
    tracing::error!(fixture = what, error = %err, "cannot load fixture");
    io::Error::new(io::ErrorKind::InvalidData, format!("{what}: {err}"))
}

fn build_workbench(args: &Args, settings: &Settings) -> io::Result<Workbench> {
    let canvas = match &args.canvas {
        Some(path) => load_canvas(path),
        None => demo_canvas(),
    }
    .map_err(|err| fixture_error("canvas", err))?;
    let workspace = match &args.apps {
        Some(path) => load_workspace(path),
        None => demo_workspace(),
    }
    .map_err(|err| fixture_error("workspace", err))?;

    tracing::info!(
        workspace_id = %workspace.workspace_id,
        applications = workspace.applications.len(),
        "workspace loaded"
    );
    let state = workspace.into_app_state(canvas);
    Ok(Workbench::new(state, settings, Box::new(TracingAnalytics)))
}

fn run(workbench: &mut Workbench) -> io::Result<Option<TerminationSignal>> {
    let session = TerminalSession::start()?;
    session.restore_on_panic();

    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    lowcode_explorer::tui::terminal_guard::watch_termination_signals(
        session.restorer(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
        })?;

        if event::poll(POLL_INTERVAL)? {
            let ev = event::read()?;
            if workbench.handle_event(&ev) == EventResult::Quit {
                return Ok(None);
            }
        }

        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(Some(signal));
        }
    }
}

fn main() -> io::Result<()> {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let logging = logging::init();
    let settings = resolve_settings(args.settings.as_ref());
    let mut workbench = build_workbench(&args, &settings)?;

    let signal = run(&mut workbench)?;
    tracing::info!(?signal, "exiting");
    drop(logging);

    if let Some(signal) = signal {
        std::process::exit(signal.exit_code());
    }
    Ok(())
}
