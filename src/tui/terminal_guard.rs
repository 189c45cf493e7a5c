//! Raw-mode terminal session that is always handed back to the shell.
//!
//! The session is restored on drop, from the panic hook, and from the
//! termination-signal thread, whichever comes first. Restoring twice is a no-op.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminal mode switches, split out so the session can be tested without a tty.
pub trait TerminalOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermOps;

impl TerminalOps for CrosstermOps {
    fn enter(&self) -> io::Result<()> {
        use crossterm::event::EnableMouseCapture;
        use crossterm::execute;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::event::DisableMouseCapture;
        use crossterm::execute;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        // Run both steps even when the first fails.
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        raw.and(screen)
    }
}

/// Cloneable handle that leaves the session at most once.
#[derive(Clone)]
pub struct SessionRestorer {
    left: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl SessionRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.leave()
    }

    pub fn is_restored(&self) -> bool {
        self.left.load(Ordering::SeqCst)
    }
}

pub struct TerminalSession {
    restorer: SessionRestorer,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            restorer: SessionRestorer {
                left: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> SessionRestorer {
        self.restorer.clone()
    }

    /// Leaves the session before the previous panic hook prints, so the
    /// message lands on the normal screen.
    pub fn restore_on_panic(&self) {
        let restorer = self.restorer();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restorer.restore();
            previous(info);
        }));
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to the event loop; if the loop does not exit
/// within the grace period the terminal is restored and the process exits.
#[cfg(unix)]
pub fn watch_termination_signals(
    restorer: SessionRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    const GRACE: Duration = Duration::from_secs(2);

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("termination-signals".to_string())
        .spawn(move || {
            let Some(raw) = signals.forever().next() else {
                return;
            };
            let signal = if raw == SIGINT {
                TerminationSignal::Interrupt
            } else {
                TerminationSignal::Terminate
            };
            tracing::info!(?signal, "termination signal received");
            let _ = tx.send(signal);

            std::thread::sleep(GRACE);
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
