use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

struct FailingOps;

impl TerminalOps for FailingOps {
    fn enter(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "not a tty"))
    }

    fn leave(&self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn session_leaves_terminal_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _session = TerminalSession::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn restorer_leaves_only_once() {
    let ops = Arc::new(MockOps::default());
    let session = TerminalSession::with_ops(ops.clone()).unwrap();
    let restorer = session.restorer();

    assert!(!restorer.is_restored());
    restorer.restore().unwrap();
    restorer.restore().unwrap();
    assert!(restorer.is_restored());
    drop(session);

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_enter_is_reported() {
    assert!(TerminalSession::with_ops(Arc::new(FailingOps)).is_err());
}

#[test]
fn signals_map_to_shell_exit_codes() {
    assert_eq!(TerminationSignal::Interrupt.exit_code(), 130);
    assert_eq!(TerminationSignal::Terminate.exit_code(), 143);
}
