use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::warn;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode plus alternate screen for the lifetime of one run.
///
/// Dropping the session restores the terminal best-effort, and a panic hook
/// does the same so a crash never leaves the shell in raw mode.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore_terminal();
                Err(error)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if let Err(error) = execute!(stdout, Show, LeaveAlternateScreen) {
        warn!("failed to restore terminal: {error}");
    }
}
