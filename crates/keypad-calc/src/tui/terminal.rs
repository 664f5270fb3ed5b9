//! Interactive terminal session

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::debug;

use super::app::TerminalApp;
use super::render::render_lines;

/// Poll interval; also bounds how late a press highlight is cleared
const FRAME: Duration = Duration::from_millis(30);

/// Runs the app until the user quits, restoring the terminal afterwards
pub fn run(app: &mut TerminalApp) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    enter_screen(&mut stdout, disable_raw_mode)?;

    let result = event_loop(app, &mut stdout);

    let restored = execute!(stdout, Show, LeaveAlternateScreen);
    disable_raw_mode()?;
    result.and(restored)
}

/// Switches to the alternate screen, calling `undo_raw` if that fails
fn enter_screen<W, F>(out: &mut W, undo_raw: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
        let _ = execute!(out, Show, LeaveAlternateScreen);
        let _ = undo_raw();
        return Err(err);
    }
    Ok(())
}

fn event_loop<W: Write>(app: &mut TerminalApp, out: &mut W) -> io::Result<()> {
    let mut last = Instant::now();

    while !app.should_quit() {
        draw(app, out)?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                let action = app.handle_key(key);
                debug!(?action, "key");
            }
        }

        let now = Instant::now();
        app.tick(now.duration_since(last));
        last = now;
    }

    Ok(())
}

/// Draws one frame
pub fn draw<W: Write>(app: &TerminalApp, out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in render_lines(app).iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row), Print(line))?;
    }
    out.flush()
}
