use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen, size,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Full-screen text display
pub struct Terminal {
    width: u16,
    height: u16,
}

impl Terminal {
    /// Switch to the alternate screen in raw mode; undone on drop
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;

        Ok(Self { width, height })
    }

    /// Redraw a whole text frame from the top-left corner.
    ///
    /// Lines are positioned one by one since raw mode does not move to the
    /// start of the next line on `\n`. Anything past the screen edge is
    /// dropped.
    pub fn draw_frame(&mut self, frame: &str, status: Option<&str>) -> io::Result<()> {
        let (width, height) = size().unwrap_or((self.width, self.height));
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            execute!(stdout(), Clear(ClearType::All))?;
        }

        let (lines, status) = fit_frame(frame, status, width, height);
        let mut out = stdout();
        let mut y = 0u16;
        for line in lines {
            queue!(out, MoveTo(0, y), Print(line), Clear(ClearType::UntilNewLine))?;
            y += 1;
        }

        if let Some(status) = status {
            queue!(
                out,
                MoveTo(0, y),
                SetAttribute(Attribute::Reverse),
                Print(status),
                SetAttribute(Attribute::Reset),
                Clear(ClearType::UntilNewLine)
            )?;
        }

        out.flush()
    }

    /// Wait for a keypress with timeout
    pub fn wait_key(&self, timeout: Duration) -> io::Result<Option<(KeyCode, KeyModifiers)>> {
        if poll(timeout)? {
            if let Event::Key(key_event) = read()? {
                if key_event.kind != KeyEventKind::Release {
                    return Ok(Some((key_event.code, key_event.modifiers)));
                }
            }
        }
        Ok(None)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Frame lines and status that fit a `width` x `height` screen. The status
/// line takes the last row.
fn fit_frame<'a>(
    frame: &'a str,
    status: Option<&'a str>,
    width: u16,
    height: u16,
) -> (Vec<&'a str>, Option<&'a str>) {
    let width = width as usize;
    let status = status.filter(|_| height > 0).map(|s| clip(s, width));
    let rows = height as usize - usize::from(status.is_some());
    let lines = frame.lines().take(rows).map(|l| clip(l, width)).collect();
    (lines, status)
}

fn clip(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((i, _)) => &line[..i],
        None => line,
    }
}
