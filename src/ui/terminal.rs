//! Scoped ownership of the terminal mouse subscription.
//!
//! Mouse reporting is process-wide terminal state: once enabled, every click
//! anywhere on screen is delivered as an event, which is how clicks outside
//! the detail overlay are noticed. [`MouseCapture`] enables it once when the
//! widget session starts and disables it when dropped, so every exit path
//! (normal quit, `?` error, unwinding) gives it back.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::io::{self, Write};

pub struct MouseCapture<W: Write> {
    out: W,
    attached: bool,
}

impl<W: Write> MouseCapture<W> {
    pub fn attach(mut out: W) -> io::Result<Self> {
        execute!(out, EnableMouseCapture)?;
        Ok(Self {
            out,
            attached: true,
        })
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Release now, reporting failure instead of swallowing it like `Drop`.
    pub fn detach(mut self) -> io::Result<()> {
        self.release()
    }

    fn release(&mut self) -> io::Result<()> {
        if self.attached {
            self.attached = false;
            execute!(self.out, DisableMouseCapture)?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for MouseCapture<W> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            log::warn!("Failed to disable mouse capture: {}", e);
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    const ENABLE: &str = "\x1b[?1000h";
    const DISABLE: &str = "\x1b[?1000l";

    #[test]
    fn test_drop_releases_capture() {
        let mut buffer = Vec::new();
        {
            let capture = MouseCapture::attach(&mut buffer).expect("attach");
            assert!(capture.is_attached());
        }

        let written = String::from_utf8_lossy(&buffer);
        assert_eq!(written.matches(ENABLE).count(), 1);
        assert_eq!(written.matches(DISABLE).count(), 1);
    }

    #[test]
    fn test_detach_releases_exactly_once() {
        let mut buffer = Vec::new();
        let capture = MouseCapture::attach(&mut buffer).expect("attach");
        capture.detach().expect("detach");

        let written = String::from_utf8_lossy(&buffer);
        assert_eq!(written.matches(DISABLE).count(), 1);
    }

    #[test]
    fn test_release_during_unwind() {
        let mut buffer = Vec::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _capture = MouseCapture::attach(&mut buffer).expect("attach");
            panic!("render failed");
        }));
        assert!(result.is_err());

        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains(DISABLE));
    }
}
