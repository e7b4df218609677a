//! Line-oriented output shared by the demos.
//!
//! The demos print to stdout; tests swap in a capture buffer so the printed
//! lines can be asserted on.

use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub struct Console {
    capture: Option<Arc<Mutex<Vec<String>>>>,
    echo: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    pub fn stdout() -> Self {
        Self {
            capture: None,
            echo: true,
        }
    }

    /// A console that records lines instead of printing them.
    pub fn capture() -> Self {
        Self {
            capture: Some(Arc::new(Mutex::new(Vec::new()))),
            echo: false,
        }
    }

    /// Prints every line and records it as well.
    pub fn tee() -> Self {
        Self {
            capture: Some(Arc::new(Mutex::new(Vec::new()))),
            echo: true,
        }
    }

    pub fn line(&self, text: impl Into<String>) {
        let text = text.into();
        if self.echo {
            println!("{}", text);
        }
        if let Some(buffer) = &self.capture {
            buffer
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(text);
        }
    }

    /// Lines recorded so far; always empty for a stdout console.
    pub fn lines(&self) -> Vec<String> {
        match &self.capture {
            Some(buffer) => buffer
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .clone(),
            None => Vec::new(),
        }
    }
}
