//! Logo image with ordered fallbacks.

#[derive(Clone, Debug, PartialEq)]
pub struct LogoFallback {
    candidates: Vec<String>,
    index: usize,
}

impl LogoFallback {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates, index: 0 }
    }

    /// Image source to render; `None` only when no candidates were configured.
    pub fn current(&self) -> Option<&str> {
        self.candidates.get(self.index).map(String::as_str)
    }

    pub fn is_final(&self) -> bool {
        self.index + 1 >= self.candidates.len()
    }

    /// Advance after a load failure. The last candidate is kept no matter how
    /// often it fails. Returns whether the source changed.
    pub fn on_error(&mut self) -> bool {
        if self.is_final() {
            return false;
        }
        self.index += 1;
        true
    }
}
