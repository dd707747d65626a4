pub const MAX_NAME_LEN: usize = 10;
pub const DEFAULT_NAME: &str = "Anonymous";

/// Single-line editor for the name stored with a score.
#[derive(Debug, Default, Clone)]
pub struct NamePrompt {
    name: String,
}

impl NamePrompt {
    pub fn new() -> Self {
        NamePrompt::default()
    }

    /// Appends `c` if it is alphanumeric and there is room left.
    pub fn push(&mut self, c: char) {
        if c.is_alphanumeric() && self.name.chars().count() < MAX_NAME_LEN {
            self.name.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.name.pop();
    }

    pub fn text(&self) -> &str {
        &self.name
    }

    pub fn commit(self) -> String {
        if self.name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            self.name
        }
    }
}
