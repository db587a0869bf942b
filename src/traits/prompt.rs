//! Prompt trait - textual input and messages

use std::io;

/// Line-oriented interaction with the user
pub trait Prompt {
    /// Show `message` and read one line of reply
    ///
    /// # Returns
    /// `None` once the input is exhausted
    fn ask(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Show an informational line
    fn tell(&mut self, message: &str) -> io::Result<()>;
}
