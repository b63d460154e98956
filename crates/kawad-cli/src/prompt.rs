//! Line-oriented console prompting.

use std::io::{self, Write};

use kawad_core::Prompter;

pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> String {
        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer).is_err() {
            return String::new();
        }
        buffer.trim().to_string()
    }
}

impl Prompter for ConsolePrompter {
    fn prompt_line(&self, prompt: &str) -> String {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        self.read_line()
    }

    fn prompt_number(&self, prompt: &str) -> i64 {
        loop {
            let text = self.prompt_line(prompt);
            match text.parse::<i64>() {
                Ok(n) => return n,
                Err(_) => println!("Sila masukkan nombor."),
            }
        }
    }

    fn display_message(&self, message: &str) {
        println!("{}", message);
    }

    fn display_warning(&self, message: &str) {
        eprintln!("! {}", message);
    }
}
