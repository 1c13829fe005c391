//! REPL (Read-Eval-Print Loop) for the interactive tutor chat

use crate::ConsoleFormatter;
use crate::Spinner;
use muse_application::ChatTutorUseCase;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive tutor chat REPL
pub struct ChatRepl {
    use_case: ChatTutorUseCase,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: ChatTutorUseCase) -> Self {
        Self {
            use_case,
            show_progress: true,
        }
    }

    /// Set whether to show the busy spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("muse-ai").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Ask the tutor
                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Muse AI - Tutor Chat             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.use_case.model());
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /history  - Show the conversation so far");
        println!("  /reset    - Start a fresh conversation");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /history         - Show the conversation so far");
                println!("  /reset           - Start a fresh conversation");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/history" => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_transcript(self.use_case.transcript().turns())
                );
                false
            }
            "/reset" => {
                self.use_case.reset();
                println!("Conversation cleared.");
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&mut self, text: &str) {
        println!();

        let spinner = if self.show_progress {
            Some(Spinner::start("Thinking..."))
        } else {
            None
        };

        let result = self.use_case.send(text).await;

        if let Some(spinner) = spinner {
            spinner.finish();
        }

        match result {
            Ok(reply) => {
                println!("{}", ConsoleFormatter::format_tutor_reply(&reply));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
