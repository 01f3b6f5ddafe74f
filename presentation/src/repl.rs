//! Interactive session driving the quote page from the terminal.

use crate::console::page::ConsolePage;
use crate::scheduler::EffectScheduler;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::{Arc, Mutex};
use tidyquote_application::{Instruction, PageController, PageEvent};
use tidyquote_domain::{DomainError, ServiceType};

/// Interactive page session.
///
/// Reads one command per line, dispatches the matching [`PageEvent`], and
/// applies the returned instructions to the console surface (deferred ones
/// through the scheduler, like the page's own transitions).
pub struct PageRepl {
    controller: PageController,
    page: Arc<Mutex<ConsolePage>>,
    scheduler: EffectScheduler,
}

impl PageRepl {
    pub fn new(controller: PageController) -> Self {
        let page = Arc::new(Mutex::new(ConsolePage::new()));
        let scheduler = EffectScheduler::new(page.clone());
        Self {
            controller,
            page,
            scheduler,
        }
    }

    /// Run the interactive session.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(history_path) = dirs::data_dir().map(|p| p.join("tidyquote").join("history.txt"))
        {
            if let Some(parent) = history_path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(100, history_path) {
                line_editor = line_editor.with_history(Box::new(history));
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("tidyquote".to_string()),
            DefaultPromptSegment::Empty,
        );

        // Bring the page to its on-load state: default tab selected.
        let initial = self.controller.initial_instructions();
        self.apply(initial);
        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    if self.handle_line(&line) {
                        break;
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle one command line. Returns true if the session should end.
    fn handle_line(&mut self, line: &str) -> bool {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "help" => self.print_help(),
            "show" => self.print_page(),
            "tabs" => {
                for service in ServiceType::ALL {
                    let marker = if service == self.controller.active_service() {
                        ">"
                    } else {
                        " "
                    };
                    println!("{} {}", marker, service);
                }
            }
            "tab" => {
                if rest.is_empty() {
                    println!("Usage: tab <residential|commercial>");
                } else {
                    let outcome = self.controller.dispatch(PageEvent::TabActivated {
                        service_label: rest.to_string(),
                    });
                    self.apply(outcome);
                    self.print_page();
                }
            }
            "quote" => {
                let outcome = self.controller.dispatch(PageEvent::QuoteRequested {
                    area_input: rest.to_string(),
                });
                self.apply(outcome);
                self.print_page();
            }
            "name" => {
                if let Ok(mut page) = self.page.lock() {
                    page.set_form_name(rest);
                }
            }
            "email" => {
                if let Ok(mut page) = self.page.lock() {
                    page.set_form_email(rest);
                }
            }
            "book" => {
                let (name, email) = match rest.split_once(' ') {
                    // `book <name> <email>` shorthand fills the form first.
                    Some((name, email)) => (name.trim().to_string(), email.trim().to_string()),
                    None if rest.is_empty() => {
                        let form = match self.page.lock() {
                            Ok(page) => page.form().clone(),
                            Err(_) => return false,
                        };
                        (form.name, form.email)
                    }
                    None => {
                        println!("Usage: book [<name> <email>] (or set `name`/`email` first)");
                        return false;
                    }
                };
                if let Ok(mut page) = self.page.lock() {
                    page.set_form_name(&name);
                    page.set_form_email(&email);
                }
                let outcome = self
                    .controller
                    .dispatch(PageEvent::BookingSubmitted { name, email });
                self.apply(outcome);
                self.print_page();
            }
            "quit" | "exit" => return true,
            _ => println!("Unknown command: {} (try `help`)", command),
        }
        false
    }

    fn apply(&self, outcome: Result<Vec<Instruction>, DomainError>) {
        match outcome {
            Ok(instructions) => self.scheduler.apply_all(instructions),
            Err(err) if err.is_configuration() => {
                eprintln!("{}", format!("Configuration error: {}", err).red().bold());
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {}", err).red());
            }
        }
    }

    fn print_page(&self) {
        if let Ok(page) = self.page.lock() {
            println!();
            print!("{}", page.render());
            println!();
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Tidyquote - Service Quotes         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Services: {}",
            ServiceType::ALL
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
        self.print_help();
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  tab <service>        - Switch service tab");
        println!("  quote <area>         - Estimate a quote for the active tab");
        println!("  name <name>          - Fill the booking form's name field");
        println!("  email <email>        - Fill the booking form's email field");
        println!("  book [name email]    - Submit the booking form");
        println!("  tabs                 - List tabs and the active one");
        println!("  show                 - Redraw the page");
        println!("  help                 - Show this help");
        println!("  quit                 - Exit");
        println!();
    }
}
