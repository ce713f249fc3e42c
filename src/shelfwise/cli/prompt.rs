use super::print::truncate_to_width;
use super::styles::ID;
use shelfwise::editor::edit_form;
use shelfwise::error::Result;
use shelfwise::form::RecordForm;
use shelfwise::model::Kind;
use shelfwise::prompt::{Candidate, Prompt};
use std::io::{self, BufRead, Write};

/// [`Prompt`] on stdin/stdout, editing forms in `$EDITOR`.
pub struct TerminalPrompt {
    name_width: usize,
}

impl TerminalPrompt {
    pub fn new(name_width: usize) -> Self {
        Self { name_width }
    }

    fn ask(&self, question: &str) -> Option<String> {
        print!("{}", question);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn choose(&mut self, kind: Kind, candidates: &[Candidate], action: &str) -> Option<usize> {
        println!("Several {} records match. Which one do you want to {}?", kind, action);
        for (i, candidate) in candidates.iter().enumerate() {
            println!(
                "{:>3}) {} {} {}",
                i + 1,
                ID.apply_to(candidate.id),
                truncate_to_width(&candidate.name, self.name_width),
                candidate.summary.join(" / ")
            );
        }
        let answer = self.ask("Number (empty to cancel): ")?;
        answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=candidates.len()).contains(n))
            .map(|n| n - 1)
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.ask(&format!("{} [y/N] ", message))
            .map(|a| matches!(a.to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn edit_record(&mut self, form: RecordForm) -> Result<Option<RecordForm>> {
        edit_form(&form)
    }
}
