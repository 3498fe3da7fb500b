//! Interactive wait-for graph entry
//!
//! Builds a [`GraphDescription`] by prompting on the terminal: first the
//! number of processes, then one yes/no question per ordered pair of distinct
//! processes. The i == i pair is never asked, so self-waits cannot be entered.

use console::{Term, style};

use crate::description::GraphDescription;
use crate::error::GridlockError;
use crate::utils::string::process_label;

/// Terminal prompter that assembles a graph description
pub struct InteractivePrompter {
    term: Term,
}

impl Default for InteractivePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractivePrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Run the full prompt sequence and return the resulting description
    pub fn collect_description(&self) -> Result<GraphDescription, GridlockError> {
        let processes = self.prompt_process_count()?;
        let mut description = GraphDescription::new(processes);

        for from in 0..processes {
            if processes > 1 {
                self.term.write_line(&format!(
                    "\nWhich processes does {} wait on?",
                    style(process_label(from)).bold()
                ))?;
            }
            for to in 0..processes {
                if from == to {
                    continue;
                }
                let question = format!(
                    "  Does {} wait on {}? [y/N] ",
                    process_label(from),
                    process_label(to)
                );
                if self.prompt_yes_no(&question)? {
                    description.add_wait(from, to);
                }
            }
        }

        Ok(description)
    }

    fn prompt_process_count(&self) -> Result<usize, GridlockError> {
        loop {
            self.term.write_str("Number of processes in the system: ")?;
            let line = self.term.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(count) => return Ok(count),
                Err(_) => {
                    self.term
                        .write_line("Please enter a non-negative integer.")?;
                }
            }
        }
    }

    fn prompt_yes_no(&self, question: &str) -> Result<bool, GridlockError> {
        loop {
            self.term.write_str(question)?;
            let line = self.term.read_line()?;
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" | "1" => return Ok(true),
                "n" | "no" | "0" | "" => return Ok(false),
                _ => {
                    self.term.write_line("Please answer y or n.")?;
                }
            }
        }
    }
}
