use crate::catalog::{Catalog, Subsystem};
use crate::reporter::Reporter;
use crate::scanner::ScanSession;
use colored::Colorize;

pub struct TerminalReporter {
    color: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn match_label(&self, subsystem: Subsystem, index: usize) -> String {
        let label = format!("{}:{}", subsystem, index);
        if self.color {
            label.cyan().bold().to_string()
        } else {
            label
        }
    }

    fn runbook_line(&self, link: &str) -> String {
        if self.color {
            format!("{} {}", "Please see".yellow().bold(), link.underline())
        } else {
            format!("Please see {}", link)
        }
    }

    fn summary_line(&self, total: usize) -> String {
        if total == 0 {
            let line = "No patterns found";
            if self.color {
                line.green().to_string()
            } else {
                line.to_string()
            }
        } else {
            let line = format!("Total log pattern/s found : {}", total);
            if self.color {
                line.red().bold().to_string()
            } else {
                line
            }
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, session: &ScanSession, catalog: &Catalog) -> String {
        let mut output = String::new();

        for (subsystem, records) in session.matched_subsystems() {
            for (index, record) in records.iter().enumerate() {
                output.push_str(&format!(
                    "{} {}\n",
                    self.match_label(subsystem, index),
                    record.text
                ));
            }
            if let Some(link) = catalog.remediation_link(subsystem) {
                output.push_str(&self.runbook_line(link));
                output.push('\n');
            }
        }

        output.push_str(&self.summary_line(session.total_matches()));
        output
    }
}
