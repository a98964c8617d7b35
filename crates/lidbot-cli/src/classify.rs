//! Offline classification from the command line.

use std::io::{BufRead, Write};

use lidbot_filter::{Classifier, Verdict};

/// Classifies `text`, or every line of stdin when `text` is `None`.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or stdout cannot be written.
pub(crate) fn run_classify(
    classifier: &Classifier,
    text: Option<&str>,
    window: usize,
    explain: bool,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(text) = text {
        writeln!(out, "{}", format_verdict(&classifier.evaluate(text, window), explain))?;
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        writeln!(out, "{}", format_verdict(&classifier.evaluate(&line, window), explain))?;
    }
    Ok(())
}

pub(crate) fn format_verdict(verdict: &Verdict, explain: bool) -> String {
    let label = if verdict.is_accepted() { "accept" } else { "reject" };
    if explain {
        format!("{label}\t{verdict}")
    } else {
        label.to_string()
    }
}
