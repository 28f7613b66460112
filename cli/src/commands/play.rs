use std::io::{self, BufRead, Write};

use colored::*;
use equiz_common::algebra::judgment::{Judgment, JudgmentKind};
use equiz_common::config::Config;
use equiz_common::{fail, success, warn};
use equiz_core::session::SessionState;
use rand::rngs::StdRng;

use crate::commands::session_rng;
use crate::qprint;
use crate::terminal::{colors, format, print};

/// Runs one interactive quiz session on stdin/stdout.
///
/// The session owns all mutable state ([`SessionState`]); every answer is
/// graded against the problem stored there, and `new` swaps the problem out
/// wholesale. A generation failure is reported and the session continues.
pub fn play(cfg: &Config) -> anyhow::Result<()> {
    let mut rng = session_rng(cfg);
    let mut session = SessionState::new();

    if let Err(e) = session.renew(&mut rng) {
        warn!("{e}; type 'new' to retry");
    }
    show_problem(&session, cfg);
    show_instructions(cfg);

    let stdin = io::stdin();
    loop {
        let Some(x_text) = prompt(&stdin, "x")? else {
            break;
        };
        match x_text.trim() {
            "quit" | "q" => break,
            "new" | "n" => {
                next_problem(&mut session, &mut rng, cfg);
                continue;
            }
            _ => {}
        }

        let Some(y_text) = prompt(&stdin, "y")? else {
            break;
        };
        if matches!(y_text.trim(), "quit" | "q") {
            break;
        }

        let Some(judgment) = session.submit(&x_text, &y_text).cloned() else {
            warn!("No problem is posed right now; type 'new' to generate one.");
            continue;
        };
        report(&judgment);
        if judgment.is_success() {
            qprint!();
            next_problem(&mut session, &mut rng, cfg);
        }
    }

    qprint!();
    success!("Thanks for playing!");
    Ok(())
}

fn show_problem(session: &SessionState, cfg: &Config) {
    let Some(problem) = session.problem.as_ref() else {
        warn!("No problem could be generated. Type 'new' to try again.");
        return;
    };

    print::header("problem", cfg.quiet);
    for line in format::system_lines(problem) {
        print::centerln(&format!("{}", line.bold()));
    }
    print::fat_separator(cfg.quiet);
}

fn show_instructions(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print::print_status("Answer with numbers, or type 'new' for a fresh problem, 'quit' to exit.");
}

fn next_problem(session: &mut SessionState, rng: &mut StdRng, cfg: &Config) {
    match session.renew(rng) {
        Ok(()) => show_problem(session, cfg),
        Err(e) => warn!("{e}; the previous problem is still active"),
    }
}

fn report(judgment: &Judgment) {
    match judgment.kind {
        JudgmentKind::Success => success!("{}", judgment.message),
        JudgmentKind::Error => fail!("{}", judgment.message),
        JudgmentKind::Warning => warn!("{}", judgment.message),
    }
}

/// Prompts for one variable. `None` means stdin hit EOF and the session
/// should end.
fn prompt(stdin: &io::Stdin, var: &str) -> anyhow::Result<Option<String>> {
    print!(
        "{} {} ",
        var.color(colors::PRIMARY),
        "=".color(colors::SEPARATOR)
    );
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_string()))
}
