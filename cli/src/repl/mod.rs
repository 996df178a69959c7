mod completer;
mod helper;
mod highlighter;
mod hinter;

use std::fs;
use std::path::PathBuf;

use holey::StoragePolicy;
use miette::NamedSource;
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::error::CliError;
use crate::session::{Outcome, Session};

pub fn run(policy: StoragePolicy, json: bool) -> Result<(), CliError> {
    let config = Config::builder()
        .history_ignore_dups(true)
        .map_err(to_repl_error)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config).map_err(to_repl_error)?;
    rl.set_helper(Some(ReplHelper::default()));

    let mut session = Session::new(policy);

    println!(
        "{} {}",
        "holey".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let options = ReplOptions { policy, json };
                match handle_command(trimmed, &mut session, options, &mut print_outcome) {
                    Some(ReplAction::Exit) => break,
                    Some(ReplAction::Handled) => {}
                    None => {
                        run_snippet(&mut session, trimmed, "<repl>", json, &mut print_outcome)
                    }
                }

                if let Some(helper) = rl.helper_mut() {
                    helper.names = session.names().map(str::to_string).collect();
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

enum ReplAction {
    Handled,
    Exit,
}

/// Settings fixed for the whole REPL session.
#[derive(Debug, Clone, Copy)]
struct ReplOptions {
    policy: StoragePolicy,
    json: bool,
}

/// Receives each rendered outcome of a snippet.
type Emit<'a> = dyn FnMut(&Outcome, String) + 'a;

fn handle_command(
    trimmed: &str,
    session: &mut Session,
    options: ReplOptions,
    emit: &mut Emit<'_>,
) -> Option<ReplAction> {
    if trimmed == ".exit" || trimmed == "exit" {
        return Some(ReplAction::Exit);
    }
    if trimmed == ".help" {
        for line in HELP {
            println!("{}", line.bright_blue());
        }
        return Some(ReplAction::Handled);
    }
    if trimmed == ".clear" {
        session.reset();
        println!("{}", "arrays cleared".green());
        return Some(ReplAction::Handled);
    }
    if trimmed == ".policy" {
        match serde_json::to_string_pretty(&options.policy) {
            Ok(text) => println!("{text}"),
            Err(err) => eprintln!("{} {err}", "error:".red().bold()),
        }
        return Some(ReplAction::Handled);
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = path.trim();
        match fs::read_to_string(path) {
            Ok(source) => run_snippet(session, &source, path, options.json, emit),
            Err(source) => print_error(
                CliError::Io {
                    path: PathBuf::from(path),
                    source,
                },
                None,
            ),
        }
        return Some(ReplAction::Handled);
    }
    None
}

const HELP: &[&str] = &[
    ".help                show commands",
    ".clear               forget every array",
    ".load <file>         run a command script",
    ".policy              print the storage policy",
    ".exit                exit REPL",
    "",
    "let a = [1, , 3]     bind an array (commas with nothing between leave holes)",
    "a.push(4)            call an array method",
    "a[5] = 'x'           write a key, a[5] reads it",
    "a.length = 2         resize",
    "delete a[0]          leave a hole",
    "0 in a               presence test",
    "show a | values a | keys a | json a",
];

fn run_snippet(
    session: &mut Session,
    source: &str,
    name: &str,
    json: bool,
    emit: &mut Emit<'_>,
) {
    let result = session.run_source(source, |outcome| {
        let text = outcome.render(json)?;
        emit(&outcome, text);
        Ok(())
    });
    if let Err(err) = result {
        print_error(err, Some((name, source)));
    }
}

fn print_outcome(outcome: &Outcome, text: String) {
    match outcome {
        Outcome::Slot(holey::Slot::Absent) | Outcome::Value(holey::Value::Undefined) => {
            println!("{}", text.bright_black())
        }
        _ => println!("{text}"),
    }
}

/// Render through miette, attaching the snippet so spans point into it.
fn print_error(err: CliError, source: Option<(&str, &str)>) {
    let report = miette::Report::new(err);
    let report = match source {
        Some((name, source)) => {
            report.with_source_code(NamedSource::new(name, source.to_string()))
        }
        None => report,
    };
    eprintln!("{report:?}");
}

/// Whether the input so far leaves a bracket, paren or string open.
pub fn needs_more_input(source: &str) -> bool {
    let mut parens = 0i32;
    let mut brackets = 0i32;
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;

    for line in source.lines() {
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if escaped {
                escaped = false;
                continue;
            }
            if ch == '\\' && (in_single || in_double) {
                escaped = true;
                continue;
            }
            if !in_double && ch == '\'' {
                in_single = !in_single;
                continue;
            }
            if !in_single && ch == '"' {
                in_double = !in_double;
                continue;
            }
            if in_single || in_double {
                continue;
            }
            match ch {
                '/' if chars.peek() == Some(&'/') => break,
                '(' => parens += 1,
                ')' => parens -= 1,
                '[' => brackets += 1,
                ']' => brackets -= 1,
                _ => {}
            }
        }
    }

    parens > 0 || brackets > 0 || source.trim_end().ends_with('\\')
}

fn to_repl_error(err: ReadlineError) -> CliError {
    CliError::Repl {
        message: err.to_string(),
    }
}
