//! Interactive session shell
//!
//! The undoable session lives here: a readline loop where each line is one
//! command against the live state, followed by a silent auto-save. Undo and
//! redo operate on the in-session history, which is why they are only
//! offered in the shell and not as one-shot subcommands.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shell_words::split;

use crate::display;
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::DEFAULT_CATEGORY;
use crate::services::{aggregate, forecast, Session};
use crate::storage::Storage;

use super::parse_date_arg;

enum LoopControl {
    Continue,
    Exit,
}

/// Run the interactive shell until the user quits
pub fn run_shell(storage: &Storage, mut session: Session) -> AllowanceResult<()> {
    let mut editor =
        DefaultEditor::new().map_err(|e| AllowanceError::Io(format!("readline: {}", e)))?;

    println!("Allowance tracker shell. Type 'help' for commands, 'quit' to leave.");

    loop {
        match editor.readline("allowance> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                match handle_line(storage, &mut session, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => println!("{}", err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Exiting shell.");
                break;
            }
            Err(err) => return Err(AllowanceError::Io(format!("readline: {}", err))),
        }
    }

    // Final loud save so a broken disk is not silently ignored on exit
    storage.save(&session.document())
}

fn handle_line(
    storage: &Storage,
    session: &mut Session,
    line: &str,
) -> AllowanceResult<LoopControl> {
    let tokens =
        split(line).map_err(|e| AllowanceError::Validation(format!("Bad command line: {}", e)))?;
    if tokens.is_empty() {
        return Ok(LoopControl::Continue);
    }
    let command = tokens[0].to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    match command.as_str() {
        "help" => print_help(),
        "quit" | "exit" => return Ok(LoopControl::Exit),

        "add" => {
            // add <amount> <label> [category] [date]
            let (&amount_arg, rest) = args
                .split_first()
                .ok_or_else(|| AllowanceError::Validation("Usage: add <amount> <label> [category] [date]".into()))?;
            let (&label, rest) = rest
                .split_first()
                .ok_or_else(|| AllowanceError::Validation("Usage: add <amount> <label> [category] [date]".into()))?;
            let amount: f64 = amount_arg.parse().map_err(|_| {
                AllowanceError::Validation(format!("Could not parse amount '{}'", amount_arg))
            })?;
            let category = rest.first().copied().unwrap_or(DEFAULT_CATEGORY);
            let date = parse_date_arg(rest.get(1).copied())?;

            let record = session.add_expense(date, label, amount, category)?;
            storage.save_silent(&session.document());
            println!(
                "Added: {} - {} ({})",
                record.label,
                display::format_money(record.amount, &session.settings.currency_symbol),
                record.category
            );
        }

        "undo" => {
            if session.undo() {
                storage.save_silent(&session.document());
                println!("Last action undone.");
            } else {
                println!("Nothing to undo.");
            }
        }

        "redo" => {
            if session.redo() {
                storage.save_silent(&session.document());
                println!("Action redone.");
            } else {
                println!("Nothing to redo.");
            }
        }

        "reset" => {
            let removed = session.records.len();
            session.reset();
            storage.save_silent(&session.document());
            println!("Removed {} record(s). Use 'undo' to bring them back.", removed);
        }

        "list" => println!(
            "{}",
            display::render_records(&session.records, &session.settings)
        ),

        "summary" => {
            let daily_allowance = session.settings.daily_allowance();
            let summary = aggregate::summary(&session.records, daily_allowance);
            println!("{}", display::render_summary(&summary, &session.settings));
            let totals = aggregate::category_totals(&session.records);
            if !totals.is_empty() {
                println!(
                    "{}",
                    display::render_category_table(&totals, &session.settings)
                );
            }
        }

        "daily" => {
            let series =
                aggregate::daily_series(&session.records, session.settings.daily_allowance());
            let (window, notice) =
                aggregate::windowed_series(&series, session.settings.display_window_days);
            println!(
                "{}",
                display::render_daily_table(window, notice.as_deref(), &session.settings)
            );
        }

        "forecast" => {
            let horizon = match args.first() {
                Some(arg) => arg.parse().map_err(|_| {
                    AllowanceError::Validation(format!("Could not parse horizon '{}'", arg))
                })?,
                None => session.settings.forecast_horizon,
            };
            let series =
                aggregate::daily_series(&session.records, session.settings.daily_allowance());
            let result = match series.last() {
                Some(last) => {
                    let savings: Vec<f64> = series.iter().map(|d| d.daily_savings).collect();
                    forecast::forecast(&savings, last.date, horizon)
                }
                None => forecast::Forecast::InsufficientData {
                    observed: 0,
                    required: forecast::MIN_FLAT_DAYS,
                },
            };
            println!("{}", display::render_forecast(&result, &session.settings));
        }

        "category" => match args.split_first() {
            Some((&"add", rest)) if !rest.is_empty() => {
                let name = rest.join(" ");
                if session.add_category(&name) {
                    storage.save_silent(&session.document());
                    println!("Added category '{}'.", name.trim());
                } else {
                    println!("Category '{}' already exists (or is blank).", name.trim());
                }
            }
            _ => {
                for name in session.categories.names() {
                    println!("{}", name);
                }
            }
        },

        other => println!("Unknown command '{}'. Type 'help' for commands.", other),
    }

    Ok(LoopControl::Continue)
}

fn print_help() {
    println!("Commands:");
    println!("  add <amount> <label> [category] [date]   log an expense (date: YYYY-MM-DD)");
    println!("  undo / redo                              step through record history");
    println!("  list                                     show the raw expense log");
    println!("  summary                                  totals, savings rate, categories");
    println!("  daily                                    business-day series");
    println!("  forecast [days]                          project savings ahead");
    println!("  category [add <name>]                    list or extend categories");
    println!("  reset                                    clear all records (undoable)");
    println!("  quit                                     save and leave");
}
