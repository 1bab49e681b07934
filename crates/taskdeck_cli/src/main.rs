//! Interactive terminal board.
//!
//! # Responsibility
//! - Own the process: configuration, logging, one task manager.
//! - Feed stdin lines to the board and print every re-render.

mod command;
mod config;
mod terminal;

use command::{Command, HELP};
use config::CliConfig;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use taskdeck_core::{init_logging, Task, TaskManager, TaskView, TodoUi};
use terminal::{format_row, TerminalSink};

fn main() {
    let config = CliConfig::from_env();
    match config.log_setup() {
        Ok((level, target)) => {
            if let Err(err) = init_logging(level, target) {
                eprintln!("taskdeck: logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("taskdeck: logging disabled: {err}"),
    }

    println!("taskdeck {}; type `help` for commands", taskdeck_core::core_version());

    let mut manager = TaskManager::new();
    let mut ui = TodoUi::new(&mut manager, TerminalSink::new(io::stdout()));
    ui.render();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("event=read_input module=cli status=error error={err}");
                break;
            }
        };
        match command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => run(&mut ui, command),
            Ok(None) => {}
            Err(err) => eprintln!("{err}"),
        }
        let _ = io::stdout().flush();
    }

    info!(
        "event=app_exit module=cli status=ok tasks={}",
        ui.manager().len()
    );
}

fn run<W: Write>(ui: &mut TodoUi<'_, TerminalSink<W>>, command: Command) {
    match command {
        Command::Ui(event) => ui.dispatch(event),
        Command::Sorted => print_rows(ui.manager().tasks_by_priority().iter()),
        Command::Search(text) => {
            let hits = ui.manager().search(&text);
            if hits.is_empty() {
                println!("no tasks match `{}`", text.trim());
            }
            print_rows(hits.iter());
        }
        Command::Export => match serde_json::to_string_pretty(ui.manager().tasks()) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("export failed: {err}"),
        },
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

fn print_rows<'a>(tasks: impl Iterator<Item = &'a Task>) {
    for task in tasks {
        println!("  {}", format_row(&TaskView::from(task)));
    }
}
