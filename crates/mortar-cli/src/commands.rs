//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_results, output_rooms};
use mortar_app::config::Config;
use mortar_app::session::{parse_command_line, FormEvent, Session, SessionCommand, COMMAND_HELP};
use mortar_infra::load_room_sheet;
use mortar_types::{Error, OutputFormat, Result, RoomInput};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Calc { sheet } => cmd_calc(&config, &sheet, output_format),

        Commands::Room {
            name,
            size,
            length,
            width,
            height,
            thickness,
            cement_ratio,
            sand_ratio,
        } => {
            let room = RoomInput {
                name,
                size,
                length,
                width,
                height,
                thickness,
                cement_ratio,
                sand_ratio,
            };
            cmd_room(&config, room, output_format)
        }

        Commands::Session { script } => cmd_session(&config, script, output_format),

        Commands::Config {
            show,
            set_output,
            set_max_rooms,
            clear_max_rooms,
            reset,
        } => {
            let max_rooms = match (set_max_rooms, clear_max_rooms) {
                (Some(max), _) => Some(Some(max)),
                (None, true) => Some(None),
                (None, false) => None,
            };
            cmd_config(config, show, set_output, max_rooms, reset)
        }
    }
}

fn cmd_calc(config: &Config, sheet: &Path, output_format: OutputFormat) -> Result<()> {
    let rooms = load_room_sheet(sheet)?;

    let mut session = Session::new(config.max_rooms);
    session.import_rooms(&rooms)?;
    session.apply(&FormEvent::Calculate)?;

    output_results(output_format, session.results())
}

fn cmd_room(config: &Config, room: RoomInput, output_format: OutputFormat) -> Result<()> {
    let mut session = Session::new(config.max_rooms);
    session.import_rooms(std::slice::from_ref(&room))?;
    session.apply(&FormEvent::Calculate)?;

    output_results(output_format, session.results())
}

fn cmd_session(config: &Config, script: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let mut session = Session::new(config.max_rooms);

    match script {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound(path.display().to_string()));
            }
            info!(path = %path.display(), "running session script");
            let content = std::fs::read_to_string(&path)?;
            for (line_no, line) in content.lines().enumerate() {
                let keep_going = run_line(&mut session, line, output_format).map_err(|e| {
                    eprintln!("{}:{}: {}", path.display(), line_no + 1, line.trim());
                    e
                })?;
                if !keep_going {
                    break;
                }
            }
            Ok(())
        }
        None => run_interactive(&mut session, output_format),
    }
}

fn run_interactive(session: &mut Session, output_format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();

    if prompt {
        println!("Mortar calculator session. Type 'help' for commands.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            print!("> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match run_line(session, &line, output_format) {
            Ok(true) => {}
            Ok(false) => break,
            // Bad input should not end an interactive session
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

/// Run one session line, returning false when the session should end
fn run_line(session: &mut Session, line: &str, output_format: OutputFormat) -> Result<bool> {
    let Some(command) = parse_command_line(line)? else {
        return Ok(true);
    };
    debug!(?command, "session command");

    match command {
        SessionCommand::Event(event) => {
            session.apply(&event)?;
            match event {
                FormEvent::Calculate => output_results(output_format, session.results())?,
                FormEvent::SetRoomCount(_) => {
                    println!("{} room(s)", session.store().rooms().len());
                }
                FormEvent::EditField { .. } => {}
            }
        }
        SessionCommand::Show => output_rooms(output_format, session.store().rooms())?,
        SessionCommand::Help => println!("{}", COMMAND_HELP),
        SessionCommand::Quit => return Ok(false),
    }

    Ok(true)
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_max_rooms: Option<Option<usize>>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
        println!("Output format set to: {}", format);
    }

    if let Some(max_rooms) = set_max_rooms {
        config.max_rooms = max_rooms;
        changed = true;
        match max_rooms {
            Some(max) => println!("Max rooms set to: {}", max),
            None => println!("Room count limit removed."),
        }
    }

    if changed {
        config.save()?;
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
