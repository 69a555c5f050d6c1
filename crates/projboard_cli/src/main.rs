//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire one board to two bucket lists and drive it from stdin commands.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Commands, one per line:
//! - `add <title> | <description> | <people>`
//! - `drag <item-id> <active|finished|none>`
//! - `list`

use log::warn;
use projboard_core::{
    init_logging_from, Board, BucketList, DropOutcome, ItemId, ItemStatus, LogConfig, MoveOutcome,
};
use std::io::{self, BufRead, Write};

const LOG_DIR_ENV: &str = "PROJBOARD_LOG_DIR";
const LOG_LEVEL_ENV: &str = "PROJBOARD_LOG_LEVEL";

fn main() -> io::Result<()> {
    println!("projboard_core version={}", projboard_core::core_version());

    let log_config = LogConfig {
        level: std::env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| projboard_core::default_log_level().to_string()),
        log_dir: std::env::var(LOG_DIR_ENV).ok(),
    };
    if let Err(err) = init_logging_from(&log_config) {
        eprintln!("logging disabled: {err}");
    }

    let mut board = Board::new();
    let lists = [
        board.attach_list(ItemStatus::Active),
        board.attach_list(ItemStatus::Finished),
    ];

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let reply = run_command(&mut board, &lists, line.trim());
        writeln!(out, "{reply}")?;
    }
    Ok(())
}

fn run_command(board: &mut Board, lists: &[BucketList], line: &str) -> String {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "" => String::new(),
        "add" => add(board, rest),
        "drag" => drag(board, rest),
        "list" => render(lists),
        other => format!("unknown command `{other}`; expected add|drag|list"),
    }
}

fn add(board: &mut Board, args: &str) -> String {
    let mut parts = args.splitn(3, '|').map(str::trim);
    let (title, description, people) = (
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    );
    match board.submit(title, description, people) {
        Ok(id) => format!("added {id}"),
        Err(err) => err.to_string(),
    }
}

fn drag(board: &mut Board, args: &str) -> String {
    let mut parts = args.split_whitespace();
    let Some(item_id) = parts.next().and_then(|raw| raw.parse::<ItemId>().ok()) else {
        return "usage: drag <item-id> <active|finished|none>".to_string();
    };
    let over = match parts.next().unwrap_or("none") {
        "none" => None,
        bucket => match bucket.parse::<ItemStatus>() {
            Ok(status) => Some(status),
            Err(err) => return err.to_string(),
        },
    };

    let Some(session) = board.start_drag(item_id) else {
        warn!("event=cli_drag_ignored module=cli item_id={item_id}");
        return format!("no item {item_id}");
    };
    match board.end_drag(session, over) {
        DropOutcome::Dropped(MoveOutcome::Moved { from }) => format!("moved {item_id} from {from}"),
        DropOutcome::Dropped(MoveOutcome::Unchanged) => "unchanged".to_string(),
        DropOutcome::Dropped(MoveOutcome::NotFound) => format!("no item {item_id}"),
        DropOutcome::Cancelled(reason) => format!("cancelled ({reason})"),
    }
}

fn render(lists: &[BucketList]) -> String {
    let mut output = String::new();
    for list in lists {
        output.push_str(&format!("{} ({})\n", list.heading(), list.len()));
        for entry in list.entries() {
            output.push_str(&format!(
                "  {} {} - {} - {}\n",
                entry.id, entry.title, entry.assignees, entry.description
            ));
        }
    }
    output.trim_end().to_string()
}
