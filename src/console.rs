#![cfg(feature = "net")]

//! Line-oriented console for attacking opponents and inspecting boards.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    game::Game,
    protocol::GameApi,
    transport::Client,
    ui::{render_board, render_hits},
};

pub const HELP: &str = "\
Commands:
  fire <target> <x> <y>   attack a cell
  board <target>          show a board as opponents see it
  hits <target>           list attacks received by a board
  status                  remaining boats for every board
  me                      show your own board with boats
  help                    show this message
  quit                    leave the console
<target> is `me` (or 0) for your board, or an opponent number from `status`.
";

/// Which board a command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Local,
    /// Zero-based index into the opponent list.
    Opponent(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire { target: Target, x: i64, y: i64 },
    Board(Target),
    Hits(Target),
    Status,
    Me,
    Help,
    Quit,
}

fn parse_target(input: &str) -> Result<Target, String> {
    if input.eq_ignore_ascii_case("me") {
        return Ok(Target::Local);
    }
    match input.parse::<usize>() {
        Ok(0) => Ok(Target::Local),
        Ok(n) => Ok(Target::Opponent(n - 1)),
        Err(_) => Err(format!(
            "Invalid target '{}' - use `me` or an opponent number",
            input
        )),
    }
}

fn parse_coord(input: &str, axis: &str) -> Result<i64, String> {
    input
        .parse()
        .map_err(|_| format!("Invalid {} '{}' - must be an integer", axis, input))
}

/// Parse one console line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Err("Empty command - type `help`".to_string());
    };
    match (name.to_ascii_lowercase().as_str(), args) {
        ("fire" | "hit", [target, x, y]) => Ok(Command::Fire {
            target: parse_target(target)?,
            x: parse_coord(x, "x")?,
            y: parse_coord(y, "y")?,
        }),
        ("fire" | "hit", _) => Err("Usage: fire <target> <x> <y>".to_string()),
        ("board", [target]) => Ok(Command::Board(parse_target(target)?)),
        ("board", _) => Err("Usage: board <target>".to_string()),
        ("hits", [target]) => Ok(Command::Hits(parse_target(target)?)),
        ("hits", _) => Err("Usage: hits <target>".to_string()),
        ("status", []) => Ok(Command::Status),
        ("me", []) => Ok(Command::Me),
        ("help" | "?", []) => Ok(Command::Help),
        ("quit" | "exit", []) => Ok(Command::Quit),
        (other, _) => Err(format!("Unknown command '{}' - type `help`", other)),
    }
}

/// Console bound to the local game and the configured opponents.
pub struct Console {
    local: Arc<Game>,
    opponents: Vec<Client>,
}

impl Console {
    pub fn new(local: Arc<Game>, opponents: Vec<Client>) -> Self {
        Self { local, opponents }
    }

    fn resolve(&self, target: Target) -> anyhow::Result<&dyn GameApi> {
        match target {
            Target::Local => Ok(&*self.local as &dyn GameApi),
            Target::Opponent(i) => self
                .opponents
                .get(i)
                .map(|c| c as &dyn GameApi)
                .ok_or_else(|| anyhow::anyhow!("No opponent #{}", i + 1)),
        }
    }

    /// Run a command and return the text to show.
    pub async fn execute(&self, command: Command) -> anyhow::Result<String> {
        match command {
            Command::Fire { target, x, y } => {
                let res = self.resolve(target)?.hit(x, y).await?;
                Ok(format!("({}, {}) -> {}\n", res.x, res.y, res.result))
            }
            Command::Board(target) => {
                let view = self.resolve(target)?.board().await?;
                Ok(render_board(&view))
            }
            Command::Hits(target) => {
                let hits = self.resolve(target)?.hits().await?;
                Ok(render_hits(&hits))
            }
            Command::Status => Ok(self.status().await),
            Command::Me => Ok(self.local.debug_render()),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    async fn status(&self) -> String {
        let mut out = format!(
            "  0. me: {} boat(s) remaining\n",
            self.local.remaining_boats()
        );
        for (i, opponent) in self.opponents.iter().enumerate() {
            let line = match opponent.get_boats_count().await {
                Ok(0) => "defeated".to_string(),
                Ok(n) => format!("{} boat(s) remaining", n),
                Err(e) => format!("unreachable ({:#})", e),
            };
            out.push_str(&format!("{:>3}. {}: {}\n", i + 1, opponent.base_url(), line));
        }
        out
    }

    /// Read commands from `input` until `quit` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&self, input: R) -> anyhow::Result<()> {
        let mut lines = input.lines();
        println!("{}", HELP);
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(msg) => {
                    println!("{}", msg);
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            match self.execute(command).await {
                Ok(text) => print!("{}", text),
                Err(e) => {
                    log::warn!("command failed: {:#}", e);
                    println!("Error: {:#}", e);
                }
            }
        }
        Ok(())
    }
}
