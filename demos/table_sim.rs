//! CLI table example: you take a seat next to two bots while a scripted
//! dealer applies every request.
//!
//! Set `RUST_LOG=debug` to watch the table transitions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Command, Game, Message, Participant, Reply, Session, Step, TableConfig};

const DEALER: &str = "Dealer";
const YOU: &str = "You";

struct Dealer;

impl Participant for Dealer {
    fn name(&self) -> &str {
        DEALER
    }

    fn respond(&mut self, game: &Game, history: &[Message]) -> Reply {
        if game.is_finished() {
            return Reply::command("Everyone is done.", Command::Winner);
        }
        match history.last() {
            Some(last) if game.has_seat(&last.speaker) => {
                let content = last.content.to_lowercase();
                if content.contains("stand") {
                    Reply::command("", Command::Stand(last.speaker.clone()))
                } else if content.contains("hit") || content.contains("draw") {
                    Reply::command("", Command::Draw(last.speaker.clone()))
                } else {
                    Reply::command(
                        "I did not catch that.",
                        Command::PlayerStatus(last.speaker.clone()),
                    )
                }
            }
            _ => Reply::say(format!(
                "Welcome to the table. {}, you are first.",
                game.current_player().unwrap_or_default()
            )),
        }
    }
}

struct Bot {
    name: &'static str,
    stand_on: u32,
}

impl Participant for Bot {
    fn name(&self) -> &str {
        self.name
    }

    fn respond(&mut self, game: &Game, _history: &[Message]) -> Reply {
        let total = game.seat(self.name).map_or(0, |seat| seat.total());
        if total < self.stand_on {
            Reply::say("Hit me.")
        } else {
            Reply::say("I'll stand.")
        }
    }
}

struct Human;

impl Participant for Human {
    fn name(&self) -> &str {
        YOU
    }

    fn respond(&mut self, game: &Game, _history: &[Message]) -> Reply {
        if let Ok(status) = game.player_status(YOU) {
            println!("{}", colorize(&status.to_string(), "36"));
        }
        match prompt_line("(h)it or (s)tand? ").as_str() {
            "h" | "hit" => Reply::say("hit"),
            "s" | "stand" | "" => Reply::say("stand"),
            other => Reply::say(other),
        }
    }
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let config = TableConfig::new(DEALER, ["Ada", YOU, "Bert"]);
    let game = match Game::new(config, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Cannot open table: {err}");
            return;
        }
    };

    let mut session = Session::new(game);
    let mut participants: Vec<Box<dyn Participant>> = vec![
        Box::new(Dealer),
        Box::new(Bot {
            name: "Ada",
            stand_on: 17,
        }),
        Box::new(Human),
        Box::new(Bot {
            name: "Bert",
            stand_on: 14,
        }),
    ];

    loop {
        match session.step(&mut participants) {
            Ok(Step::Spoke(message)) => print_message(&message),
            Ok(Step::Terminated) => break,
            Err(err) => {
                eprintln!("Session error: {err}");
                break;
            }
        }
    }
}

fn print_message(message: &Message) {
    let speaker = if message.speaker == DEALER {
        colorize(&message.speaker, "33")
    } else {
        colorize(&message.speaker, "32")
    };
    for (i, line) in message.content.lines().enumerate() {
        if i == 0 {
            println!("{speaker}: {line}");
        } else {
            println!("    {line}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
