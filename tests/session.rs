//! Session integration tests with scripted participants.

use bjtable::{
    Arbiter, Command, Game, Message, Nomination, Participant, Reply, ScriptedCards, Session,
    SessionError, SessionPhase, Step, TableConfig, Verdict,
};

const DEALER: &str = "Dealer";

/// Applies whatever the last player asked for, and announces the winner
/// once everyone is done.
struct DealerBot;

impl Participant for DealerBot {
    fn name(&self) -> &str {
        DEALER
    }

    fn respond(&mut self, game: &Game, history: &[Message]) -> Reply {
        if game.is_finished() {
            return Reply::command("Let's see who won.", Command::Winner);
        }
        match history.last() {
            Some(last) if game.has_seat(&last.speaker) => {
                let content = last.content.to_lowercase();
                if content.contains("stand") {
                    Reply::command("", Command::Stand(last.speaker.clone()))
                } else if content.contains("hit") {
                    Reply::command("", Command::Draw(last.speaker.clone()))
                } else {
                    Reply::say("Say hit or stand.")
                }
            }
            _ => Reply::say(format!(
                "Welcome! {} goes first.",
                game.current_player().unwrap_or_default()
            )),
        }
    }
}

/// Hits below a fixed total, then stands.
struct PlayerBot {
    name: String,
    stand_on: u32,
}

impl PlayerBot {
    fn boxed(name: &str, stand_on: u32) -> Box<dyn Participant> {
        Box::new(Self {
            name: name.to_string(),
            stand_on,
        })
    }
}

impl Participant for PlayerBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn respond(&mut self, game: &Game, _history: &[Message]) -> Reply {
        let total = game.seat(&self.name).map_or(0, |seat| seat.total());
        if total < self.stand_on {
            Reply::say("hit me")
        } else {
            Reply::say("I stand")
        }
    }
}

/// A player that tries to draw for itself.
struct Cheater;

impl Participant for Cheater {
    fn name(&self) -> &str {
        "A"
    }

    fn respond(&mut self, _game: &Game, _history: &[Message]) -> Reply {
        Reply::command("one more", Command::Draw("A".to_string()))
    }
}

fn game(seats: &[&str], cards: &[u8]) -> Game {
    Game::with_source(
        TableConfig::new(DEALER, seats.iter().copied()),
        ScriptedCards::new(cards.iter().copied()),
    )
    .unwrap()
}

#[test]
fn full_session_ends_with_the_winner() {
    let mut session = Session::new(game(&["A", "B"], &[10, 9, 10, 5, 9]));
    let mut participants: Vec<Box<dyn Participant>> = vec![
        Box::new(DealerBot),
        PlayerBot::boxed("A", 17),
        PlayerBot::boxed("B", 17),
    ];
    assert_eq!(session.phase(), SessionPhase::Setup);

    let spoken = session.run(&mut participants, 100).unwrap();
    assert_eq!(spoken, 14);
    assert_eq!(session.history().len(), 14);
    assert_eq!(session.phase(), SessionPhase::Terminated);

    let speakers: Vec<&str> = session
        .history()
        .iter()
        .map(|m| m.speaker.as_str())
        .collect();
    assert_eq!(
        speakers,
        [
            "Dealer", "A", "Dealer", "A", "Dealer", "A", "Dealer", "B", "Dealer", "B", "Dealer",
            "B", "Dealer", "Dealer"
        ]
    );

    let last = session.history().last().unwrap();
    assert!(last.content.starts_with("Let's see who won."));
    assert!(last.content.contains("Winner: A with 19!"));
    assert!(last.content.ends_with("GAME OVER"));
    assert_eq!(
        session.game().winner().verdict,
        Verdict::Winner {
            player: "A".to_string(),
            total: 19
        }
    );

    assert_eq!(session.step(&mut participants).unwrap(), Step::Terminated);
    assert_eq!(session.history().len(), 14);
}

#[test]
fn phases_follow_the_game() {
    let mut session = Session::new(game(&["A"], &[10, 10]));
    let mut participants: Vec<Box<dyn Participant>> =
        vec![Box::new(DealerBot), PlayerBot::boxed("A", 15)];

    // Welcome, hit request.
    session.step(&mut participants).unwrap();
    session.step(&mut participants).unwrap();
    assert_eq!(session.phase(), SessionPhase::Setup);

    session.step(&mut participants).unwrap();
    assert_eq!(session.phase(), SessionPhase::InProgress);

    // Hit request, draw to 20, stand request, stand.
    for _ in 0..4 {
        session.step(&mut participants).unwrap();
    }
    assert_eq!(session.phase(), SessionPhase::AllFinished);

    session.step(&mut participants).unwrap();
    assert_eq!(session.step(&mut participants).unwrap(), Step::Terminated);
    assert_eq!(session.phase(), SessionPhase::Terminated);
}

#[test]
fn players_cannot_apply_their_own_commands() {
    let mut session = Session::new(game(&["A", "B"], &[10]));
    let mut participants: Vec<Box<dyn Participant>> = vec![Box::new(DealerBot), Box::new(Cheater)];

    session.step(&mut participants).unwrap();
    let Step::Spoke(message) = session.step(&mut participants).unwrap() else {
        panic!("expected the player to speak");
    };
    assert_eq!(message.speaker, "A");
    assert!(message.content.starts_with("one more\n"));
    assert!(message.content.contains("not the dealer"));
    assert!(session.game().seat("A").unwrap().is_empty());
}

#[test]
fn missing_participants_are_reported() {
    let mut session = Session::new(game(&["A"], &[10]));
    let mut participants: Vec<Box<dyn Participant>> = vec![PlayerBot::boxed("A", 17)];
    assert_eq!(
        session.step(&mut participants).unwrap_err(),
        SessionError::UnknownParticipant(DEALER.to_string())
    );
    assert!(session.history().is_empty());
}

#[test]
fn step_limit_stops_a_long_session() {
    let mut session = Session::new(game(&["A", "B"], &[2]));
    let mut participants: Vec<Box<dyn Participant>> = vec![
        Box::new(DealerBot),
        PlayerBot::boxed("A", 21),
        PlayerBot::boxed("B", 21),
    ];
    assert_eq!(
        session.run(&mut participants, 3).unwrap_err(),
        SessionError::StepLimit(3)
    );
    assert_eq!(session.history().len(), 4);
}

struct Deferring;

impl Arbiter for Deferring {
    fn next_speaker(&self, last: Option<&Message>, _game: &Game) -> Nomination {
        if last.is_some_and(|m| m.content == "bye") {
            Nomination::Terminate
        } else {
            Nomination::Defer
        }
    }
}

struct Quitter;

impl Participant for Quitter {
    fn name(&self) -> &str {
        "B"
    }

    fn respond(&mut self, _game: &Game, _history: &[Message]) -> Reply {
        Reply::say("bye")
    }
}

#[test]
fn deferred_nominations_go_to_the_current_player() {
    let game = game(&["A", "B"], &[10]);
    game.stand(DEALER, "A").unwrap();

    let mut session = Session::with_arbiter(game, Deferring);
    session.push(Message::new(DEALER, "B, you're up"));
    let mut participants: Vec<Box<dyn Participant>> =
        vec![PlayerBot::boxed("A", 17), Box::new(Quitter)];

    assert_eq!(session.run(&mut participants, 5).unwrap(), 1);
    assert_eq!(session.history()[1], Message::new("B", "bye"));
    assert_eq!(session.phase(), SessionPhase::Terminated);
}
