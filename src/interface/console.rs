use crate::application::game_service::GameService;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

const MENU: &str = "\n===== CHECKERS MENU =====\n\
1. New Game\n\
2. Load Game\n\
3. Save Game\n\
4. Display Board\n\
5. Make Move\n\
6. Quit";

pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn run(mut service: GameService) {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            if let Some(winner) = service.winner() {
                println!("{}", service.render());
                println!("GAME OVER: {winner} wins!");
            }

            println!("{MENU}");
            let Some(choice) = prompt(&mut lines, "Choose: ") else {
                break;
            };

            match choice.trim().parse::<u32>() {
                Ok(1) => {
                    service.new_game();
                    println!("New game started.");
                }
                Ok(2) => {
                    if let Some(path) = prompt_filename(&mut lines, &service, "load") {
                        match service.load(&path) {
                            Ok(()) => println!("Game loaded from {}", path.display()),
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                }
                Ok(3) => {
                    if let Some(path) = prompt_filename(&mut lines, &service, "save") {
                        match service.save(&path) {
                            Ok(()) => println!("Game saved to {}", path.display()),
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                }
                Ok(4) => {
                    println!("{}", service.render());
                    println!("Current turn: {}", service.turn());
                }
                Ok(5) => {
                    println!("{}", service.render());
                    println!("Current turn: {}", service.turn());
                    Self::prompt_move(&mut lines, &mut service);
                }
                Ok(6) => {
                    println!("Exiting.");
                    break;
                }
                _ => {
                    warn!(input = %choice.trim(), "invalid menu choice");
                    println!("Invalid choice.");
                }
            }
        }
    }

    fn prompt_move(
        lines: &mut impl Iterator<Item = io::Result<String>>,
        service: &mut GameService,
    ) {
        let captures = service.forced_captures();
        if !captures.is_empty() {
            let origins: Vec<String> = captures.iter().map(|mv| mv.from.to_string()).collect();
            println!("Capture available from: {}", origins.join(", "));
        }

        let Some(input) = prompt(lines, "Enter move (e.g. b3 c4): ") else {
            return;
        };
        let mut tokens = input.split_whitespace();
        let (Some(from), Some(to)) = (tokens.next(), tokens.next()) else {
            println!("Invalid input format.");
            return;
        };

        match service.make_move(from, to) {
            Ok(()) => println!("{}", service.render()),
            Err(e) => {
                warn!(%from, %to, error = %e, "move rejected");
                println!("Invalid move: {e}");
            }
        }
    }
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line),
        _ => None,
    }
}

fn prompt_filename(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    service: &GameService,
    verb: &str,
) -> Option<PathBuf> {
    let text = format!(
        "Enter filename to {verb} [{}]: ",
        service.default_save_file()
    );
    let input = prompt(lines, &text)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Some(PathBuf::from(service.default_save_file()))
    } else {
        Some(PathBuf::from(trimmed))
    }
}
