// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use wordgrid::{
    dictionary, display, error, game_config, game_state, placement, return_error, rlhelper,
    turn_committer,
};

static HELP: &str = "\
play <row>,<col> <r|d> <word>   place a word, e.g. play 8,6 r cat
swap <tiles>                    trade tiles with the bag, e.g. swap qvx
pass                            pass the turn
board | hand | scores           show things
source <file>                   run commands from a file
exit                            quit";

// rows and columns as shown on the board: 1-based, column may be a letter.
fn parse_position(s: &str) -> error::Returns<(isize, isize)> {
    let Some((row, col)) = s.split_once(',') else {
        return_error!(format!("position must look like 8,8 not {:?}", s));
    };
    let row = row.trim().parse::<isize>()?;
    let col = col.trim();
    let col = match col.parse::<isize>() {
        Ok(col) => col,
        Err(_) => match col.as_bytes() {
            &[c] if c.is_ascii_alphabetic() => (c.to_ascii_lowercase() - b'a') as isize + 1,
            _ => {
                return_error!(format!("bad column {:?}", col));
            }
        },
    };
    match (row.checked_sub(1), col.checked_sub(1)) {
        (Some(row), Some(col)) => Ok((row, col)),
        _ => {
            return_error!(format!("position out of range: {:?}", s));
        }
    }
}

fn parse_play(args: &[String]) -> error::Returns<placement::PlacementRequest> {
    if args.len() != 3 {
        return_error!("usage: play <row>,<col> <r|d> <word>".into());
    }
    let (row, col) = parse_position(&args[0])?;
    let direction = args[1].parse::<placement::Direction>()?;
    if args[2].is_empty() {
        return_error!("word is empty".into());
    }
    Ok(placement::PlacementRequest {
        row,
        col,
        direction,
        word: args[2].clone(),
    })
}

fn parse_tiles(args: &[String]) -> Vec<char> {
    args.iter()
        .flat_map(|arg| arg.chars())
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

struct LineSource {
    rl: rlhelper::MyEditor,
    cmd_stack: Vec<(String, Option<(String, usize)>)>,
}

impl LineSource {
    // None on ctrl-c, ctrl-d or a terminal error.
    fn next_line(&mut self, prompt: &str) -> Option<String> {
        if let Some((line, source)) = self.cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            return Some(line);
        }
        match self.rl.readline(prompt) {
            Ok(line) => {
                let _ = self.rl.add_history_entry(line.as_str());
                Some(line)
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                None
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D");
                None
            }
            Err(err) => {
                println!("Error: {:?}", err);
                None
            }
        }
    }

    fn source(&mut self, filename: &str) {
        match std::fs::read_to_string(filename) {
            Ok(whole_file) => {
                let v = self.cmd_stack.len();
                for (line_num, line) in whole_file.lines().enumerate() {
                    self.cmd_stack
                        .push((line.to_string(), Some((filename.to_string(), line_num + 1))));
                }
                self.cmd_stack[v..].reverse();
            }
            Err(err) => {
                println!("cannot open file: {:?}", err);
            }
        }
    }
}

fn print_scores(game_state: &game_state::GameState) {
    for player in game_state.players.iter() {
        println!("{}: {}", player.name, player.score);
    }
}

fn ask_num_players(lines: &mut LineSource) -> Option<u8> {
    loop {
        let line = lines.next_line("Enter playercount (2-4): ")?;
        match line.trim().parse::<u8>() {
            Ok(n) if (2..=4).contains(&n) => return Some(n),
            _ => println!("Incorrect Input"),
        }
    }
}

enum TurnEnd {
    Done,
    Quit,
}

fn take_turn(
    lines: &mut LineSource,
    game_state: &mut game_state::GameState,
    committer: &turn_committer::TurnCommitter,
    rng: &mut dyn RngCore,
) -> TurnEnd {
    loop {
        let Some(line) = lines.next_line(">> ") else {
            return TurnEnd::Quit;
        };
        let strings = match shell_words::split(&line) {
            Ok(strings) => strings,
            Err(err) => {
                println!("Bad quoting: {:?}", err);
                continue;
            }
        };
        if strings.is_empty() {
            continue;
        }
        match strings[0].as_str() {
            "help" => println!("{}", HELP),
            "exit" => return TurnEnd::Quit,
            "board" => display::print_board(&game_state.board),
            "hand" => {
                if let Some(player) = game_state.current_player() {
                    println!("Your Letters: {}", display::fmt_hand(&player.rack));
                }
            }
            "scores" => print_scores(game_state),
            "source" => {
                if strings.len() > 1 {
                    lines.source(&strings[1]);
                } else {
                    println!("need another arg");
                }
            }
            "play" => {
                let request = match parse_play(&strings[1..]) {
                    Ok(request) => request,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                match game_state.play_word(committer, &request) {
                    Ok(outcome) => {
                        print!(
                            "The word {} was successfully added to the board",
                            request.word.to_ascii_uppercase()
                        );
                        if outcome.bonus != 0 {
                            print!(" with a {} point bonus", outcome.bonus);
                        }
                        println!(
                            ". New Score: {}",
                            game_state.players[game_state.turn as usize].score
                        );
                    }
                    Err(err) => {
                        println!("Invalid placement ({}), turn forfeited", err);
                        game_state.pass();
                    }
                }
                return TurnEnd::Done;
            }
            "swap" => match game_state.swap(rng, &parse_tiles(&strings[1..])) {
                Ok(()) => {
                    if let Some(player) = game_state.current_player() {
                        println!("Your hand: {}", display::fmt_hand(&player.rack));
                    }
                    return TurnEnd::Done;
                }
                Err(err) => println!("{}", err),
            },
            "pass" => {
                game_state.pass();
                return TurnEnd::Done;
            }
            _ => println!("invalid input, help for help"),
        }
    }
}

fn main() -> error::Returns<()> {
    wordgrid::init_logging();
    let dictionary_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "dictionary.txt".to_string());
    let dictionary = dictionary::Dictionary::from_file(&dictionary_path)?;

    let mut lines = LineSource {
        rl: rlhelper::new_rl_editor()?,
        cmd_stack: Vec::new(),
    };
    let Some(num_players) = ask_num_players(&mut lines) else {
        return Ok(());
    };
    let game_config = game_config::make_english_game_config(num_players)?;
    let committer = turn_committer::TurnCommitter::new(&game_config, &dictionary);
    let mut game_state = game_state::GameState::new(&game_config);
    while game_state.players.len() < num_players as usize {
        let prompt = format!("Player {} Name: ", game_state.players.len() + 1);
        let Some(name) = lines.next_line(&prompt) else {
            return Ok(());
        };
        if let Err(err) = game_state.add_player(name.trim()) {
            println!("{}", err);
        }
    }

    let mut rng = rand_chacha::ChaCha20Rng::from_os_rng();
    game_state.start(&mut rng)?;
    println!("{}", HELP);

    loop {
        display::print_board(&game_state.board);
        let Some(player) = game_state.current_player() else {
            break;
        };
        println!("It is {}'s Turn (score: {})", player.name, player.score);
        println!("Your Letters: {}", display::fmt_hand(&player.rack));
        match take_turn(&mut lines, &mut game_state, &committer, &mut rng) {
            TurnEnd::Quit => return Ok(()),
            TurnEnd::Done => {}
        }
        if game_state.is_game_over() {
            break;
        }
        game_state.next_turn();
    }

    display::print_board(&game_state.board);
    tracing::info!("game over");
    println!("Game over. Final standings:");
    for (i, player) in (1..).zip(game_state.final_standings()) {
        println!("{}. {} {}", i, player.name, player.score);
    }
    Ok(())
}
