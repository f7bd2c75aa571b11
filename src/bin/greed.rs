//! Interactive command-line Game of Greed.
//!
//! Thin driver over the `rust_greed` engine: prompts for the session
//! parameters, runs turns until someone reaches the win score, and tracks
//! games won across rounds.

use std::io::{self, BufRead, Write};

use clap::Parser;

use rust_greed::game::GreedGame;
use rust_greed::{GreedRng, PlayerId, Result, Roster};

/// Play the Game of Greed at the terminal.
#[derive(Parser, Debug)]
#[command(name = "greed")]
#[command(about = "Turn-based dice game for 2-4 players")]
struct Args {
    /// Number of players (2-4); prompted for if omitted
    #[arg(long)]
    players: Option<usize>,

    /// Points needed to win (1000-10000); prompted for if omitted
    #[arg(long)]
    win_score: Option<u32>,

    /// Starting player for the first game, 1-based; prompted for if omitted
    #[arg(long)]
    start: Option<usize>,

    /// Random seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("WELCOME TO THE GAME OF GREED...\n");

    let num_players = match args.players.filter(|n| (2..=4).contains(n)) {
        Some(n) => n,
        None => prompt_number(&mut input, "How many players? ", 2, 4)? as usize,
    };

    let win_score = match args.win_score.filter(|w| (1000..=10_000).contains(w)) {
        Some(w) => w,
        None => prompt_number(&mut input, "Points to win the game? ", 1000, 10_000)?,
    };

    let mut roster = Roster::new(num_players)?;
    let mut rng = match args.seed {
        Some(seed) => GreedRng::new(seed),
        None => GreedRng::from_entropy(),
    };
    let mut games_played = 0u32;
    let mut first_game = true;

    loop {
        let starting = pick_starting_player(&mut input, &args, num_players, first_game)?;
        first_game = false;

        let mut game = GreedGame::with_roster(roster, starting, win_score, rng);

        while !game.is_won() {
            play_turn(&mut input, &mut game)?;
            println!("{}", format_game_scores(&game));
        }

        games_played += 1;
        if let Some(winner) = game.winner() {
            let repeat = game.roster()[winner].games_won() > 0;
            game.roster_mut()[winner].record_win();
            if repeat {
                println!("{} wins again!", winner);
            } else {
                println!("{} wins!", winner);
            }
        }

        println!("Number of games played: {}", games_played);
        for player in game.roster().iter() {
            println!("Games won by {}: {}", player.id(), player.games_won());
        }

        (roster, rng) = game.into_parts();

        if !prompt_yes_no(&mut input, "Would you like to play again (Y,y/N,n)? ")? {
            break;
        }
    }

    println!("Bye. Thanks for playing.");
    Ok(())
}

/// One player's turn: roll until they bust or bank.
fn play_turn(input: &mut impl BufRead, game: &mut GreedGame) -> Result<()> {
    print!(
        "{}'s turn --> Press ENTER to roll dice",
        game.current_player_id()
    );
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;

    loop {
        let faces = game.roll_dice();
        print!("You rolled: ");
        for face in &faces {
            print!("{} ", face);
        }

        let outcome = game.evaluate_roll();
        println!(
            "\tRoll Score: {}\tTurn Score: {}\tGame Score: {}",
            outcome.score,
            game.turn_score(),
            game.current_player().game_score()
        );

        if outcome.busted {
            println!("No scoring dice - turn forfeited.");
            game.bank();
            return Ok(());
        }

        if !prompt_yes_no(input, "Would you like to roll again (Y,y/N,n)? ")? {
            game.bank();
            return Ok(());
        }
    }
}

/// Pick the starting player, from `--start` for the first game only.
fn pick_starting_player(
    input: &mut impl BufRead,
    args: &Args,
    num_players: usize,
    first_game: bool,
) -> Result<PlayerId> {
    if first_game {
        if let Some(start) = args.start.filter(|s| (1..=num_players).contains(s)) {
            return Ok(PlayerId::new((start - 1) as u8));
        }
    }

    let options = (1..=num_players)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" - ");
    let prompt = format!("Player to start the game ({})? ", options);
    let choice = prompt_number(input, &prompt, 1, num_players as u32)?;
    Ok(PlayerId::new((choice - 1) as u8))
}

/// Prompt until the user enters a number within `min..=max`.
fn prompt_number(input: &mut impl BufRead, prompt: &str, min: u32, max: u32) -> Result<u32> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF: fall back to the minimum rather than loop forever.
            return Ok(min);
        }

        if let Ok(value) = line.trim().parse::<u32>() {
            if (min..=max).contains(&value) {
                return Ok(value);
            }
        }
    }
}

/// Prompt for a yes/no answer; anything not starting with n/N is a yes.
fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    Ok(!matches!(line.trim().chars().next(), Some('n') | Some('N')))
}

fn format_game_scores(game: &GreedGame) -> String {
    let mut line = String::from("Game Scores ==> ");
    for player in game.roster().iter() {
        line.push_str(&format!("{}: {}\t", player.id(), player.game_score()));
    }
    line
}
