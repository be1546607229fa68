use std::io::{self, BufReader};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use connect4::{
    Game, GameConfig, GameOutcome, HumanPlayer, Player, RandomAi, Renderer, TerminalRenderer,
    ValidColumnAi,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Mode {
    HumanVsAi,
    HumanVsHuman,
    AiVsAi,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum AiKind {
    /// Any column, full or not.
    Random,
    /// Only columns with room left.
    Valid,
}

/// Play Connect 4 in the terminal.
#[derive(Debug, Parser)]
#[command(name = "connect4", version)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Mode::HumanVsAi)]
    mode: Mode,

    /// Strategy of the computer opponent in human-vs-ai mode.
    #[arg(long, value_enum, default_value_t = AiKind::Valid)]
    ai: AiKind,

    /// Seed for reproducible AI moves.
    #[arg(long)]
    seed: Option<u64>,

    /// Consecutive rejected AI moves before the game is called a stalemate.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    max_ai_attempts: u64,

    #[arg(long)]
    player_one: Option<String>,

    #[arg(long)]
    player_two: Option<String>,

    /// Plain output without ANSI colors.
    #[arg(long)]
    no_color: bool,

    /// Print a JSON summary line when the game ends.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GameSummary {
    outcome: GameOutcome,
    winner: Option<String>,
    turns: usize,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (player_one, player_two) = build_players(&cli);
    let renderer = TerminalRenderer::new(io::stdout()).with_colors(!cli.no_color);
    let config = game_config(&cli)?;
    let mut game = Game::new(player_one, player_two, renderer).with_config(config);

    info!(mode = ?cli.mode, "starting game");
    let outcome = game.play().context("game aborted")?;

    if cli.json {
        let summary = summarize(&game, outcome);
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}

fn summarize<R: Renderer>(game: &Game<R>, outcome: GameOutcome) -> GameSummary {
    let winner = match outcome {
        GameOutcome::Winner(token) => Some(game.player(token).name().to_string()),
        GameOutcome::Draw => None,
    };
    GameSummary {
        outcome,
        winner,
        turns: game.turns(),
    }
}

fn game_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let attempts = usize::try_from(cli.max_ai_attempts)
        .context("--max-ai-attempts is too large for this platform")?;
    Ok(GameConfig::default().with_max_ai_attempts(attempts))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::DEFAULT_ENV))
        .with_writer(io::stderr)
        .try_init();
}

/// Directives from the `var` environment variable, `warn` when it is unset.
fn log_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn build_players(cli: &Cli) -> (Box<dyn Player>, Box<dyn Player>) {
    match cli.mode {
        Mode::HumanVsAi => (
            human(cli.player_one.as_deref().unwrap_or("Human 👤")),
            ai(cli.ai, cli.player_two.as_deref().unwrap_or("Robot 🤖"), cli.seed),
        ),
        Mode::HumanVsHuman => (
            human(cli.player_one.as_deref().unwrap_or("Human 👤")),
            human(cli.player_two.as_deref().unwrap_or("Human 2 👤")),
        ),
        Mode::AiVsAi => (
            ai(AiKind::Random, cli.player_one.as_deref().unwrap_or("Robot 🤖"), cli.seed),
            ai(
                AiKind::Valid,
                cli.player_two.as_deref().unwrap_or("Smarter Robot 🤖"),
                // distinct stream for the second robot
                cli.seed.map(|seed| seed.wrapping_add(1)),
            ),
        ),
    }
}

fn human(name: &str) -> Box<dyn Player> {
    // Stdin buffers globally; a one-byte reader keeps two humans from stealing each other's lines.
    let input = BufReader::with_capacity(1, io::stdin());
    Box::new(HumanPlayer::new(name, input, io::stdout()))
}

fn ai(kind: AiKind, name: &str, seed: Option<u64>) -> Box<dyn Player> {
    match (kind, seed) {
        (AiKind::Random, Some(seed)) => Box::new(RandomAi::with_seed(name, seed)),
        (AiKind::Random, None) => Box::new(RandomAi::new(name)),
        (AiKind::Valid, Some(seed)) => Box::new(ValidColumnAi::with_seed(name, seed)),
        (AiKind::Valid, None) => Box::new(ValidColumnAi::new(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect4::Token;

    struct Silent;

    impl Renderer for Silent {
        fn grid(&mut self, _grid: &connect4::Grid) {}

        fn message(&mut self, _tone: connect4::Tone, _text: &str) {}
    }

    #[test]
    fn defaults_to_human_vs_valid_ai() {
        let cli = Cli::try_parse_from(["connect4"]).unwrap();
        assert_eq!(cli.mode, Mode::HumanVsAi);
        assert_eq!(cli.ai, AiKind::Valid);
        assert_eq!(cli.max_ai_attempts, 1000);
        assert!(!cli.json);
    }

    #[test]
    fn parses_kebab_case_modes() {
        let cli = Cli::try_parse_from(["connect4", "--mode", "ai-vs-ai", "--seed", "3", "--json"])
            .unwrap();
        assert_eq!(cli.mode, Mode::AiVsAi);
        assert_eq!(cli.seed, Some(3));
        assert!(cli.json);
    }

    #[test]
    fn config_carries_attempt_limit() {
        let cli = Cli::try_parse_from(["connect4", "--max-ai-attempts", "40"]).unwrap();
        assert_eq!(game_config(&cli).unwrap().max_ai_attempts, 40);
        let cli = Cli::try_parse_from(["connect4"]).unwrap();
        assert_eq!(game_config(&cli).unwrap(), GameConfig::default());
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn oversized_attempt_limit_is_an_error() {
        let cli = Cli::try_parse_from(["connect4", "--max-ai-attempts", "4294967296"]).unwrap();
        assert!(game_config(&cli).is_err());
    }

    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(log_filter("CONNECT4_UNSET_LOG_FILTER").to_string(), "warn");
    }

    #[test]
    fn rejects_zero_attempts() {
        assert!(Cli::try_parse_from(["connect4", "--max-ai-attempts", "0"]).is_err());
    }

    #[test]
    fn wires_players_by_mode() {
        let cli = Cli::try_parse_from(["connect4", "--player-two", "Bot"]).unwrap();
        let (one, two) = build_players(&cli);
        assert!(one.is_human());
        assert!(!two.is_human());
        assert_eq!(two.name(), "Bot");

        let cli = Cli::try_parse_from(["connect4", "--mode", "human-vs-human"]).unwrap();
        let (one, two) = build_players(&cli);
        assert!(one.is_human() && two.is_human());
        assert_eq!(two.name(), "Human 2 👤");
    }

    #[test]
    fn seeded_ai_vs_ai_summary() {
        let cli = Cli::try_parse_from(["connect4", "--mode", "ai-vs-ai", "--seed", "21"]).unwrap();
        let (one, two) = build_players(&cli);
        let mut game = Game::new(one, two, Silent);
        let outcome = game.play().unwrap();
        let summary = summarize(&game, outcome);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["turns"], game.turns());
        if let GameOutcome::Winner(Token::PlayerOne) = outcome {
            assert_eq!(json["winner"], "Robot 🤖");
        }
    }
}
