#[cfg(not(feature = "net"))]
fn main() {}

#[cfg(feature = "net")]
use std::sync::Arc;

#[cfg(feature = "net")]
use battleship_net::{
    init_logging, transport, Client, Console, DamagePolicy, Game, GameConfig, DEFAULT_BOARD_SIZE,
    DEFAULT_BOATS, DEFAULT_PORT,
};
#[cfg(feature = "net")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "net")]
use rand::rngs::SmallRng;
#[cfg(feature = "net")]
use rand::SeedableRng;
#[cfg(feature = "net")]
use tokio::io::BufReader;
#[cfg(feature = "net")]
use tokio::net::TcpListener;

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "net")]
enum DamageArg {
    /// Every attack on a boat cell counts, repeats included.
    EveryAttack,
    /// Only the first attack on each boat cell counts.
    DistinctCells,
}

#[cfg(feature = "net")]
impl From<DamageArg> for DamagePolicy {
    fn from(arg: DamageArg) -> Self {
        match arg {
            DamageArg::EveryAttack => DamagePolicy::EveryAttack,
            DamageArg::DistinctCells => DamagePolicy::DistinctCells,
        }
    }
}

/// Battleship node: serves this player's board over HTTP and attacks
/// opponents' boards.
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[cfg(feature = "net")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_PORT, help = "HTTP port to listen on")]
    port: u16,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Opponent addresses, comma separated (e.g., localhost:8081,10.0.0.2:8080)"
    )]
    opponents: Vec<String>,
    #[arg(long, help = "Fix RNG seed for reproducible boat placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_BOATS)]
    boats: Vec<usize>,
    #[arg(long, value_enum, default_value_t = DamageArg::EveryAttack)]
    damage: DamageArg,
    #[arg(long, help = "Only serve the board; no interactive console")]
    no_console: bool,
}

#[cfg(feature = "net")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config =
        GameConfig::new(cli.board_size, cli.boats.clone()).with_damage_policy(cli.damage.into());
    let game = match cli.seed {
        Some(seed) => {
            log::info!("Using fixed seed: {} (placement will be reproducible)", seed);
            Game::with_rng(&config, &mut SmallRng::seed_from_u64(seed))
        }
        None => Game::new(&config),
    }
    .map_err(|e| anyhow::anyhow!(e))?;
    let game = Arc::new(game);

    log::info!("Board initialized: {}x{}", config.board_size, config.board_size);
    log::info!("Boats: {} ({:?})", config.boat_sizes.len(), config.boat_sizes);
    log::info!("Damage policy: {:?}", config.damage_policy);

    let bind = format!("0.0.0.0:{}", cli.port);
    let listener = TcpListener::bind(&bind).await.map_err(|e| {
        log::error!("Failed to bind {}: {}", bind, e);
        anyhow::anyhow!("Failed to bind {}: {}", bind, e)
    })?;
    let server = tokio::spawn(transport::serve(listener, Arc::clone(&game)));

    let mut opponents = Vec::new();
    for addr in cli.opponents.iter().map(|a| a.trim()).filter(|a| !a.is_empty()) {
        let client = Client::new(addr)?;
        log::info!("Opponent registered: {}", client.base_url());
        opponents.push(client);
    }

    if cli.no_console {
        return server.await?;
    }

    let console = Console::new(game, opponents);
    let input = BufReader::new(tokio::io::stdin());
    tokio::select! {
        res = server => res?,
        res = console.run(input) => {
            log::info!("Console closed, shutting down");
            res
        }
    }
}
