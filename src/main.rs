use std::fs;
use std::io;
use std::thread;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life::config::Config;
use life::grid::Grid;
use life::grid::Seed;
use life::pattern;
use life::term::Terminal;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("life=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let seed = match &config.pattern {
        Some(path) => {
            let s = fs::read_to_string(path)
                .with_context(|| format!("Failed to read pattern {}", path.display()))?;
            let rows = pattern::parse(&s)
                .with_context(|| format!("Failed to parse pattern {}", path.display()))?;

            Seed::Explicit(pattern::fit(&rows, config.width, config.height))
        }
        None => Seed::Random(config.density()),
    };

    let mut grid = Grid::initialize(config.width, config.height, seed, &mut rng)
        .context("Failed to initialize grid")?;

    info!(
        width = grid.width(),
        height = grid.height(),
        population = grid.population(),
        cycles = config.cycles,
        "Starting"
    );

    let mut term = Terminal::stdout();
    let interval = config.interval();

    for i in 1..=config.cycles {
        if !config.no_clear {
            term.clear().context("Failed to clear the screen")?;
        }

        grid.advance()
            .with_context(|| format!("Failed to compute generation {i}"))?;

        let frame = config.style.render(&grid);
        term.draw(&frame).context("Failed to draw frame")?;
        term.draw(&format!("generation {i} of {}", config.cycles))
            .context("Failed to draw frame")?;

        thread::sleep(interval);
    }

    info!(population = grid.population(), "Done");

    Ok(())
}
