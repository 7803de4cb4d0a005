//! Cave map generator CLI
//!
//! Runs one generation and prints the map as ASCII, optionally with the
//! room metadata as JSON.

use std::process::ExitCode;

use clap::Parser;

use cavemap_core::map::{generate, MapConfig, Seed};
use cavemap_core::MapRng;

/// Generate a cave map and print it
#[derive(Parser, Debug)]
#[command(name = "cavemap")]
#[command(author, version, about = "Cellular-automaton cave map generator", long_about = None)]
struct Args {
    /// Map width before the border is added
    #[arg(short = 'W', long, default_value_t = 64)]
    width: u32,

    /// Map height before the border is added
    #[arg(short = 'H', long, default_value_t = 36)]
    height: u32,

    /// Percentage of interior tiles that start as wall (0-100)
    #[arg(short = 'f', long, default_value_t = 45)]
    fill_percent: u32,

    /// Seed; a plain integer is used as-is, any other string is hashed
    #[arg(short = 's', long)]
    seed: Option<String>,

    /// Draw a fresh random seed instead (printed for reproducibility)
    #[arg(long, conflicts_with = "seed")]
    random_seed: bool,

    /// Number of smoothing passes
    #[arg(short = 'p', long, default_value_t = 5)]
    smooth_passes: u32,

    /// Minimum surviving region size in tiles
    #[arg(short = 'm', long, default_value_t = 10)]
    min_region_size: u32,

    /// Corridor carve radius
    #[arg(short = 'r', long, default_value_t = 1)]
    passage_radius: u32,

    /// Border thickness added around the finished map
    #[arg(short = 'b', long, default_value_t = 1)]
    border: u32,

    /// Print room metadata as JSON instead of the ASCII map
    #[arg(long)]
    json: bool,
}

impl Args {
    fn seed(&self) -> Seed {
        if self.random_seed {
            return Seed::Number(MapRng::from_entropy().seed());
        }
        match &self.seed {
            Some(s) => match s.parse::<u64>() {
                Ok(n) => Seed::Number(n),
                Err(_) => Seed::Text(s.clone()),
            },
            None => Seed::default(),
        }
    }

    fn config(&self) -> MapConfig {
        MapConfig {
            width: self.width,
            height: self.height,
            fill_percent: self.fill_percent,
            seed: self.seed(),
            smooth_passes: self.smooth_passes,
            min_region_size: self.min_region_size,
            passage_radius: self.passage_radius,
            border: self.border,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();

    let map = match generate(&config) {
        Ok(map) => map,
        Err(err) => {
            eprintln!("cavemap: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.random_seed {
        eprintln!("seed: {}", config.seed.value());
    }

    if args.json {
        match serde_json::to_string_pretty(&map.rooms) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("cavemap: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", map.grid.render());
        eprintln!(
            "{} rooms, main room {} tiles",
            map.rooms.len(),
            map.rooms[map.main_room.0].size
        );
    }

    ExitCode::SUCCESS
}
