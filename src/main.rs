use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use engine::{Config, GAME_NAME, SaveSystem};
use ui::Game;

mod run;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(
        long,
        default_value = "assets/config/game.json",
        help = "Configuration file"
    )]
    config: PathBuf,

    #[arg(long, default_value = "saves", help = "Save game directory")]
    save_dir: PathBuf,

    #[arg(long, help = "Seed for a reproducible glitch stream")]
    seed: Option<u64>,

    #[arg(long, help = "Print the start screen as ANSI text and exit")]
    dump: bool,
}

/// Load the config, creating the file if there isn't one.
///
/// Falls back to defaults on errors.
fn load_config(path: &Path) -> Config {
    if !path.exists() {
        log::warn!("No config at {path:?}, creating one with defaults");
        let mut config = Config::default();
        if let Err(e) = config.save_as(path) {
            log::warn!("{e:#}");
        }
        return config;
    }

    match Config::open(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e:#}, using defaults");
            Config::default()
        }
    }
}

fn init_saves(dir: &Path) -> Result<SaveSystem> {
    let mut saves = SaveSystem::default();
    saves.initialize(dir)?;
    Ok(saves)
}

/// Build the game, running without saves if the save directory is unusable.
fn init(args: &Args) -> Game {
    let config = load_config(&args.config);
    let saves = match init_saves(&args.save_dir) {
        Ok(saves) => saves,
        Err(e) => {
            log::error!("Failed to initialize save system: {e:#}");
            SaveSystem::default()
        }
    };
    Game::new(config, saves, args.seed)
}

fn main() {
    navni::logger::start(GAME_NAME);

    let args = Args::parse();
    log::info!("{}", engine::title_with_version());
    log::info!("{}", engine::full_version_string());

    let mut game = init(&args);

    if args.dump {
        game.update(0.0);
        game.render();
        print!("{}", game.s.to_ansi());
        return;
    }

    navni::run(
        &navni::Config {
            application_name: GAME_NAME.to_string(),
            system_color_palette: Some(ui::PALETTE),
            ..Default::default()
        },
        (game, run::run),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args() {
        let args = Args::parse_from(["deadcode", "--seed", "42", "--dump"]);
        assert_eq!(args.seed, Some(42));
        assert!(args.dump);
        assert_eq!(args.config, PathBuf::from("assets/config/game.json"));
        assert_eq!(args.save_dir, PathBuf::from("saves"));
    }

    #[test]
    fn config_fallbacks() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("config").join("game.json");
        let config = load_config(&path);
        assert!(path.exists());
        assert_eq!(config.path(), Some(path.as_path()));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        let config = load_config(&bad);
        assert_eq!(config.path(), None);
        // Broken file is left alone.
        assert_eq!(std::fs::read_to_string(&bad).unwrap(), "{ not json");
    }

    #[test]
    fn unusable_save_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let config = dir.path().join("game.json");
        let saves = blocker.join("saves");

        let args = Args::parse_from([
            "deadcode",
            "--config",
            config.to_str().unwrap(),
            "--save-dir",
            saves.to_str().unwrap(),
        ]);
        assert!(init_saves(&args.save_dir).is_err());

        let game = init(&args);
        assert!(!game.saves.is_initialized());
        // Config was loaded once and kept its file.
        assert_eq!(game.config.path(), Some(config.as_path()));
    }
}
