use std::io;

use log::{debug, error};

use recipe_box::{open_store, AppConfig, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AppConfig::load()?;
    debug!("Using data file {}", config.data_file.display());

    let mut store = open_store(&config).map_err(|e| {
        error!("Unable to load {}: {}", config.data_file.display(), e);
        e
    })?;

    let stdin = io::stdin();
    Session::new(&mut store, stdin.lock(), io::stdout()).run()?;

    Ok(())
}
