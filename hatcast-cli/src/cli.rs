use std::path::Path;

use clap::Parser;
use hatcast_core::{
    ApiKey, ConditionsProvider, Error, KEY_FILE, Location, Recommendation, WundergroundClient,
    provider::wunderground,
};

/// Top-level CLI struct.
///
/// There are no runtime options: the location is fixed and the API key is
/// read from `key.txt` in the working directory.
#[derive(Debug, Parser)]
#[command(
    name = "hatcast",
    version,
    about = "Fetches current conditions and recommends whether to wear a hat"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> Result<(), Error> {
        let client = WundergroundClient::new();
        run(Path::new(KEY_FILE), &client, &Location::default()).await
    }
}

/// Load the key, fetch, parse, recommend, in that order.
///
/// The key is loaded before the provider is called, so a key failure never
/// reaches the network. A malformed response body is reported on stdout and
/// the recommendation skipped; that path is still `Ok` and exits 0.
pub async fn run(
    key_path: &Path,
    provider: &dyn ConditionsProvider,
    location: &Location,
) -> Result<(), Error> {
    let api_key = ApiKey::load(key_path)?;

    let body = provider.fetch_conditions(&api_key, location).await?;

    // Raw body first, before any parsing.
    println!("{body}");

    match wunderground::parse_conditions(&body) {
        Ok(conditions) => {
            println!("Current temp is {}", conditions.temp_f);
            println!("{}", Recommendation::for_temp_f(conditions.temp_f));
        }
        Err(err) => println!("{err}"),
    }

    Ok(())
}
