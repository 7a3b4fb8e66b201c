use env_logger::{Env, Target};

use config::Config;
use error::Error;

mod config;
mod error;
mod getrepolist;
mod langstats;
mod readme;
mod repolist;
mod statsurls;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();
    let config = Config::load("stats.toml")?;
    let repos = getrepolist::repositories(&config);
    log::info!("examining {} repositories", repos.len());
    let totals = langstats::aggregate(&config, &repos);
    log::info!("aggregated {} languages", totals.len());
    let table = langstats::render_table(&langstats::percentages(&totals));
    readme::update_language_table(&config.readme, &table)?;
    let total_commits = statsurls::count_commits(&config, &repos)?;
    log::info!("counted {total_commits} commits across one page per repository");
    let urls = statsurls::build(&config, total_commits);
    readme::update_stats_urls(&config.readme, &urls)?;
    Ok(())
}
