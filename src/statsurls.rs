use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::Error;
use crate::getrepolist::get_json;
use crate::repolist::{Commit, Repo};

pub struct StatsUrls {
    pub top_langs: String,
    pub overview: String,
    pub streak: String,
}

/// Sums the length of each repository's first commits page. Histories longer
/// than one page undercount; pagination is out of scope.
pub fn count_commits(config: &Config, repos: &[Repo]) -> Result<usize, Error> {
    let client = Client::new();
    let mut total = 0;
    for repo in repos {
        let url = format!("{}/commits", repo.url);
        let commits = get_json::<Vec<Commit>>(&client, config, &url)?;
        total += commits.len();
    }
    Ok(total)
}

pub fn build(config: &Config, total_commits: usize) -> StatsUrls {
    StatsUrls {
        top_langs: format!(
            "https://github-readme-stats.vercel.app/api/top-langs?username={}&show_icons=true&locale=en&layout=compact&count_private=true",
            config.user
        ),
        overview: format!(
            "https://github-readme-stats.vercel.app/api?username={}&show_icons=true&locale=en&count_private=true",
            config.user
        ),
        streak: format!(
            "https://github-readme-streak-stats.herokuapp.com/?user={}&total_commits={}",
            config.user, total_commits
        ),
    }
}
