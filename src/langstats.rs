use std::collections::BTreeMap;

use reqwest::blocking::Client;

use crate::config::Config;
use crate::getrepolist::get_json;
use crate::repolist::{Languages, Repo};

pub type LanguageTotals = BTreeMap<String, u64>;

/// Fetches each repository's language byte counts and sums them into one
/// mapping. A repository whose fetch fails contributes nothing.
pub fn aggregate(config: &Config, repos: &[Repo]) -> LanguageTotals {
    let client = Client::new();
    let mut totals = LanguageTotals::new();
    for repo in repos {
        match get_json::<Languages>(&client, config, &repo.languages_url) {
            Ok(languages) => merge(&mut totals, languages),
            Err(err) => log::warn!("skipping languages for {}: {err}", repo.full_name),
        }
    }
    totals
}

pub fn merge(totals: &mut LanguageTotals, languages: Languages) {
    for (language, bytes) in languages {
        *totals.entry(language).or_insert(0) += bytes;
    }
}

/// Converts totals to percentages rounded to two decimals, sorted descending.
/// Empty totals yield an empty vector rather than dividing by zero.
pub fn percentages(totals: &LanguageTotals) -> Vec<(String, f64)> {
    let grand_total: u64 = totals.values().sum();
    if grand_total == 0 {
        return Vec::new();
    }
    let mut stats: Vec<(String, f64)> = totals
        .iter()
        .map(|(language, &bytes)| {
            let percentage = bytes as f64 / grand_total as f64 * 100.0;
            (language.clone(), (percentage * 100.0).round() / 100.0)
        })
        .collect();
    stats.sort_by(|a, b| b.1.total_cmp(&a.1));
    stats
}

pub fn render_table(stats: &[(String, f64)]) -> String {
    let mut table = String::from("### Languages and Tools Usage\n\n");
    table.push_str("| Language | Percentage |\n");
    table.push_str("|----------|------------|\n");
    for (language, percentage) in stats {
        table.push_str(&format!("| {language} | {percentage:.2}% |\n"));
    }
    table
}
