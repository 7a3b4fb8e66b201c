use reqwest::blocking::Client;
use reqwest::{Method, header};
use serde::de::DeserializeOwned;

use crate::{config::Config, error::Error, repolist::Repo};

const API: &str = "https://api.github.com";

/// Lists the user's repositories and the organization's, concatenated.
/// A source that fails contributes nothing; the error is logged and the
/// run goes on with whatever the other source returned.
pub fn repositories(config: &Config) -> Vec<Repo> {
    let client = Client::new();
    let mut repos = Vec::new();
    let user_url = format!("{API}/user/repos?type=all&per_page=100");
    match get_json::<Vec<Repo>>(&client, config, &user_url) {
        Ok(batch) => repos.extend(batch),
        Err(err) => log::error!("error fetching user repositories: {err}"),
    }
    let org_url = format!("{API}/orgs/{}/repos?per_page=100", config.org);
    match get_json::<Vec<Repo>>(&client, config, &org_url) {
        Ok(batch) => repos.extend(batch),
        Err(err) => log::error!("error fetching organization repositories: {err}"),
    }
    repos
}

pub fn get_json<T: DeserializeOwned>(
    client: &Client,
    config: &Config,
    url: &str,
) -> Result<T, Error> {
    let resp = client
        .request(Method::GET, url)
        .header(header::AUTHORIZATION, format!("bearer {}", config.token))
        .header(header::USER_AGENT, "me")
        .header(header::ACCEPT, "application/vnd.github+json")
        .send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
            body: resp.text().unwrap_or_default(),
        });
    }
    let body = resp.text()?;
    serde_json::from_str(&body).map_err(|source| Error::MalformedResponse {
        url: url.to_string(),
        source,
    })
}
