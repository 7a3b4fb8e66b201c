use std::{env, fs};

use serde::Deserialize;

use crate::error::Error;

pub const TOKEN_VAR: &str = "PERSONAL_ACCESS_TOKEN";

#[derive(Deserialize, PartialEq, Eq, Debug)]
pub struct Config {
    pub user: String,
    pub org: String,
    #[serde(default = "default_readme")]
    pub readme: String,
    #[serde(default)]
    pub token: String,
}

fn default_readme() -> String {
    "README.md".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Error> {
        let config_file = fs::read_to_string(path)?;
        let mut config = toml::from_str::<Config>(&config_file)?;
        // an unset token stays empty; requests then carry a bare "bearer " header
        if let Ok(token) = env::var(TOKEN_VAR) {
            config.token = token;
        }
        Ok(config)
    }
}

#[test]
fn test() {
    let config = toml::from_str::<Config>(
        r#"
user = "octocat"
org = "C-FO"
"#,
    )
    .unwrap();
    assert_eq!(
        config,
        Config {
            user: "octocat".to_string(),
            org: "C-FO".to_string(),
            readme: "README.md".to_string(),
            token: String::new(),
        }
    )
}
