use std::collections::HashMap;

use serde::Deserialize;

/// Byte counts per language, as returned by a repository's languages endpoint.
pub type Languages = HashMap<String, u64>;

#[derive(Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Repo {
    pub full_name: String,
    pub url: String,
    pub languages_url: String,
}

#[derive(Deserialize, PartialEq, Eq, Debug)]
pub struct Commit {
    pub sha: String,
}

#[test]
fn test() {
    let json = serde_json::from_str::<Vec<Repo>>(
        r#"
[
  {
    "full_name": "octocat/hello-world",
    "url": "https://api.github.com/repos/octocat/hello-world",
    "languages_url": "https://api.github.com/repos/octocat/hello-world/languages",
    "fork": false
  },
  {
    "full_name": "C-FO/billing",
    "url": "https://api.github.com/repos/C-FO/billing",
    "languages_url": "https://api.github.com/repos/C-FO/billing/languages"
  }
]
"#,
    )
    .unwrap();
    assert_eq!(
        json,
        vec![
            Repo {
                full_name: "octocat/hello-world".to_string(),
                url: "https://api.github.com/repos/octocat/hello-world".to_string(),
                languages_url: "https://api.github.com/repos/octocat/hello-world/languages"
                    .to_string(),
            },
            Repo {
                full_name: "C-FO/billing".to_string(),
                url: "https://api.github.com/repos/C-FO/billing".to_string(),
                languages_url: "https://api.github.com/repos/C-FO/billing/languages".to_string(),
            }
        ]
    )
}

#[test]
fn commits() {
    let json = serde_json::from_str::<Vec<Commit>>(
        r#"
[
  { "sha": "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d", "commit": { "message": "initial" } },
  { "sha": "762941318ee16e59dabbacb1b4049eec22f0d303" }
]
"#,
    )
    .unwrap();
    assert_eq!(
        json,
        vec![
            Commit {
                sha: "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d".to_string(),
            },
            Commit {
                sha: "762941318ee16e59dabbacb1b4049eec22f0d303".to_string(),
            }
        ]
    )
}
