use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub contributions: u32,
}

impl From<Contributor> for clients::api::Contributor {
    fn from(contributor: Contributor) -> Self {
        clients::api::Contributor {
            login: contributor.login,
            avatar_url: contributor.avatar_url,
            html_url: contributor.html_url,
            contributions: contributor.contributions,
        }
    }
}
