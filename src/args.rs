use clap::Parser;
use clap::Subcommand;
use secrecy::SecretString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Repository owner
    #[clap(long, env, default_value = "minorcell")]
    pub repo_owner: String,

    /// Repository name
    #[clap(long, env, default_value = "perfedge")]
    pub repo_name: String,

    /// API OAuth access token
    #[clap(short, long, env)]
    pub api_token: Option<SecretString>,

    /// Repository API URL
    #[clap(long, env, default_value = "https://api.github.com")]
    pub api_url: String,

    /// Contributor freshness window in seconds; repeated fetches inside it
    /// reuse the previous response. 0 disables reuse.
    #[clap(long, env, default_value_t = 3600)]
    pub cache_ttl: u64,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the contributor roster, most contributions first
    Contributors,
    /// Show the before/after minification comparison for one code sample
    Compression {
        /// Sample name: JavaScript, CSS or HTML
        #[clap(short, long, default_value = "JavaScript")]
        sample: String,
    },
    /// Simulate tree shaking over the demo utility module
    TreeShake {
        /// Utility function names to import into the bundle
        #[clap(short, long)]
        select: Vec<String>,
    },
    /// Render a markdown document with framed 800x600 images
    RenderDoc {
        /// Markdown file to render
        path: PathBuf,
    },
    /// List the branding and sample-format image assets
    Assets,
}
