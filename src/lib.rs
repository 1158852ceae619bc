use anyhow::Context;
use clients::api::Error;
use clients::api::Result;
use contributors::Roster;
use demos::compression::CompressionDemo;
use demos::treeshake::TreeShakingDemo;
use demos::treeshake::BASE_BUNDLE_SIZE;
use github_client::GithubClientBuilder;
use log::warn;
use std::time::Duration;

pub use args::Args;
pub use args::Command;

mod args;

pub async fn run(args: Args) -> Result<()> {
    match &args.command {
        Command::Contributors => {
            let roster = contributor_roster(&args).await?;
            println!("{}", roster);
        }
        Command::Compression { sample } => print_compression(sample)?,
        Command::TreeShake { select } => print_tree_shake(select),
        Command::RenderDoc { path } => {
            let markdown = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            print!("{}", docsgen::render_doc(&markdown));
        }
        Command::Assets => print_assets(),
    }
    Ok(())
}

/// Fetches and orders the contributor roster. Fetch failures degrade to an
/// empty roster; only building a misconfigured client errors out.
pub async fn contributor_roster(args: &Args) -> Result<Roster> {
    let mut builder = GithubClientBuilder::default()
        .with_github_url(&args.api_url)
        .with_cache_ttl(Duration::from_secs(args.cache_ttl));
    if let Some(token) = &args.api_token {
        builder = builder.try_with_token(token.clone())?;
    }
    let client = builder.build()?;
    let contributors = contributors::load(&client, &args.repo_owner, &args.repo_name).await;
    Ok(Roster::from_unsorted(contributors))
}

fn print_compression(sample: &str) -> Result<()> {
    let demo = CompressionDemo::default()
        .select_named(sample)
        .ok_or(Error::Error("Unknown code sample"))?
        .reveal();
    let sample = demo.sample();
    println!("{} before minification ({} bytes):", sample.name, sample.original_size);
    println!("{}\n", sample.original);
    println!("{} after minification ({} bytes):", sample.name, sample.minified_size);
    println!("{}\n", sample.minified);
    println!("{}", demo.report());
    Ok(())
}

fn print_tree_shake(select: &[String]) {
    let mut demo = TreeShakingDemo::default();
    for name in select {
        if demos::treeshake::function(name).is_none() {
            warn!("Unknown utility function: {}", name);
            continue;
        }
        demo = demo.toggle(name);
    }
    println!("{}", demo.import_statement());
    let demo = demo.build();
    if demo.is_built() {
        let report = demo.report();
        println!("base overhead: {} bytes", BASE_BUNDLE_SIZE);
        println!("{}", report);
    } else {
        println!("Nothing selected, no bundle to build.");
    }
}

fn print_assets() {
    let logo = &docsgen::assets::LOGO;
    println!("{} ({}x{})", logo.path, logo.width, logo.height);
    for image in docsgen::assets::SAMPLE_IMAGES.iter() {
        println!("{}", image);
    }
}
