use clap::Parser;
use clients::api::Error;
use perfedge_site::Args;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    perfedge_site::run(args).await
}
