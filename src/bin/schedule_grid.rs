use lib::schedule::models;
use lib::schedule::render::render_fetch_error;
use lib::schedule::run_tool::run;
use lib::schedule::schedule_getter::RpcClient;

use std::error::Error;

use chrono::Local;
use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{error, info};
use models::{Args, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("SG_").split("__"))
        .extract()?;
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );
    let client = RpcClient::new(reqwest::Client::new(), &config);
    let today = Local::now().date_naive();

    /* Fetch, toggle and draw the week */
    let report = match run(client.clone(), client, &args, &config, today).await {
        Ok(report) => report,
        Err(err) if err.is_endpoint_failure() => {
            error!("Could not load the week of {}: {}", args.identity, err);
            print!("{}", render_fetch_error(&err));
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };
    print!("{}", report.output);

    let failed = report
        .changes
        .iter()
        .filter(|(_, result)| result.is_err())
        .count();
    if failed > 0 {
        error!(
            "{} of {} absence change(s) were not saved, the grid above shows them anyway",
            failed,
            report.changes.len()
        );
        std::process::exit(2);
    }

    Ok(())
}
