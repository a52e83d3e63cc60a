mod cli;
mod config;
mod logging;
mod service;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use service::add::AddOptions;
use service::update::UpdateOptions;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing()?;

    let cli = Cli::parse();
    let (local, global) = (cli.local, cli.global);

    match cli.command {
        Commands::Init => {
            config::AppConfig::validate_scope_flags(local, global)?;
            service::init::initialize(local).await?
        }
        Commands::Add {
            url,
            emotion,
            sub,
            tags,
            note,
            song,
            artist,
            lookup,
        } => {
            service::add::add(AddOptions {
                url,
                emotion,
                sub_emotions: sub,
                tags,
                note,
                song,
                artist,
                lookup,
                force_local: local,
                force_global: global,
            })
            .await?
        }
        Commands::List { emotion, tag, json } => {
            service::list::list(emotion, tag, json, local, global).await?
        }
        Commands::Show { id } => service::show::show(&id, local, global).await?,
        Commands::Update {
            id,
            url,
            emotion,
            sub,
            tags,
            note,
            song,
            artist,
            lookup,
        } => {
            service::update::update(UpdateOptions {
                id,
                url,
                emotion,
                sub_emotions: sub,
                tags,
                note,
                song,
                artist,
                lookup,
                force_local: local,
                force_global: global,
            })
            .await?
        }
        Commands::Delete { id, force } => service::delete::delete(&id, local, global, force).await?,
        Commands::Clear { force } => service::clear::clear(local, global, force).await?,
        Commands::Lookup { urls } => service::lookup::lookup(urls, local, global).await?,
        Commands::Emotions => service::emotions::emotions()?,
    }

    Ok(())
}
