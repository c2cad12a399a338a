mod app;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use fen_board::Config;
use fen_board::assets::SpriteSet;
use fen_board::models::Session;
use gpui::{App, Application};
use tracing_subscriber::EnvFilter;

use crate::ui::FileAssets;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let sprites = SpriteSet::load(&config.asset_dir).context("cannot start without piece sprites")?;
    let session = Session::from_config(&config)?;
    tracing::info!(position = %session.board(), turns = config.enforce_turns, "starting board");

    let assets = FileAssets::new(sprites.root());
    let sprites = Arc::new(sprites);
    Application::new().with_assets(assets).run(move |cx: &mut App| {
        if let Err(err) = app::run(cx, &config, session, sprites) {
            tracing::error!("failed to open window: {err:#}");
            cx.quit();
        }
    });
    Ok(())
}
