//! Application setup and window creation.

use std::sync::Arc;

use anyhow::Result;
use fen_board::Config;
use fen_board::assets::SpriteSet;
use fen_board::models::Session;
use gpui::{App, Bounds, TitlebarOptions, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::ui::views::BoardView;

/// Open the board window
pub fn run(cx: &mut App, config: &Config, session: Session, sprites: Arc<SpriteSet>) -> Result<()> {
    gpui_component::init(cx);

    let session = cx.new(|_| session);

    let window_size = size(
        px(config.window_width as f32),
        px(config.window_height as f32),
    );
    let bounds = Bounds::centered(None, window_size, cx);
    cx.open_window(
        WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some(config.title.clone().into()),
                ..Default::default()
            }),
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| BoardView::new(session, sprites, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;
    Ok(())
}
