use clap::Parser;
use log::error;
use tile_viewer::{
    config::{ViewerArgs, ViewerConfig},
    state, update, view,
};

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::from(ViewerArgs::parse());
    let state = match state::get_initial_state(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("Error starting viewer: {:#}", e);
            return Err(e);
        }
    };

    iced::application(update::title, update::update, view::view)
        .subscription(update::subscription)
        .run_with(move || update::init(state))?;
    Ok(())
}
