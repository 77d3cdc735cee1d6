use std::path::PathBuf;

use clap::{Args, Parser};

use crate::{
    catalog::{self, TileCatalog},
    common::ColorIdx,
};

#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Tile catalog: a JSON file, or a directory of JSON files [default: built-in tiles]
    #[arg(long, value_name = "PATH")]
    pub tiles: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn load(&self) -> catalog::Result<TileCatalog> {
        match &self.tiles {
            Some(path) => TileCatalog::load(path),
            None => TileCatalog::builtin(),
        }
    }
}

/// Full-window repeating tile pattern viewer.
///
/// Arrow keys, the mouse wheel (hold shift for colors) and swipes cycle
/// patterns and colors; a left click toggles fullscreen.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct ViewerArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Name of the pattern to start with
    #[arg(long)]
    pub pattern: Option<String>,

    /// Palette index to start with (0 = white ... 7 = black)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..8))]
    pub color: Option<u8>,

    /// Switch to fullscreen once the window is open
    #[arg(long)]
    pub fullscreen: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    pub catalog: CatalogArgs,
    pub pattern: Option<String>,
    pub color: Option<ColorIdx>,
    pub fullscreen: bool,
}

impl From<ViewerArgs> for ViewerConfig {
    fn from(args: ViewerArgs) -> Self {
        ViewerConfig {
            catalog: args.catalog,
            pattern: args.pattern,
            color: args.color.map(ColorIdx::from),
            fullscreen: args.fullscreen,
        }
    }
}
