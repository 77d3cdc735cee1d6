use anyhow::{Context, Result};
use log::info;

use crate::{
    catalog::TileCatalog,
    common::{Color, ColorIdx, PatternIdx, PALETTE, PALETTE_NAMES},
    config::ViewerConfig,
    helpers::wrap_index,
    render::{Painted, RenderRequest, Surface},
};

/// The two wrapping cursors the user moves around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    pub pattern_idx: PatternIdx,
    pub color_idx: ColorIdx,
    pattern_count: usize,
}

impl SelectionState {
    pub fn new(pattern_count: usize) -> Self {
        assert!(pattern_count > 0, "selection needs at least one pattern");
        SelectionState {
            pattern_idx: 0,
            color_idx: 0,
            pattern_count,
        }
    }

    pub fn advance_pattern(&mut self, step: i32) {
        self.pattern_idx = wrap_index(self.pattern_idx, step, self.pattern_count);
    }

    pub fn advance_color(&mut self, step: i32) {
        self.color_idx = wrap_index(self.color_idx, step, PALETTE.len());
    }

    pub fn color(&self) -> Color {
        PALETTE[self.color_idx]
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }
}

pub struct ViewerState {
    pub catalog: TileCatalog,
    pub selection: SelectionState,
    pub surface: Surface,
    pub fullscreen_on_start: bool,

    // Latest finished pattern image, if any has completed yet.
    pub painted: Option<Painted>,
    // Number of render requests issued so far.
    pub generation: u64,
}

impl ViewerState {
    pub fn new(catalog: TileCatalog) -> Self {
        let selection = SelectionState::new(catalog.len());
        ViewerState {
            catalog,
            selection,
            surface: Surface::default(),
            fullscreen_on_start: false,
            painted: None,
            generation: 0,
        }
    }

    pub fn pattern_name(&self) -> &str {
        self.catalog.name(self.selection.pattern_idx)
    }

    pub fn color_name(&self) -> &'static str {
        PALETTE_NAMES[self.selection.color_idx]
    }

    /// Snapshot of everything a render task needs for the current selection.
    pub fn next_render_request(&mut self) -> RenderRequest {
        self.generation += 1;
        RenderRequest {
            generation: self.generation,
            tile: self.catalog.tile(self.selection.pattern_idx).clone(),
            color: self.selection.color(),
            surface: self.surface,
        }
    }

    /// Shows a finished image. Completions are applied in arrival order, so
    /// an older request finishing late replaces a newer one.
    pub fn show(&mut self, painted: Painted) {
        self.painted = Some(painted);
    }
}

pub fn get_initial_state(config: &ViewerConfig) -> Result<ViewerState> {
    let catalog = config
        .catalog
        .load()
        .context("Unable to load tile catalog")?;
    info!("Loaded {} tiles", catalog.len());

    let mut state = ViewerState::new(catalog);
    if let Some(name) = &config.pattern {
        state.selection.pattern_idx = state.catalog.position(name)?;
    }
    if let Some(idx) = config.color {
        state.selection.color_idx = idx.min(PALETTE.len() - 1);
    }
    state.fullscreen_on_start = config.fullscreen;
    info!(
        "Starting with pattern '{}' on {}",
        state.pattern_name(),
        state.color_name()
    );
    Ok(state)
}
