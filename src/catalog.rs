use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use hashbrown::{hash_map::Entry, HashMap};
use itertools::Itertools;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::common::PatternIdx;

const BUILTIN_CATALOG: &str = include_str!("../assets/tiles.json");
const BUILTIN_SOURCE: &str = "<built-in>";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("tile '{name}' is malformed: row {row} has {found} columns, expected {expected}")]
    MalformedTile {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile '{name}' has no cells")]
    EmptyTile { name: String },
    #[error("tile catalog contains no tiles")]
    Empty,
    #[error("tile '{name}' is defined in both {} and {}", .first.display(), .second.display())]
    DuplicateTile {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("no tile named '{0}'")]
    UnknownTile(String),
    #[error("unable to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tile catalog in {source_name}")]
    Json {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
    #[error(transparent)]
    Glob(#[from] glob::GlobError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// A rectangular grid of cells. Any character other than a space marks a
/// foreground cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDefinition {
    width: usize,
    cells: Vec<char>,
}

impl TileDefinition {
    pub fn new<S: AsRef<str>>(name: &str, rows: &[S]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(CatalogError::EmptyTile {
                name: name.to_string(),
            });
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(CatalogError::EmptyTile {
                name: name.to_string(),
            });
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().chars().count();
            if found != width {
                return Err(CatalogError::MalformedTile {
                    name: name.to_string(),
                    row,
                    expected: width,
                    found,
                });
            }
            cells.extend(line.as_ref().chars());
        }
        Ok(TileDefinition { width, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    pub fn cell(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.cell(x, y) != ' '
    }
}

/// On-disk form: an object mapping each tile name to its rows.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
struct CatalogFile {
    tiles: HashMap<String, Vec<String>>,
}

fn parse_json(json: &str, source_name: &str) -> Result<CatalogFile> {
    serde_json::from_str(json).map_err(|source| CatalogError::Json {
        source_name: source_name.to_string(),
        source,
    })
}

fn load_json(path: &Path) -> Result<CatalogFile> {
    info!("Loading {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_json(&json, &path.display().to_string())
}

/// Tiles in cycling order: names sorted lexicographically, then reversed.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Vec<(String, Arc<TileDefinition>)>,
}

impl TileCatalog {
    pub fn from_rows<I, S>(tiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<S>)>,
        S: AsRef<str>,
    {
        let tiles: Vec<(String, Arc<TileDefinition>)> = tiles
            .into_iter()
            .map(|(name, rows)| {
                let tile = TileDefinition::new(&name, &rows)?;
                Ok((name, Arc::new(tile)))
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .rev()
            .collect();
        if tiles.is_empty() {
            return Err(CatalogError::Empty);
        }
        debug!(
            "Tile order: {}",
            tiles.iter().map(|(name, _)| name.as_str()).join(", ")
        );
        Ok(TileCatalog { tiles })
    }

    pub fn from_json(json: &str, source_name: &str) -> Result<Self> {
        Self::from_rows(parse_json(json, source_name)?.tiles)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG, BUILTIN_SOURCE)
    }

    /// Loads a single JSON file, or every `*.json` file in a directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Self::from_rows(load_json(path)?.tiles);
        }

        let pattern = format!("{}/*.json", path.display());
        let mut merged: HashMap<String, (PathBuf, Vec<String>)> = HashMap::new();
        for entry in glob::glob(&pattern)? {
            let file = entry?;
            for (name, rows) in load_json(&file)?.tiles {
                match merged.entry(name) {
                    Entry::Occupied(e) => {
                        return Err(CatalogError::DuplicateTile {
                            name: e.key().clone(),
                            first: e.get().0.clone(),
                            second: file,
                        });
                    }
                    Entry::Vacant(e) => {
                        e.insert((file.clone(), rows));
                    }
                }
            }
        }
        Self::from_rows(merged.into_iter().map(|(name, (_, rows))| (name, rows)))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn name(&self, idx: PatternIdx) -> &str {
        &self.tiles[idx].0
    }

    pub fn tile(&self, idx: PatternIdx) -> &Arc<TileDefinition> {
        &self.tiles[idx].1
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tiles.iter().map(|(name, _)| name.as_str())
    }

    pub fn position(&self, name: &str) -> Result<PatternIdx> {
        self.tiles
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| CatalogError::UnknownTile(name.to_string()))
    }
}
