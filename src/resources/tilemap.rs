//! Tile map data model.
//!
//! Deserializes maps exported by the Tiled editor in its JSON format
//! (`.tmj`). Only the parts the walker needs are modelled: grid size, tile
//! size, CSV tile layers, object layers and embedded tilesets. Everything is
//! validated once at load time so the frame loop never sees a malformed map.
//!
//! Rectangles from the object layer named [`COLLISION_LAYER`] become the
//! static collision set; tile layers become sprites.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use log::{debug, warn};
use raylib::prelude::{Rectangle, Vector2};
use serde::Deserialize;

/// Name of the object layer holding blocking rectangles.
pub const COLLISION_LAYER: &str = "collision";

/// Tiled stores flip/rotation flags in the top bits of every gid.
const GID_MASK: u32 = 0x0FFF_FFFF;

fn default_true() -> bool {
    true
}

/// A whole Tiled map.
#[derive(Debug, Deserialize)]
pub struct TiledMap {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Tile width in pixels.
    pub tilewidth: u32,
    /// Tile height in pixels.
    pub tileheight: u32,
    #[serde(default)]
    pub infinite: bool,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub tilesets: Vec<Tileset>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Layer {
    #[serde(rename = "tilelayer")]
    Tiles(TileLayer),
    #[serde(rename = "objectgroup")]
    Objects(ObjectLayer),
    #[serde(rename = "imagelayer")]
    Image(OtherLayer),
    #[serde(rename = "group")]
    Group(OtherLayer),
}

impl Layer {
    pub fn name(&self) -> &str {
        match self {
            Layer::Tiles(l) => &l.name,
            Layer::Objects(l) => &l.name,
            Layer::Image(l) | Layer::Group(l) => &l.name,
        }
    }
}

/// Tile layer payload. Only uncompressed CSV (a JSON array) is supported.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TileData {
    Gids(Vec<u32>),
    Encoded(String),
}

impl Default for TileData {
    fn default() -> Self {
        TileData::Gids(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
pub struct TileLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub data: TileData,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub offsetx: f32,
    #[serde(default)]
    pub offsety: f32,
}

#[derive(Debug, Deserialize)]
pub struct ObjectLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub objects: Vec<MapObject>,
    #[serde(default)]
    pub offsetx: f32,
    #[serde(default)]
    pub offsety: f32,
}

#[derive(Debug, Deserialize)]
pub struct OtherLayer {
    #[serde(default)]
    pub name: String,
}

/// An object placed on an object layer. Shape is implied by which optional
/// fields are present, the same way Tiled writes them.
#[derive(Debug, Deserialize)]
pub struct MapObject {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub ellipse: bool,
    #[serde(default)]
    pub point: bool,
    #[serde(default)]
    pub polygon: Option<serde_json::Value>,
    #[serde(default)]
    pub polyline: Option<serde_json::Value>,
    #[serde(default)]
    pub text: Option<serde_json::Value>,
    #[serde(default)]
    pub gid: Option<u32>,
}

impl MapObject {
    /// Plain rectangles only: ellipses, points, polygons, polylines, text and
    /// tile objects are all skipped.
    pub fn is_rectangle(&self) -> bool {
        !self.ellipse
            && !self.point
            && self.polygon.is_none()
            && self.polyline.is_none()
            && self.text.is_none()
            && self.gid.is_none()
    }
}

/// Embedded tileset. External (`source`) tilesets are rejected at load.
#[derive(Debug, Deserialize)]
pub struct Tileset {
    pub firstgid: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub columns: u32,
    #[serde(default)]
    pub tilewidth: u32,
    #[serde(default)]
    pub tileheight: u32,
    #[serde(default)]
    pub margin: u32,
    #[serde(default)]
    pub spacing: u32,
    #[serde(default)]
    pub source: Option<String>,
}

impl Tileset {
    /// Key of this tileset's image in the texture store.
    pub fn texture_key(&self) -> String {
        format!("tileset:{}", self.firstgid)
    }

    /// Source cell of a tileset-local tile id.
    fn cell_offset(&self, local_id: u32) -> Vector2 {
        let col = local_id % self.columns;
        let row = local_id / self.columns;
        Vector2 {
            x: (self.margin + col * (self.tilewidth + self.spacing)) as f32,
            y: (self.margin + row * (self.tileheight + self.spacing)) as f32,
        }
    }
}

/// One drawable tile resolved from a tile layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    /// Index of the owning layer among all top-level layers.
    pub layer_index: usize,
    /// Texture key of the tileset image.
    pub tex_key: String,
    /// World position of the tile's top-left corner.
    pub position: Vector2,
    /// Top-left of the tile inside the tileset image.
    pub offset: Vector2,
    pub width: f32,
    pub height: f32,
}

impl TiledMap {
    /// Parse and validate a map from JSON text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let mut map: TiledMap = serde_json::from_str(text).context("malformed Tiled JSON")?;
        map.validate()?;
        map.fill_tileset_defaults();
        Ok(map)
    }

    /// Read a map from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read map {}", path.display()))?;
        let map = Self::from_json(&text)
            .with_context(|| format!("failed to load map {}", path.display()))?;
        debug!(
            "Map {}: {}x{} tiles of {}x{}px, {} layers, {} tilesets",
            path.display(),
            map.width,
            map.height,
            map.tilewidth,
            map.tileheight,
            map.layers.len(),
            map.tilesets.len()
        );
        Ok(map)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.infinite {
            bail!("infinite (chunked) maps are not supported");
        }
        if self.width == 0 || self.height == 0 || self.tilewidth == 0 || self.tileheight == 0 {
            bail!(
                "map dimensions must be positive, got {}x{} tiles of {}x{}px",
                self.width,
                self.height,
                self.tilewidth,
                self.tileheight
            );
        }
        if self.width.checked_mul(self.tilewidth).is_none()
            || self.height.checked_mul(self.tileheight).is_none()
        {
            bail!(
                "map of {}x{} tiles of {}x{}px is too large",
                self.width,
                self.height,
                self.tilewidth,
                self.tileheight
            );
        }
        for tileset in &self.tilesets {
            if let Some(source) = &tileset.source {
                bail!("external tileset {source:?} is not supported, embed it in the map");
            }
        }
        for layer in &self.layers {
            let Layer::Tiles(tiles) = layer else {
                continue;
            };
            match &tiles.data {
                TileData::Encoded(_) => {
                    bail!("tile layer {:?} is encoded, export it as CSV", tiles.name)
                }
                TileData::Gids(gids) => {
                    let cells = tiles.width.checked_mul(tiles.height);
                    let pixels = tiles
                        .width
                        .checked_mul(self.tilewidth)
                        .zip(tiles.height.checked_mul(self.tileheight));
                    let (Some(expected), Some(_)) = (cells, pixels) else {
                        bail!(
                            "tile layer {:?} of {}x{} cells is too large",
                            tiles.name,
                            tiles.width,
                            tiles.height
                        );
                    };
                    if gids.len() != expected as usize {
                        bail!(
                            "tile layer {:?} has {} cells, expected {}x{}",
                            tiles.name,
                            gids.len(),
                            tiles.width,
                            tiles.height
                        );
                    }
                }
            }
        }
        Ok(())
    }

    fn fill_tileset_defaults(&mut self) {
        for tileset in &mut self.tilesets {
            if tileset.tilewidth == 0 {
                tileset.tilewidth = self.tilewidth;
            }
            if tileset.tileheight == 0 {
                tileset.tileheight = self.tileheight;
            }
        }
    }

    /// Map size in pixels.
    pub fn pixel_size(&self) -> (f32, f32) {
        (
            self.width.saturating_mul(self.tilewidth) as f32,
            self.height.saturating_mul(self.tileheight) as f32,
        )
    }

    /// Rectangles of the top-level `collision` object layer, in world pixels.
    ///
    /// Returns `None` when the map has no such layer.
    pub fn collision_rects(&self) -> Option<Vec<Rectangle>> {
        let layer = self.layers.iter().find_map(|layer| match layer {
            Layer::Objects(objects) if objects.name == COLLISION_LAYER => Some(objects),
            _ => None,
        })?;
        let rects = layer
            .objects
            .iter()
            .filter(|obj| obj.is_rectangle())
            .map(|obj| Rectangle {
                x: obj.x + layer.offsetx,
                y: obj.y + layer.offsety,
                width: obj.width,
                height: obj.height,
            })
            .collect();
        Some(rects)
    }

    /// Tileset owning a (flag-free) gid: the one with the largest `firstgid`
    /// not above it.
    pub fn tileset_for(&self, gid: u32) -> Option<&Tileset> {
        self.tilesets
            .iter()
            .filter(|ts| ts.firstgid <= gid)
            .max_by_key(|ts| ts.firstgid)
    }

    /// Drawable tiles of every visible tile layer, in layer order.
    ///
    /// Tiles taller than the grid are bottom-aligned to their cell.
    pub fn tile_placements(&self) -> Vec<TilePlacement> {
        let mut out = Vec::new();
        for (layer_index, layer) in self.layers.iter().enumerate() {
            let Layer::Tiles(tiles) = layer else {
                continue;
            };
            if !tiles.visible {
                continue;
            }
            let TileData::Gids(gids) = &tiles.data else {
                continue;
            };
            for (cell, raw_gid) in gids.iter().enumerate() {
                let gid = raw_gid & GID_MASK;
                if gid == 0 {
                    continue;
                }
                let Some(tileset) = self.tileset_for(gid) else {
                    warn!("Tile gid {gid} in layer {:?} has no tileset", tiles.name);
                    continue;
                };
                if tileset.columns == 0 || tileset.image.is_none() {
                    continue;
                }
                let col = cell as u32 % tiles.width;
                let row = cell as u32 / tiles.width;
                let w = tileset.tilewidth as f32;
                let h = tileset.tileheight as f32;
                out.push(TilePlacement {
                    layer_index,
                    tex_key: tileset.texture_key(),
                    position: Vector2 {
                        x: (col * self.tilewidth) as f32 + tiles.offsetx,
                        y: ((row + 1) * self.tileheight) as f32 - h + tiles.offsety,
                    },
                    offset: tileset.cell_offset(gid - tileset.firstgid),
                    width: w,
                    height: h,
                });
            }
        }
        out
    }

    /// Tileset images to load, resolved against the map's directory.
    pub fn tileset_images(&self, map_path: &Path) -> Vec<(String, PathBuf)> {
        let base = map_path.parent().unwrap_or_else(|| Path::new("."));
        self.tilesets
            .iter()
            .filter_map(|ts| {
                ts.image
                    .as_ref()
                    .map(|image| (ts.texture_key(), base.join(image)))
            })
            .collect()
    }
}
