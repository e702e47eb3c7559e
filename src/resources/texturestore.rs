//! Texture store resource.
//!
//! Holds the sprite sheet and tileset textures keyed by string IDs. This is a
//! non-send resource because raylib textures must stay on the main thread;
//! insert it with `insert_non_send_resource` and read it with `NonSend`.
//! Dropping the store unloads every texture.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Unload all textures.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
