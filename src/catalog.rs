//! The asset catalog: every named output the generator knows how to build.
//!
//! A build run walks this table in order and regenerates each entry from
//! scratch; nothing is incremental.

use serde::Serialize;

use crate::error::Result;
use crate::render::{sprites, tiles, Canvas};
use crate::types::Palette;

/// What kind of asset an entry produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Sprite,
    Tile,
}

impl AssetKind {
    pub fn name(self) -> &'static str {
        match self {
            AssetKind::Sprite => "sprite",
            AssetKind::Tile => "tile",
        }
    }
}

/// One named output: a file stem plus the procedure that composes it.
#[derive(Clone, Copy)]
pub struct Asset {
    /// Logical name, doubling as the output file stem.
    pub name: &'static str,
    pub kind: AssetKind,
    compose: fn(&Palette) -> Result<Canvas>,
}

impl Asset {
    /// Compose the asset's canvas.
    pub fn compose(&self, palette: &Palette) -> Result<Canvas> {
        (self.compose)(palette)
    }

    /// Output filename, `<name>.png`.
    pub fn filename(&self) -> String {
        format!("{}.png", self.name)
    }
}

const ASSETS: &[Asset] = &[
    Asset {
        name: "arturo",
        kind: AssetKind::Sprite,
        compose: sprites::arturo,
    },
    Asset {
        name: "la_nina",
        kind: AssetKind::Sprite,
        compose: sprites::la_nina,
    },
    Asset {
        name: "el_critico",
        kind: AssetKind::Sprite,
        compose: sprites::el_critico,
    },
    Asset {
        name: "burocrata",
        kind: AssetKind::Sprite,
        compose: sprites::burocrata,
    },
    Asset {
        name: "enemy_echo",
        kind: AssetKind::Sprite,
        compose: sprites::enemy_echo,
    },
    Asset {
        name: "anchor_fragmento",
        kind: AssetKind::Sprite,
        compose: sprites::anchor,
    },
    Asset {
        name: "tile_ground",
        kind: AssetKind::Tile,
        compose: tiles::tile_ground,
    },
    Asset {
        name: "tile_fracture",
        kind: AssetKind::Tile,
        compose: tiles::tile_fracture,
    },
    Asset {
        name: "tile_ruin",
        kind: AssetKind::Tile,
        compose: tiles::tile_ruin,
    },
];

/// All known assets, in build order.
pub fn all() -> &'static [Asset] {
    ASSETS
}
