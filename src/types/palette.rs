//! The game palette: a fixed registry of named colours.
//!
//! Every asset the generator produces draws exclusively from this table.
//! Most materials come as a light/mid/shadow triad so composition
//! procedures can fake shading without any lighting computation; that
//! convention is a design rule for callers, not something the registry
//! enforces.

use std::collections::HashMap;

use crate::error::{PxgenError, Result};

use super::Colour;

/// The literal colour table. Built into a [`Palette`] once at startup and
/// never mutated afterwards.
const GAME_COLOURS: &[(&str, Colour)] = &[
    ("ink", Colour::new(20, 18, 28, 255)),
    ("coal", Colour::new(34, 32, 46, 255)),
    ("midnight", Colour::new(12, 10, 18, 255)),
    ("cinder", Colour::new(54, 54, 76, 255)),
    ("moon", Colour::new(218, 214, 210, 255)),
    ("mist", Colour::new(170, 174, 188, 255)),
    ("fog", Colour::new(126, 132, 152, 255)),
    ("skin_light", Colour::new(224, 184, 150, 255)),
    ("skin_mid", Colour::new(198, 160, 126, 255)),
    ("skin_shadow", Colour::new(156, 120, 92, 255)),
    ("scarlet", Colour::new(150, 40, 54, 255)),
    ("scarlet_light", Colour::new(182, 74, 82, 255)),
    ("coat_dark", Colour::new(58, 28, 86, 255)),
    ("coat_mid", Colour::new(88, 52, 120, 255)),
    ("coat_high", Colour::new(132, 88, 162, 255)),
    ("coat_trim", Colour::new(200, 122, 180, 255)),
    ("denim_dark", Colour::new(36, 48, 72, 255)),
    ("denim_mid", Colour::new(58, 78, 110, 255)),
    ("boot_dark", Colour::new(24, 24, 32, 255)),
    ("boot_high", Colour::new(74, 74, 94, 255)),
    ("glow_gold", Colour::new(247, 214, 92, 255)),
    ("glow_soft", Colour::new(244, 232, 160, 180)),
    ("halo_gold", Colour::new(247, 230, 120, 60)),
    ("halo_gold_soft", Colour::new(247, 230, 120, 45)),
    ("halo_gold_faint", Colour::new(247, 230, 120, 30)),
    ("dress_light", Colour::new(246, 215, 112, 255)),
    ("dress_mid", Colour::new(214, 180, 78, 255)),
    ("dress_shadow", Colour::new(172, 136, 60, 255)),
    ("hair_dark", Colour::new(40, 38, 60, 255)),
    ("hair_soft", Colour::new(72, 68, 92, 255)),
    ("hair_high", Colour::new(114, 108, 140, 255)),
    ("shadow_void", Colour::new(16, 12, 28, 255)),
    ("shadow_core", Colour::new(8, 6, 18, 255)),
    ("shadow_high", Colour::new(40, 32, 66, 255)),
    ("red_eye", Colour::new(212, 32, 32, 255)),
    ("red_eye_glow", Colour::new(252, 86, 60, 255)),
    ("clinic_white", Colour::new(236, 238, 246, 255)),
    ("clinic_shade", Colour::new(208, 208, 220, 255)),
    ("clinic_shadow", Colour::new(156, 158, 178, 255)),
    ("clipboard", Colour::new(132, 96, 70, 255)),
    ("clipboard_paper", Colour::new(230, 226, 214, 255)),
    ("anchor_core", Colour::new(252, 200, 88, 255)),
    ("anchor_high", Colour::new(255, 238, 140, 255)),
    ("anchor_shadow", Colour::new(190, 128, 54, 255)),
    ("tile_base", Colour::new(24, 26, 36, 255)),
    ("tile_light", Colour::new(42, 46, 58, 255)),
    ("tile_mid", Colour::new(32, 34, 48, 255)),
    ("tile_high", Colour::new(66, 70, 94, 255)),
    ("crack", Colour::new(74, 38, 64, 255)),
    ("void", Colour::new(6, 4, 14, 255)),
    ("haze", Colour::new(98, 72, 140, 255)),
    ("echo_core", Colour::new(120, 140, 208, 200)),
    ("echo_ring", Colour::new(164, 182, 236, 160)),
    ("echo_halo", Colour::new(84, 104, 180, 220)),
];

/// A read-only collection of named colours.
#[derive(Debug, Clone)]
pub struct Palette {
    colours: HashMap<&'static str, Colour>,
}

impl Palette {
    /// Build the game palette from the literal table.
    pub fn game() -> Self {
        Self {
            colours: GAME_COLOURS.iter().copied().collect(),
        }
    }

    /// Look up a colour by name.
    ///
    /// An absent name is a programming error in a composition procedure, so
    /// it fails loudly instead of substituting a default.
    pub fn lookup(&self, name: &str) -> Result<Colour> {
        self.colours
            .get(name)
            .copied()
            .ok_or_else(|| PxgenError::UnknownColour {
                name: name.to_string(),
                help: Some("Check the colour table in types/palette.rs".to_string()),
            })
    }

    /// Get a colour by name without the error wrapping.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.colours.get(name).copied()
    }

    /// All colour names, unordered.
    pub fn colour_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.colours.keys().copied()
    }

    /// Number of colours in the registry.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::game()
    }
}
