//! Tile texture synthesis.
//!
//! Tiles are 16x16 repeating background textures. `tile_ground` mixes a
//! hand-seeded speckle with a per-pixel coordinate rule; the other tiles
//! are plain shape sequences like the character sprites.

use crate::error::Result;
use crate::render::Canvas;
use crate::types::Palette;

/// Tile edge length in pixels.
pub const TILE_SIZE: u32 = 16;

/// Hand-authored speckle seed for the ground tile.
const GROUND_SEED: &[(i32, i32)] = &[
    (0, 0),
    (5, 1),
    (10, 2),
    (3, 4),
    (12, 5),
    (7, 7),
    (1, 9),
    (9, 10),
    (14, 12),
];

/// The ground tile: flat base, speckle seed, then the coordinate-modulo
/// overlay.
pub fn tile_ground(palette: &Palette) -> Result<Canvas> {
    let base = palette.lookup("tile_base")?;
    let light = palette.lookup("tile_light")?;
    let mid = palette.lookup("tile_mid")?;
    let high = palette.lookup("tile_high")?;

    let mut canvas = Canvas::new(TILE_SIZE, TILE_SIZE, base);

    for &(x, y) in GROUND_SEED {
        canvas.point(x, y, light);
    }

    // Both rules run in this order on the same grid, so the second rule's
    // write wins wherever both conditions hold. Keep it sequential; the
    // texture depends on that precedence.
    for y in 0..TILE_SIZE as i32 {
        for x in 0..TILE_SIZE as i32 {
            if (x + y) % 5 == 0 {
                canvas.point(x, y, mid);
            }
            if (x * 3 + y * 5) % 19 == 0 {
                canvas.point(x, y, high);
            }
        }
    }

    Ok(canvas)
}

/// The fracture tile: a haze block split by cross and diagonal seams.
pub fn tile_fracture(palette: &Palette) -> Result<Canvas> {
    let void = palette.lookup("void")?;
    let haze = palette.lookup("haze")?;
    let crack = palette.lookup("crack")?;
    let anchor_high = palette.lookup("anchor_high")?;

    let mut canvas = Canvas::new(TILE_SIZE, TILE_SIZE, void);

    canvas.rect(2, 2, 13, 13, haze);
    canvas.line(0, 8, 16, 8, crack);
    canvas.line(8, 0, 8, 16, crack);
    canvas.line(2, 2, 14, 14, anchor_high);
    canvas.line(2, 14, 14, 2, anchor_high);

    Ok(canvas)
}

/// The ruin tile: collapsed masonry along the lower half.
pub fn tile_ruin(palette: &Palette) -> Result<Canvas> {
    let mid = palette.lookup("tile_mid")?;
    let base = palette.lookup("tile_base")?;
    let light = palette.lookup("tile_light")?;
    let crack = palette.lookup("crack")?;

    let mut canvas = Canvas::new(TILE_SIZE, TILE_SIZE, mid);

    canvas.rect(0, 8, 15, 15, base);
    canvas.rect(2, 10, 13, 13, light);
    canvas.line(2, 12, 13, 12, crack);
    canvas.line(7, 10, 5, 14, crack);

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn palette() -> Palette {
        Palette::game()
    }

    #[test]
    fn test_tiles_are_square() {
        let p = palette();
        for tile in [tile_ground, tile_fracture, tile_ruin] {
            assert_eq!(tile(&p).unwrap().size(), (TILE_SIZE, TILE_SIZE));
        }
    }

    #[test]
    fn test_tiles_deterministic() {
        let p = palette();
        assert_eq!(tile_ground(&p).unwrap(), tile_ground(&p).unwrap());
        assert_eq!(tile_fracture(&p).unwrap(), tile_fracture(&p).unwrap());
        assert_eq!(tile_ruin(&p).unwrap(), tile_ruin(&p).unwrap());
    }

    #[test]
    fn test_ground_modulo_precedence() {
        let p = palette();
        let tile = tile_ground(&p).unwrap();
        // (0,0): both rules hold; the second write wins.
        assert_eq!(tile.get(0, 0), Some(p.lookup("tile_high").unwrap()));
        // (1,4): only (x+y) % 5 == 0.
        assert_eq!(tile.get(1, 4), Some(p.lookup("tile_mid").unwrap()));
        // (1,7): only (3x+5y) % 19 == 0 (3 + 35 = 38).
        assert_eq!(tile.get(1, 7), Some(p.lookup("tile_high").unwrap()));
    }

    #[test]
    fn test_ground_seed_and_base_survive() {
        let p = palette();
        let tile = tile_ground(&p).unwrap();
        // Seeded speckle untouched by either rule: 5+1, 3*5+5*1 = 20.
        assert_eq!(tile.get(5, 1), Some(p.lookup("tile_light").unwrap()));
        // Neither rule, no seed: plain base.
        assert_eq!(tile.get(2, 0), Some(p.lookup("tile_base").unwrap()));
    }

    #[test]
    fn test_fracture_seams() {
        let p = palette();
        let tile = tile_fracture(&p).unwrap();
        // The main diagonal overdraws the cross at the centre.
        assert_eq!(tile.get(8, 8), Some(p.lookup("anchor_high").unwrap()));
        assert_eq!(tile.get(0, 8), Some(p.lookup("crack").unwrap()));
        // Lines past the edge clip instead of failing.
        assert_eq!(tile.get(15, 8), Some(p.lookup("crack").unwrap()));
        assert_eq!(tile.get(0, 0), Some(p.lookup("void").unwrap()));
        assert_eq!(tile.get(3, 4), Some(p.lookup("haze").unwrap()));
    }

    #[test]
    fn test_ruin_layers() {
        let p = palette();
        let tile = tile_ruin(&p).unwrap();
        assert_eq!(tile.get(0, 0), Some(p.lookup("tile_mid").unwrap()));
        assert_eq!(tile.get(0, 8), Some(p.lookup("tile_base").unwrap()));
        assert_eq!(tile.get(3, 11), Some(p.lookup("tile_light").unwrap()));
        assert_eq!(tile.get(3, 12), Some(p.lookup("crack").unwrap()));
        assert_eq!(tile.get(5, 14), Some(p.lookup("crack").unwrap()));
    }
}
