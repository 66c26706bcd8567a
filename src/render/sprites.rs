//! Character sprite composition.
//!
//! Each procedure builds one canvas from a fixed, ordered sequence of
//! primitive calls. Z-order is call order: later shapes overwrite earlier
//! pixels, except the glow shapes which alpha-composite. Every colour comes
//! from the game palette, so an unknown name fails the whole asset.

use crate::error::Result;
use crate::render::Canvas;
use crate::types::{Colour, Palette};

/// The cloaked protagonist, 24x34.
pub fn arturo(palette: &Palette) -> Result<Canvas> {
    let hair_dark = palette.lookup("hair_dark")?;
    let hair_soft = palette.lookup("hair_soft")?;
    let hair_high = palette.lookup("hair_high")?;
    let skin_light = palette.lookup("skin_light")?;
    let skin_mid = palette.lookup("skin_mid")?;
    let skin_shadow = palette.lookup("skin_shadow")?;
    let ink = palette.lookup("ink")?;
    let scarlet = palette.lookup("scarlet")?;
    let scarlet_light = palette.lookup("scarlet_light")?;
    let coat_dark = palette.lookup("coat_dark")?;
    let coat_mid = palette.lookup("coat_mid")?;
    let coat_high = palette.lookup("coat_high")?;
    let coat_trim = palette.lookup("coat_trim")?;
    let denim_dark = palette.lookup("denim_dark")?;
    let denim_mid = palette.lookup("denim_mid")?;
    let boot_dark = palette.lookup("boot_dark")?;
    let boot_high = palette.lookup("boot_high")?;

    let mut canvas = Canvas::new(24, 34, Colour::TRANSPARENT);

    // Hair
    canvas.rect(6, 1, 17, 5, hair_dark);
    canvas.rect(7, 2, 16, 4, hair_soft);
    canvas.rect(5, 5, 18, 7, hair_dark);
    canvas.rect(6, 6, 17, 7, hair_high);
    canvas.rect(5, 7, 6, 12, hair_dark);
    canvas.rect(17, 7, 18, 12, hair_dark);

    // Face
    canvas.rect(8, 8, 15, 15, skin_mid);
    canvas.rect(9, 9, 14, 13, skin_light);
    canvas.rect(9, 13, 14, 13, skin_shadow);
    canvas.point(10, 11, ink);
    canvas.point(13, 11, ink);
    canvas.point(11, 12, skin_shadow);
    canvas.point(12, 12, skin_shadow);
    canvas.line(10, 14, 13, 14, scarlet_light);

    // Scarf
    canvas.rect(8, 15, 15, 17, scarlet);
    canvas.rect(10, 15, 13, 17, scarlet_light);
    canvas.rect(11, 17, 14, 21, scarlet);

    // Coat body
    canvas.polygon(&[(4, 18), (19, 18), (21, 32), (2, 32)], coat_dark);
    canvas.polygon(&[(5, 19), (18, 19), (19, 31), (4, 31)], coat_mid);
    canvas.polygon(&[(7, 20), (16, 20), (15, 30), (8, 30)], coat_high);
    canvas.rect(10, 20, 12, 29, coat_trim);

    // Arms
    canvas.rect(2, 20, 5, 29, coat_dark);
    canvas.rect(18, 20, 21, 29, coat_dark);
    canvas.rect(3, 21, 4, 28, coat_mid);
    canvas.rect(19, 21, 20, 28, coat_mid);

    // Gloved hands
    canvas.rect(3, 28, 4, 30, scarlet);
    canvas.rect(19, 28, 20, 30, scarlet);

    // Belt
    canvas.rect(7, 24, 17, 25, scarlet_light);
    canvas.line(7, 26, 17, 26, coat_trim);

    // Trousers and boots
    canvas.rect(8, 30, 11, 33, denim_dark);
    canvas.rect(12, 30, 15, 33, denim_dark);
    canvas.rect(9, 30, 10, 33, denim_mid);
    canvas.rect(13, 30, 14, 33, denim_mid);
    canvas.rect(7, 32, 11, 33, boot_dark);
    canvas.rect(12, 32, 16, 33, boot_dark);
    canvas.rect(8, 32, 10, 33, boot_high);
    canvas.rect(13, 32, 15, 33, boot_high);

    Ok(canvas)
}

/// The luminous child, 18x28, wrapped in a soft golden halo.
pub fn la_nina(palette: &Palette) -> Result<Canvas> {
    let halo = [
        palette.lookup("halo_gold")?,
        palette.lookup("halo_gold_soft")?,
        palette.lookup("halo_gold_faint")?,
    ];
    let hair_dark = palette.lookup("hair_dark")?;
    let hair_high = palette.lookup("hair_high")?;
    let skin_light = palette.lookup("skin_light")?;
    let skin_shadow = palette.lookup("skin_shadow")?;
    let dress_light = palette.lookup("dress_light")?;
    let dress_mid = palette.lookup("dress_mid")?;
    let dress_shadow = palette.lookup("dress_shadow")?;
    let scarlet = palette.lookup("scarlet")?;

    let mut canvas = Canvas::new(18, 28, Colour::TRANSPARENT);

    // Halo: concentric rectangles of fading alpha, composited so the inner
    // region accumulates the glow.
    for (i, colour) in halo.into_iter().enumerate() {
        let i = i as i32;
        canvas.rect_blend(1 + i, 3 + i, 16 - i, 26 - i, colour);
    }

    // Hair and head
    canvas.rect(5, 4, 12, 8, hair_dark);
    canvas.rect(6, 5, 11, 7, hair_high);
    canvas.rect(6, 8, 11, 14, skin_light);
    canvas.rect(6, 13, 11, 13, skin_shadow);
    canvas.point(7, 10, hair_dark);
    canvas.point(10, 10, hair_dark);
    canvas.point(8, 11, hair_dark);

    // Dress
    canvas.rect(5, 14, 12, 18, dress_mid);
    canvas.polygon(&[(3, 18), (14, 18), (16, 25), (2, 25)], dress_mid);
    canvas.polygon(&[(5, 18), (12, 18), (13, 24), (4, 24)], dress_light);
    canvas.polygon(&[(3, 18), (6, 18), (5, 25), (2, 25)], dress_shadow);

    // Bows
    canvas.rect(7, 14, 9, 15, dress_light);
    canvas.rect(6, 15, 8, 16, dress_shadow);

    // Legs and shoes
    canvas.rect(6, 25, 7, 27, skin_light);
    canvas.rect(9, 25, 10, 27, skin_light);
    canvas.rect(5, 27, 7, 27, scarlet);
    canvas.rect(9, 27, 11, 27, scarlet);

    Ok(canvas)
}

/// The shadow antagonist, 24x36, with glowing red eyes.
pub fn el_critico(palette: &Palette) -> Result<Canvas> {
    let shadow_void = palette.lookup("shadow_void")?;
    let shadow_core = palette.lookup("shadow_core")?;
    let shadow_high = palette.lookup("shadow_high")?;
    let red_eye = palette.lookup("red_eye")?;
    let red_eye_glow = palette.lookup("red_eye_glow")?;
    let scarlet = palette.lookup("scarlet")?;

    let mut canvas = Canvas::new(24, 36, Colour::TRANSPARENT);

    // Body silhouette
    canvas.polygon(&[(6, 4), (17, 4), (22, 34), (2, 34)], shadow_void);
    canvas.polygon(&[(7, 6), (16, 6), (20, 33), (4, 33)], shadow_core);
    canvas.polygon(&[(9, 10), (14, 10), (17, 32), (6, 32)], shadow_high);

    // Featureless face
    canvas.rect(9, 9, 15, 15, shadow_void);
    canvas.rect(10, 11, 14, 13, shadow_high);

    // Eyes
    canvas.rect(10, 13, 11, 14, red_eye);
    canvas.rect(13, 13, 14, 14, red_eye);
    canvas.point(11, 13, red_eye_glow);
    canvas.point(13, 13, red_eye_glow);

    // Torso grooves
    for offset in 0..4 {
        canvas.line(8 + offset * 3, 16, 5 + offset * 3, 32, shadow_void);
    }

    // Claws
    canvas.rect(5, 30, 7, 33, scarlet);
    canvas.rect(16, 30, 18, 33, scarlet);

    Ok(canvas)
}

/// The featureless clinical administrator, 20x28, holding a clipboard.
pub fn burocrata(palette: &Palette) -> Result<Canvas> {
    let clinic_white = palette.lookup("clinic_white")?;
    let clinic_shade = palette.lookup("clinic_shade")?;
    let clinic_shadow = palette.lookup("clinic_shadow")?;
    let clipboard = palette.lookup("clipboard")?;
    let clipboard_paper = palette.lookup("clipboard_paper")?;
    let ink = palette.lookup("ink")?;

    let mut canvas = Canvas::new(20, 28, Colour::TRANSPARENT);

    canvas.rect(6, 4, 13, 24, clinic_white);
    canvas.rect(7, 6, 12, 10, clinic_shade);
    canvas.rect(7, 10, 12, 22, clinic_white);
    canvas.rect(6, 22, 13, 24, clinic_shadow);

    // Faceless head
    canvas.rect(7, 0, 12, 6, clinic_shade);
    canvas.rect(8, 1, 11, 5, clinic_white);

    // Crossed arms
    canvas.rect(4, 12, 6, 24, clinic_shade);
    canvas.rect(13, 12, 15, 24, clinic_shade);

    // Clipboard
    canvas.rect(1, 13, 6, 22, clipboard);
    canvas.rect(2, 14, 5, 21, clipboard_paper);
    canvas.line(2, 16, 5, 16, ink);

    Ok(canvas)
}

/// The circular echo enemy marker, 16x16.
pub fn enemy_echo(palette: &Palette) -> Result<Canvas> {
    let echo_halo = palette.lookup("echo_halo")?;
    let echo_ring = palette.lookup("echo_ring")?;
    let echo_core = palette.lookup("echo_core")?;
    let shadow_core = palette.lookup("shadow_core")?;

    let mut canvas = Canvas::new(16, 16, Colour::TRANSPARENT);

    canvas.ellipse_blend(2, 2, 13, 13, echo_halo);
    canvas.ellipse_blend(4, 4, 11, 11, echo_ring);
    canvas.ellipse_blend(6, 6, 9, 9, echo_core);
    canvas.point(7, 7, shadow_core);
    canvas.point(8, 7, shadow_core);

    Ok(canvas)
}

/// The glowing anchor pickup, 14x20.
pub fn anchor(palette: &Palette) -> Result<Canvas> {
    let glow_soft = palette.lookup("glow_soft")?;
    let anchor_shadow = palette.lookup("anchor_shadow")?;
    let anchor_core = palette.lookup("anchor_core")?;
    let anchor_high = palette.lookup("anchor_high")?;
    let clinic_white = palette.lookup("clinic_white")?;

    let mut canvas = Canvas::new(14, 20, Colour::TRANSPARENT);

    // Outer glow
    canvas.ellipse_blend(0, 2, 13, 19, glow_soft);
    canvas.ellipse(2, 4, 11, 17, anchor_shadow);
    canvas.rect(5, 6, 8, 15, anchor_core);
    canvas.rect(4, 8, 9, 13, anchor_high);
    canvas.point(6, 7, clinic_white);
    canvas.point(7, 9, clinic_white);

    Ok(canvas)
}
