// Pure CSS formatting for sprites; no DOM access so it can be tested on the host.

use drift_core::{ColorScheme, FollowerRing, Hsl, SpriteKey, Transform2D};

#[inline]
pub fn css_transform(t: &Transform2D) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) rotate({:.2}deg) scale({:.3})",
        t.x, t.y, t.rotation_deg, t.scale
    )
}

#[inline]
pub fn css_opacity(t: &Transform2D) -> String {
    format!("{:.3}", t.opacity.clamp(0.0, 1.0))
}

#[inline]
pub fn css_hsl(c: Hsl) -> String {
    format!("hsl({}, {}%, {}%)", c.h, c.s, c.l)
}

/// Custom properties the stylesheet uses to paint a sprite in its scheme.
pub fn palette_properties(scheme: ColorScheme) -> [(&'static str, String); 3] {
    let p = scheme.palette();
    [
        ("--drift-primary", css_hsl(p.primary)),
        ("--drift-secondary", css_hsl(p.secondary)),
        ("--drift-accent", css_hsl(p.accent)),
    ]
}

/// Value of the sprite attribute, e.g. `actor-2`, `ring-outer`, `shape-0`.
pub fn sprite_tag(key: SpriteKey) -> String {
    match key {
        SpriteKey::Actor(id) => format!("actor-{}", id.0),
        SpriteKey::Follower(FollowerRing::Inner) => "ring-inner".to_string(),
        SpriteKey::Follower(FollowerRing::Outer) => "ring-outer".to_string(),
        SpriteKey::Shape(id) => format!("shape-{}", id.0),
    }
}

#[inline]
pub fn css_px(v: f32) -> String {
    format!("{:.0}px", v)
}

/// Only visible actors take hover and clicks; rings and shapes are
/// decoration and let input through to the page.
#[inline]
pub fn pointer_events(key: SpriteKey, t: &Transform2D) -> &'static str {
    match key {
        SpriteKey::Actor(_) if t.opacity > 0.0 => "auto",
        _ => "none",
    }
}
