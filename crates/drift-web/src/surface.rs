//! DOM-backed [`RenderSurface`]: one absolutely positioned node per sprite,
//! moved with CSS transforms.
//!
//! Actor and shape nodes live inside the hero container. The follower rings
//! are fixed-position children of `<body>` because they track viewport
//! coordinates. Every node is removed again when the surface is dropped.

use crate::constants::{ACTOR_CLASS, ACTOR_Z_INDEX, RING_CLASS, RING_Z_INDEX, SHAPE_CLASS};
use crate::dom;
use crate::style;
use drift_core::{ActorId, RenderSurface, Sprite, SpriteKey};
use fnv::FnvHashMap;
use web_sys as web;

pub struct DomSurface {
    nodes: FnvHashMap<SpriteKey, web::HtmlElement>,
}

impl DomSurface {
    /// Creates a node for each sprite the scene currently draws.
    pub fn attach(
        document: &web::Document,
        container: &web::HtmlElement,
        sprites: &[Sprite],
    ) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
        let mut surface = Self {
            nodes: FnvHashMap::default(),
        };
        for sprite in sprites {
            let (parent, class, position, z_index) = match sprite.key {
                SpriteKey::Actor(_) => (container, ACTOR_CLASS, "absolute", ACTOR_Z_INDEX),
                SpriteKey::Follower(_) => (&body, RING_CLASS, "fixed", RING_Z_INDEX),
                SpriteKey::Shape(_) => (container, SHAPE_CLASS, "absolute", "auto"),
            };
            // Surface is dropped on error, which removes nodes created so far
            let el = dom::append_sprite_node(document, parent.as_ref(), class, sprite.key)?;
            dom::set_style(&el, "position", position);
            match sprite.anchor {
                Some(anchor) => {
                    for (side, inset) in anchor.insets() {
                        dom::set_style(&el, side, &style::css_px(inset));
                    }
                }
                None => {
                    dom::set_style(&el, "left", "0");
                    dom::set_style(&el, "top", "0");
                }
            }
            dom::set_style(&el, "z-index", z_index);
            dom::set_style(&el, "width", &style::css_px(sprite.size));
            dom::set_style(&el, "height", &style::css_px(sprite.size));
            dom::set_style(&el, "will-change", "transform");
            dom::set_style(
                &el,
                "pointer-events",
                style::pointer_events(sprite.key, &sprite.transform),
            );
            for (name, value) in style::palette_properties(sprite.color) {
                dom::set_style(&el, name, &value);
            }
            surface.nodes.insert(sprite.key, el);
        }
        log::debug!("[surface] attached {} nodes", surface.nodes.len());
        Ok(surface)
    }

    /// Actor nodes, for wiring click and hover listeners.
    pub fn actor_nodes(&self) -> Vec<(ActorId, web::HtmlElement)> {
        let mut out: Vec<_> = self
            .nodes
            .iter()
            .filter_map(|(key, el)| match key {
                SpriteKey::Actor(id) => Some((*id, el.clone())),
                _ => None,
            })
            .collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    pub fn detach(&mut self) {
        for (_, el) in self.nodes.drain() {
            el.remove();
        }
    }
}

impl RenderSurface for DomSurface {
    fn draw(&mut self, sprite: &Sprite) {
        let Some(el) = self.nodes.get(&sprite.key) else {
            log::trace!("[surface] no node for {:?}", sprite.key);
            return;
        };
        dom::set_style(el, "transform", &style::css_transform(&sprite.transform));
        dom::set_style(el, "opacity", &style::css_opacity(&sprite.transform));
        if matches!(sprite.key, SpriteKey::Actor(_)) {
            dom::set_style(el, "pointer-events", style::pointer_events(sprite.key, &sprite.transform));
        }
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        self.detach();
    }
}
