use crate::constants::SPRITE_ATTR;
use crate::style;
use drift_core::{BoundingBox, SpriteKey, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()? as f32;
    let height = w.inner_height().ok()?.as_f64()? as f32;
    Viewport::new(width, height).ok()
}

/// `None` while the element has no layout yet.
pub fn bounding_box(el: &web::Element) -> Option<BoundingBox> {
    if !el.is_connected() {
        return None;
    }
    let rect = el.get_bounding_client_rect();
    let bbox = BoundingBox {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    };
    bbox.is_usable().then_some(bbox)
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not an HTML element", id))
}

/// Creates an empty `div` tagged with the sprite key and appends it to `parent`.
pub fn append_sprite_node(
    document: &web::Document,
    parent: &web::Node,
    class: &str,
    key: SpriteKey,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("div is not an HTML element"))?;
    el.set_class_name(class);
    el.set_attribute(SPRITE_ATTR, &style::sprite_tag(key))
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}
