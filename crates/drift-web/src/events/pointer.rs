use super::SceneWiring;
use crate::constants::POINTER_TYPE_TOUCH;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global pointer tracking for the follower rings and parallax shapes.
pub fn wire_pointermove(w: &SceneWiring) -> EventListener {
    let scene = w.scene.clone();
    EventListener::new(&w.window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if ev.pointer_type() == POINTER_TYPE_TOUCH {
            return;
        }
        let Some(scene) = scene.upgrade() else {
            return;
        };
        // Skip rather than panic if a frame holds the scene
        if let Ok(mut scene) = scene.try_borrow_mut() {
            scene.pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}
