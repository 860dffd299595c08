use super::SceneWiring;
use crate::dom;
use gloo::events::EventListener;

pub fn wire_resize(w: &SceneWiring) -> EventListener {
    let scene = w.scene.clone();
    EventListener::new(&w.window, "resize", move |_| {
        let (Some(scene), Some(viewport)) = (scene.upgrade(), dom::viewport()) else {
            return;
        };
        let Ok(mut scene) = scene.try_borrow_mut() else {
            return;
        };
        if let Err(e) = scene.resize(viewport) {
            log::warn!("[scene] resize rejected: {}", e);
        }
    })
}
