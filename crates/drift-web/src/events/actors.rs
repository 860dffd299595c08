use super::SceneWiring;
use drift_core::{ActorId, ClickOutcome, Scene};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Weak;

pub fn wire_actor_handlers(w: &SceneWiring) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(w.actor_nodes.len() * 3);
    for (id, node) in &w.actor_nodes {
        listeners.push(wire_click(&w.scene, *id, node));
        listeners.push(wire_hover(&w.scene, *id, node, "pointerenter", true));
        listeners.push(wire_hover(&w.scene, *id, node, "pointerleave", false));
    }
    listeners
}

fn wire_click(scene: &Weak<RefCell<Scene>>, id: ActorId, node: &web_sys::HtmlElement) -> EventListener {
    let scene = scene.clone();
    EventListener::new(node, "click", move |ev| {
        // Keep the click from reaching hero content underneath
        ev.stop_propagation();
        let Some(scene) = scene.upgrade() else {
            return;
        };
        let Ok(mut scene) = scene.try_borrow_mut() else {
            log::warn!("[actor] click on {} dropped; scene busy", id);
            return;
        };
        match scene.click(id) {
            ClickOutcome::DanceStarted => log::info!("[actor] {} dancing", id),
            other => log::debug!("[actor] click on {}: {:?}", id, other),
        }
    })
}

fn wire_hover(
    scene: &Weak<RefCell<Scene>>,
    id: ActorId,
    node: &web_sys::HtmlElement,
    event: &'static str,
    hovered: bool,
) -> EventListener {
    let scene = scene.clone();
    EventListener::new(node, event, move |_| {
        if let Some(scene) = scene.upgrade() {
            if let Ok(mut scene) = scene.try_borrow_mut() {
                scene.set_hovered(id, hovered);
            }
        }
    })
}
