pub mod actors;
pub mod pointer;
pub mod viewport;

use drift_core::{ActorId, Scene};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Weak;
use web_sys as web;

/// Everything the listeners need. The scene is held weakly so a callback
/// that fires after teardown finds nothing to update.
#[derive(Clone)]
pub struct SceneWiring {
    pub scene: Weak<RefCell<Scene>>,
    pub window: web::Window,
    pub actor_nodes: Vec<(ActorId, web::HtmlElement)>,
}

/// Registers every listener; dropping the returned guards removes them.
pub fn wire_scene_listeners(w: &SceneWiring) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(2 + w.actor_nodes.len() * 3);
    listeners.push(pointer::wire_pointermove(w));
    listeners.push(viewport::wire_resize(w));
    listeners.extend(actors::wire_actor_handlers(w));
    listeners
}
