#![cfg(target_arch = "wasm32")]
//! Mounts the drift hero scene onto a page.
//!
//! ```js
//! import init, { mount } from "./drift_web.js";
//! await init();
//! const handle = mount("hero");
//! // later
//! handle.unmount();
//! ```

mod constants;
mod dom;
mod events;
mod frame;
mod settings;
mod style;
mod surface;

use crate::constants::{DANCING_CLASS, SPEED_MODE_ATTR};
use crate::events::SceneWiring;
use crate::frame::{FrameContext, FrameLoop};
use crate::surface::DomSurface;
use drift_core::{ActorEvent, ActorId, Scene, SceneEvent};
use fnv::FnvHashMap;
use gloo::events::EventListener;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");
    Ok(())
}

/// A mounted scene. Unmounting (or dropping the handle) removes every node
/// and listener and cancels all pending timers and frames.
#[wasm_bindgen]
pub struct SceneHandle {
    scene: Rc<RefCell<Scene>>,
    listeners: Vec<EventListener>,
    frame_loop: Option<FrameLoop>,
    frame_ctx: Option<Rc<RefCell<FrameContext>>>,
}

#[wasm_bindgen]
impl SceneHandle {
    pub fn unmount(&mut self) {
        // Listeners first so nothing can write into the scene mid-teardown
        self.listeners.clear();
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        if let Ok(mut scene) = self.scene.try_borrow_mut() {
            scene.unmount();
        }
        if let Some(ctx) = self.frame_ctx.take() {
            if let Ok(mut ctx) = ctx.try_borrow_mut() {
                ctx.surface.detach();
            }
        }
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.scene.borrow().is_mounted()
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Composes the scene for the current viewport inside `#container_id` and
/// starts animating it.
#[wasm_bindgen]
pub fn mount(container_id: &str) -> Result<SceneHandle, JsValue> {
    mount_scene(container_id).map_err(|e| {
        log::error!("[scene] mount failed: {:#}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

fn mount_scene(container_id: &str) -> anyhow::Result<SceneHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::html_element_by_id(&document, container_id)?;
    let viewport = dom::viewport().ok_or_else(|| anyhow::anyhow!("viewport size unavailable"))?;

    let speed_attr = container.get_attribute(SPEED_MODE_ATTR);
    let config = settings::scene_config(speed_attr.as_deref(), rand::random());
    let mut scene = Scene::compose(viewport, config)?;
    log::info!(
        "[scene] mounting into #{} speed={:?}",
        container_id,
        config.speed_mode
    );

    let sprites = scene.sprites();
    let surface = DomSurface::attach(&document, &container, &sprites)?;
    let dancers: FnvHashMap<ActorId, web::HtmlElement> =
        surface.actor_nodes().into_iter().collect();
    scene.set_observer(move |event: &SceneEvent| {
        let dancing = match event.kind {
            ActorEvent::DanceStarted => true,
            ActorEvent::DanceFinished => false,
            _ => return,
        };
        if let Some(el) = dancers.get(&event.actor) {
            _ = el.class_list().toggle_with_force(DANCING_CLASS, dancing);
        }
    });
    let scene = Rc::new(RefCell::new(scene));

    let wiring = SceneWiring {
        scene: Rc::downgrade(&scene),
        window,
        actor_nodes: surface.actor_nodes(),
    };
    let listeners = events::wire_scene_listeners(&wiring);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        scene: scene.clone(),
        surface,
        container: container.into(),
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx.clone());

    Ok(SceneHandle {
        scene,
        listeners,
        frame_loop: Some(frame_loop),
        frame_ctx: Some(frame_ctx),
    })
}
