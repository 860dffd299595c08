use crate::dom;
use crate::surface::DomSurface;
use drift_core::constants::MAX_FRAME_DT;
use drift_core::Scene;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: DomSurface,
    pub container: web::Element,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        // Background tabs pause rAF; one long gap must not teleport anything
        let dt = (now - self.last_instant).min(MAX_FRAME_DT);
        self.last_instant = now;

        let Ok(mut scene) = self.scene.try_borrow_mut() else {
            log::warn!("[frame] scene busy; frame skipped");
            return;
        };
        if !scene.is_mounted() {
            return;
        }
        scene.set_container(dom::bounding_box(&self.container));
        scene.tick(dt);
        scene.render(&mut self.surface);
    }
}

/// Handle to the running animation loop. Dropping it cancels the pending frame.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        if self.running.replace(false) {
            self.pending.borrow_mut().take();
            log::debug!("[frame] loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let frame_loop = FrameLoop {
        pending: Rc::new(RefCell::new(None)),
        running: Rc::new(Cell::new(true)),
    };
    schedule(frame_ctx, frame_loop.pending.clone(), frame_loop.running.clone());
    frame_loop
}

fn schedule(
    frame_ctx: Rc<RefCell<FrameContext>>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
) {
    let pending_next = pending.clone();
    let handle = request_animation_frame(move |_timestamp| {
        pending_next.borrow_mut().take();
        if !running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        schedule(frame_ctx, pending_next, running);
    });
    *pending.borrow_mut() = Some(handle);
}
