//! Owner of every animated piece of the hero section.
//!
//! The host render loop calls [`Scene::tick`] once per frame and then
//! [`Scene::render`]. Pointer and click callbacks write into the scene
//! between frames. Nothing here is global; dropping or unmounting the scene
//! cancels every pending spawn delay, cooldown and dance with it.

use crate::actor::{Actor, ActorConfig, ActorEvent, ActorId, ClickOutcome, SpeedMode};
use crate::constants::{DEFAULT_BOUND, PARALLAX_DIVISOR};
use crate::error::ConfigError;
use crate::field::{Field, Viewport};
use crate::follower::FollowerRing;
use crate::layout::{self, LayoutKind};
use crate::parallax::{ParallaxShape, ShapeId, ShapeSpec};
use crate::pointer::{BoundingBox, PointerSampler};
use crate::render::{RenderSurface, Sprite, SpriteKey, Transform2D};
use crate::spring::{Spring2, SpringParams};
use fnv::FnvHashMap;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub bound: f32,
    pub speed_mode: SpeedMode,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            speed_mode: SpeedMode::PerTick,
            seed: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneEvent {
    pub actor: ActorId,
    pub kind: ActorEvent,
}

type Observer = Box<dyn FnMut(&SceneEvent)>;

pub struct Scene {
    config: SceneConfig,
    viewport: Viewport,
    field: Field,
    actors: FnvHashMap<ActorId, Actor>,
    // Composed actors belong to one layout; hand-added ones are always shown
    cast: FnvHashMap<ActorId, LayoutKind>,
    layout: LayoutKind,
    followers: FnvHashMap<FollowerRing, Spring2>,
    shapes: FnvHashMap<ShapeId, ParallaxShape>,
    pointer: PointerSampler,
    container: Option<BoundingBox>,
    observer: Option<Observer>,
    clock: Duration,
    next_actor: u32,
    next_shape: u32,
    mounted: bool,
}

impl Scene {
    /// An empty, mounted scene.
    pub fn new(viewport: Viewport, config: SceneConfig) -> Result<Self, ConfigError> {
        if let SpeedMode::DeltaScaled { reference_hz } = config.speed_mode {
            if !reference_hz.is_finite() || reference_hz <= 0.0 {
                return Err(ConfigError::ReferenceHz(reference_hz));
            }
        }
        let field = Field::new(viewport, config.bound)?;
        Ok(Self {
            config,
            viewport,
            field,
            actors: FnvHashMap::default(),
            cast: FnvHashMap::default(),
            layout: LayoutKind::for_viewport(&viewport),
            followers: FnvHashMap::default(),
            shapes: FnvHashMap::default(),
            pointer: PointerSampler::new(),
            container: None,
            observer: None,
            clock: Duration::ZERO,
            next_actor: 0,
            next_shape: 0,
            mounted: true,
        })
    }

    /// The hero cast: turtles for both layouts, both follower rings and the
    /// three parallax shapes. Only the layout matching the viewport is shown;
    /// [`Scene::resize`] switches between them.
    pub fn compose(viewport: Viewport, config: SceneConfig) -> Result<Self, ConfigError> {
        let mut scene = Self::new(viewport, config)?;
        for kind in [LayoutKind::Wide, LayoutKind::Compact] {
            for actor in layout::actor_configs(kind)? {
                let id = scene.add_actor(actor);
                scene.cast.insert(id, kind);
            }
        }
        for ring in FollowerRing::ALL {
            scene.add_follower(ring);
        }
        for spec in layout::parallax_shapes() {
            scene.add_parallax_shape(spec, SpringParams::parallax());
        }
        log::info!(
            "[scene] composed {:?} layout: actors={} shapes={} viewport={}x{}",
            scene.layout,
            scene.actor_ids().len(),
            scene.shapes.len(),
            viewport.width,
            viewport.height
        );
        Ok(scene)
    }

    pub fn add_actor(&mut self, config: ActorConfig) -> ActorId {
        let index = self.next_actor;
        self.next_actor += 1;
        let id = ActorId(index);
        // Per-actor RNG derived from the scene seed so actors never share state
        let mix = self.config.seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let rng = StdRng::seed_from_u64(mix);
        self.actors
            .insert(id, Actor::new(id, config, &self.field, rng));
        id
    }

    pub fn add_follower(&mut self, ring: FollowerRing) {
        self.followers
            .insert(ring, Spring2::new(ring.spring(), Vec2::splat(ring.center_offset())));
    }

    pub fn add_parallax_shape(&mut self, spec: ShapeSpec, params: SpringParams) -> ShapeId {
        let id = ShapeId(self.next_shape);
        self.next_shape += 1;
        self.shapes.insert(id, ParallaxShape::new(id, spec, params));
        id
    }

    pub fn set_observer(&mut self, observer: impl FnMut(&SceneEvent) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    /// Whether the actor belongs to the layout currently shown.
    pub fn is_active(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id) && self.cast.get(&id).map_or(true, |k| *k == self.layout)
    }

    /// Ids of the actors currently shown, in creation order.
    pub fn actor_ids(&self) -> Vec<ActorId> {
        let mut ids: Vec<ActorId> = self
            .actors
            .keys()
            .copied()
            .filter(|id| self.is_active(*id))
            .collect();
        ids.sort();
        ids
    }

    pub fn follower(&self, ring: FollowerRing) -> Option<&Spring2> {
        self.followers.get(&ring)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&ParallaxShape> {
        self.shapes.get(&id)
    }

    pub fn shape_ids(&self) -> Vec<ShapeId> {
        let mut ids: Vec<ShapeId> = self.shapes.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn pointer(&self) -> &PointerSampler {
        &self.pointer
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        if !self.mounted {
            log::trace!("[scene] pointer event after unmount ignored");
            return;
        }
        self.pointer.record(client_x, client_y);
    }

    /// Latest bounding box of the hero container; `None` until laid out.
    pub fn set_container(&mut self, rect: Option<BoundingBox>) {
        if self.mounted {
            self.container = rect;
        }
    }

    pub fn click(&mut self, id: ActorId) -> ClickOutcome {
        if !self.mounted {
            log::trace!("[scene] click on {} after unmount ignored", id);
            return ClickOutcome::Ignored;
        }
        if !self.is_active(id) {
            return ClickOutcome::Ignored;
        }
        let Some(actor) = self.actors.get_mut(&id) else {
            return ClickOutcome::Ignored;
        };
        let outcome = actor.click();
        if outcome == ClickOutcome::DanceStarted {
            self.emit(&[SceneEvent {
                actor: id,
                kind: ActorEvent::DanceStarted,
            }]);
        }
        outcome
    }

    pub fn set_hovered(&mut self, id: ActorId, hovered: bool) {
        if let Some(actor) = self.actors.get_mut(&id) {
            actor.set_hovered(hovered);
        }
    }

    /// Traveling actors see the new right edge at once; the spawn band applies
    /// from each actor's next respawn. Crossing the compact breakpoint swaps
    /// which cast is shown.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), ConfigError> {
        self.field = Field::new(viewport, self.config.bound)?;
        self.viewport = viewport;
        let layout = LayoutKind::for_viewport(&viewport);
        if layout != self.layout {
            log::info!("[scene] layout {:?} -> {:?}", self.layout, layout);
            self.layout = layout;
        }
        log::debug!("[scene] resized to {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    /// Advances every actor and spring exactly once.
    pub fn tick(&mut self, dt: Duration) {
        if !self.mounted {
            return;
        }
        self.clock += dt;

        let mut events: SmallVec<[SceneEvent; 4]> = SmallVec::new();
        for actor in self.actors.values_mut() {
            for kind in actor.tick(dt, &self.field, self.config.speed_mode) {
                events.push(SceneEvent {
                    actor: actor.id(),
                    kind,
                });
            }
        }

        if let Some(sample) = self.pointer.latest() {
            for (ring, spring) in self.followers.iter_mut() {
                spring.set_target(sample.as_vec2() + Vec2::splat(ring.center_offset()));
            }
        }
        if let Some(local) = self.pointer.relative_to(self.container.as_ref()) {
            let base = local.as_vec2() / PARALLAX_DIVISOR;
            for shape in self.shapes.values_mut() {
                shape.retarget(base);
            }
        }
        for spring in self.followers.values_mut() {
            spring.step(dt);
        }
        for shape in self.shapes.values_mut() {
            shape.step(dt);
        }

        self.emit(&events);
    }

    fn emit(&mut self, events: &[SceneEvent]) {
        if let Some(observer) = self.observer.as_mut() {
            for event in events {
                observer(event);
            }
        }
    }

    /// Current drawables in unspecified order.
    pub fn sprites(&self) -> SmallVec<[Sprite; 12]> {
        let mut out = SmallVec::new();
        for actor in self.actors.values() {
            let mut transform = actor.transform();
            if !self.is_active(actor.id()) {
                transform.opacity = 0.0;
            }
            out.push(Sprite {
                key: SpriteKey::Actor(actor.id()),
                transform,
                size: actor.config().size(),
                color: actor.config().color_scheme(),
                anchor: None,
            });
        }
        for (ring, spring) in &self.followers {
            let pos = spring.current();
            out.push(Sprite {
                key: SpriteKey::Follower(*ring),
                transform: Transform2D {
                    x: pos.x,
                    y: pos.y,
                    ..Transform2D::default()
                },
                size: ring.size(),
                color: ring.color(),
                anchor: None,
            });
        }
        for shape in self.shapes.values() {
            out.push(Sprite {
                key: SpriteKey::Shape(shape.id()),
                transform: shape.transform(self.clock),
                size: shape.spec().size,
                color: shape.spec().color,
                anchor: Some(shape.spec().anchor),
            });
        }
        out
    }

    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        if !self.mounted {
            return;
        }
        for sprite in self.sprites() {
            surface.draw(&sprite);
        }
    }

    /// Tears everything down: pending timers die with their actors, the
    /// pointer sampler stops accepting input, and the observer is dropped so
    /// no callback can fire afterwards. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.actors.clear();
        self.cast.clear();
        self.followers.clear();
        self.shapes.clear();
        self.pointer.detach();
        self.container = None;
        self.observer = None;
        log::info!("[scene] unmounted");
    }
}
