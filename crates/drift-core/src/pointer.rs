use glam::Vec2;

/// Latest pointer position, in viewport or element-local units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Bounding box of a mounted element in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Boxes measured before layout come back empty; those are unusable.
    #[inline]
    pub fn is_usable(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Last-write-wins store for global pointer-move events.
///
/// No history is kept: consumers only ever see the most recent sample. Once
/// detached, further records are dropped so that a listener firing during
/// teardown cannot resurrect state.
#[derive(Clone, Debug, Default)]
pub struct PointerSampler {
    latest: Option<PointerSample>,
    detached: bool,
}

impl PointerSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a raw client coordinate. Returns whether the sample was kept.
    pub fn record(&mut self, client_x: f32, client_y: f32) -> bool {
        if self.detached {
            log::trace!("[pointer] sample after detach ignored");
            return false;
        }
        if !client_x.is_finite() || !client_y.is_finite() {
            log::debug!("[pointer] non-finite sample dropped");
            return false;
        }
        self.latest = Some(PointerSample {
            x: client_x,
            y: client_y,
        });
        true
    }

    pub fn latest(&self) -> Option<PointerSample> {
        self.latest
    }

    /// Latest sample relative to the midpoint of `rect`.
    ///
    /// `None` when there is no sample yet or the rect is missing/degenerate;
    /// the caller keeps its previous target and tries again next frame.
    pub fn relative_to(&self, rect: Option<&BoundingBox>) -> Option<PointerSample> {
        let sample = self.latest?;
        let rect = rect.filter(|r| r.is_usable())?;
        let local = sample.as_vec2() - rect.center();
        Some(PointerSample {
            x: local.x,
            y: local.y,
        })
    }

    pub fn detach(&mut self) {
        self.detached = true;
        self.latest = None;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}
