use glam::{Mat4, Quat, Vec3};

use crate::camera::core::{Camera, ViewUniform};
use crate::camera::rotation::{compose_and_normalize, minimal_rotation};
use crate::camera::sphere::Viewport;
use crate::error::ArcballError;
use crate::input::ArcballCommand;
use crate::options::CameraOptions;

/// Arcball orbit controller.
///
/// Owns the whole camera state: a fixed focus point, a base radius scaled
/// by a clamped zoom factor, and a unit quaternion accumulated from pointer
/// drags. The view matrix is cached and refreshed whenever one of those
/// changes.
///
/// Drags follow a two-state machine: [`begin_drag`](Self::begin_drag) opens
/// a session, each [`drag`](Self::drag) applies the rotation between the
/// previous and current sphere points, [`end_drag`](Self::end_drag) closes
/// it. `drag`/`end_drag` without an open session are ignored.
#[derive(Debug, Clone)]
pub struct ArcballController {
    target: Vec3,
    radius: f32,
    zoom_factor: f32,
    initial_zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    orientation: Quat,
    drag_anchor: Option<Vec3>,
    viewport: Viewport,

    camera: Camera,
    view: Mat4,
}

impl ArcballController {
    /// Create a controller orbiting `target` at `radius` with default zoom
    /// limits.
    pub fn new(
        target: Vec3,
        radius: f32,
        width: f32,
        height: f32,
    ) -> Result<Self, ArcballError> {
        let options = CameraOptions {
            target,
            radius,
            ..CameraOptions::default()
        };
        Self::from_options(&options, width, height)
    }

    /// Create a controller from camera options and an initial viewport.
    pub fn from_options(
        options: &CameraOptions,
        width: f32,
        height: f32,
    ) -> Result<Self, ArcballError> {
        options.validate()?;
        let viewport = Viewport::new(width, height)?;

        let orientation = Quat::IDENTITY;
        let camera = Camera::orbit(
            options.target,
            orientation,
            options.radius * options.zoom,
        );

        Ok(Self {
            target: options.target,
            radius: options.radius,
            zoom_factor: options.zoom,
            initial_zoom: options.zoom,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            orientation,
            drag_anchor: None,
            viewport,
            camera,
            view: camera.build_view(),
        })
    }

    fn update_view(&mut self) {
        self.camera = Camera::orbit(self.target, self.orientation, self.distance());
        if self.camera.is_degenerate() {
            log::debug!(
                "view direction parallel to world up at eye {}",
                self.camera.eye
            );
        }
        self.view = self.camera.build_view();
    }

    /// Open a drag session at pixel `(x, y)`.
    ///
    /// Calling this during an open session restarts it from the new point.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        let anchor = self.viewport.screen_to_sphere(x, y);
        log::debug!("arcball drag start at ({x}, {y}) -> {anchor}");
        self.drag_anchor = Some(anchor);
    }

    /// Rotate by the arc between the previous and current pointer
    /// positions. No-op when no drag session is open.
    pub fn drag(&mut self, x: f32, y: f32) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        let current = self.viewport.screen_to_sphere(x, y);
        let step = minimal_rotation(anchor, current);
        self.orientation = compose_and_normalize(step, self.orientation);
        self.update_view();
        self.drag_anchor = Some(current);
    }

    /// Close the drag session, if any.
    pub fn end_drag(&mut self) {
        if self.drag_anchor.take().is_some() {
            log::debug!("arcball drag end, eye at {}", self.camera.eye);
        }
    }

    /// Scale the orbit distance by `factor`.
    ///
    /// `factor > 1` moves the eye away from the target, `0 < factor < 1`
    /// moves it closer. The resulting zoom is clamped to the configured
    /// range. Non-positive or non-finite factors are rejected. Returns
    /// whether the zoom changed.
    pub fn zoom(&mut self, factor: f32) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("rejected zoom factor {factor}");
            return false;
        }
        let zoom = (self.zoom_factor * factor).clamp(self.min_zoom, self.max_zoom);
        if zoom == self.zoom_factor {
            return false;
        }
        self.zoom_factor = zoom;
        self.update_view();
        true
    }

    /// Update the viewport used to map pixels onto the arcball.
    ///
    /// Non-positive or non-finite sizes are ignored. Returns whether the
    /// viewport was applied.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        match Viewport::new(width, height) {
            Ok(viewport) => {
                self.viewport = viewport;
                true
            }
            Err(e) => {
                log::warn!("ignoring resize: {e}");
                false
            }
        }
    }

    /// Restore the initial orientation and zoom, ending any drag.
    pub fn reset(&mut self) {
        self.drag_anchor = None;
        self.orientation = Quat::IDENTITY;
        self.zoom_factor = self.initial_zoom;
        self.update_view();
    }

    /// Apply a command produced by the input layer.
    pub fn execute(&mut self, command: ArcballCommand) {
        match command {
            ArcballCommand::BeginDrag { x, y } => self.begin_drag(x, y),
            ArcballCommand::Drag { x, y } => self.drag(x, y),
            ArcballCommand::EndDrag => self.end_drag(),
            ArcballCommand::Zoom { factor } => {
                let _ = self.zoom(factor);
            }
            ArcballCommand::Resize { width, height } => {
                let _ = self.resize(width, height);
            }
            ArcballCommand::ResetView => self.reset(),
        }
    }

    /// Cached view matrix (column-major, right-handed).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// View matrix and eye in GPU uniform layout.
    #[must_use]
    pub fn view_uniform(&self) -> ViewUniform {
        ViewUniform::new(&self.camera, self.view)
    }

    /// Current eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.camera.eye
    }

    /// The fixed focus point.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Accumulated orbit rotation (always unit length).
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Base radius times zoom factor.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.radius * self.zoom_factor
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether a drag session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Whether the view direction is parallel to world up, where the
    /// look-at basis is undefined.
    #[must_use]
    pub fn is_view_degenerate(&self) -> bool {
        self.camera.is_degenerate()
    }
}
