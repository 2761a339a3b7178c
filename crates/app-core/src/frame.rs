//! Per-tick update pipeline.
//!
//! The host render loop owns the clock: it stages input events as they
//! arrive, then calls [`Viewer::tick`] once per rendered frame. The tick
//! drains the staged queue, advances every smoothed quantity in a fixed
//! order, and returns a plain-data [`FrameOutput`] for the renderer.
//! Nothing here blocks, locks, or persists.

use glam::{Quat, Vec3};
use smallvec::SmallVec;

use crate::camera::{Camera, CameraPose, CameraRig};
use crate::constants::ring_offset_vec3;
use crate::focus::{CardMotion, FocusState};
use crate::input::{InputEvent, PointerState};
use crate::layout::{self, RingParams};
use crate::panel::DetailPanel;
use crate::photos::PhotoRecord;

/// One card, ready to draw: the ring-local slot plus smoothed motion.
#[derive(Clone, Debug)]
pub struct CardFrame {
    pub angle: f32,
    /// Slot position on the ring, before ring rotation and offset.
    pub position: Vec3,
    /// Slot Euler rotation.
    pub rotation: Vec3,
    /// Smoothed local offset (hover lift).
    pub offset: Vec3,
    pub scale: Vec3,
    pub hovered: bool,
}

/// Detail overlay ready to draw. Absent whenever the overlay has nothing
/// to show.
#[derive(Clone, Debug)]
pub struct PanelFrame {
    pub zoom: f32,
    pub opacity: f32,
    pub index: usize,
    pub caption: String,
    pub date: String,
    pub image_ref: String,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub camera: CameraPose,
    /// Rigid Y rotation of the whole ring, radians.
    pub ring_rotation: f32,
    /// World-space translation of the whole ring.
    pub ring_offset: Vec3,
    /// Index-aligned with the current photo sequence.
    pub cards: Vec<CardFrame>,
    /// Category label anchor; absent while the sequence is empty.
    pub label: Option<Vec3>,
    pub panel: Option<PanelFrame>,
}

/// The viewer state machine: photo sequence, focus, per-card motion,
/// detail overlay, camera rig, and the staged input queue.
pub struct Viewer {
    params: RingParams,
    photos: Vec<PhotoRecord>,
    focus: FocusState,
    motions: Vec<CardMotion>,
    panel: DetailPanel,
    rig: CameraRig,
    pointer: PointerState,
    scroll_offset: f32,
    staged: SmallVec<[InputEvent; 8]>,
}

impl Viewer {
    pub fn new(params: RingParams) -> Self {
        Self {
            params,
            photos: Vec::new(),
            focus: FocusState::default(),
            motions: Vec::new(),
            panel: DetailPanel::default(),
            rig: CameraRig::default(),
            pointer: PointerState::default(),
            scroll_offset: 0.0,
            staged: SmallVec::new(),
        }
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn hovered(&self) -> Option<usize> {
        self.focus.hovered()
    }

    /// Queue an event for the next tick. Handlers never mutate smoothed
    /// state directly.
    pub fn stage(&mut self, event: InputEvent) {
        self.staged.push(event);
    }

    /// World-space card centers under the committed scroll offset, in
    /// sequence order. Hosts use these for pointer picking.
    pub fn card_centers(&self) -> Vec<Vec3> {
        let rot = Quat::from_rotation_y(layout::ring_rotation(self.scroll_offset));
        let offset = ring_offset_vec3();
        layout::card_slots(self.photos.len(), &self.params)
            .iter()
            .map(|slot| offset + rot * slot.position)
            .collect()
    }

    /// Run one frame: commit staged inputs, then advance ring, cards,
    /// overlay, and camera in that order.
    pub fn tick(&mut self, dt_sec: f32) -> FrameOutput {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.drain_staged();

        // 1. ring rotation from the committed scroll offset
        let ring_rotation = layout::ring_rotation(self.scroll_offset);

        // 2. card slots and smoothed per-card motion
        let slots = layout::card_slots(self.photos.len(), &self.params);
        let active = self.focus.is_active();
        let hovered = self.focus.hovered();
        let cards = slots
            .iter()
            .zip(self.motions.iter_mut())
            .enumerate()
            .map(|(i, (slot, motion))| {
                let is_hovered = hovered == Some(i);
                motion.update(is_hovered, active, dt);
                CardFrame {
                    angle: slot.angle,
                    position: slot.position,
                    rotation: slot.rotation,
                    offset: motion.position,
                    scale: motion.scale,
                    hovered: is_hovered,
                }
            })
            .collect();

        // 3. detail overlay, reading the hover committed above
        self.panel.update(hovered, &self.photos, dt);

        // 4. camera rig
        self.rig.update(self.pointer.as_vec2(), dt);

        FrameOutput {
            camera: self.rig.pose(),
            ring_rotation,
            ring_offset: ring_offset_vec3(),
            cards,
            label: (!self.photos.is_empty()).then(|| layout::label_anchor(&self.params)),
            panel: self.panel.content().map(|c| PanelFrame {
                zoom: self.panel.zoom(),
                opacity: self.panel.opacity(),
                index: c.index,
                caption: c.caption.clone(),
                date: c.date.clone(),
                image_ref: c.image_ref.clone(),
            }),
        }
    }

    /// Full camera description for the current (smoothed) rig pose.
    pub fn camera(&self, aspect: f32) -> Camera {
        self.rig.camera(aspect)
    }

    fn drain_staged(&mut self) {
        for event in self.staged.drain(..) {
            match event {
                InputEvent::PointerMoved { x, y } => self.pointer.set(x, y),
                InputEvent::CardEntered(i) => {
                    if i < self.photos.len() {
                        self.focus.pointer_enter(i);
                    } else {
                        log::debug!("[input] enter on card {i} past end, ignored");
                    }
                }
                InputEvent::CardLeft => self.focus.pointer_leave(),
                InputEvent::ScrollOffset(offset) => {
                    if offset.is_finite() {
                        self.scroll_offset = offset;
                    }
                }
                InputEvent::PhotosLoaded(photos) => {
                    log::info!("[photos] loaded {} records", photos.len());
                    self.motions = vec![CardMotion::default(); photos.len()];
                    self.focus.retain_within(photos.len());
                    self.photos = photos;
                }
            }
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(RingParams::default())
    }
}
