//! Detail overlay animation for the hovered photo.

use crate::constants::{
    PANEL_FADE_EPSILON, PANEL_OPACITY_TAU_SEC, PANEL_ZOOM_START, PANEL_ZOOM_TAU_SEC,
};
use crate::motion::damp;
use crate::photos::PhotoRecord;

/// Owned snapshot of the record the overlay is showing. Content swaps
/// instantly on hover change; only the zoom/opacity wrapper animates.
/// Holding a copy keeps a mid-fade sequence swap from indexing a list
/// that no longer contains the record.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelContent {
    pub index: usize,
    pub identifier: String,
    pub caption: String,
    pub date: String,
    pub image_ref: String,
}

impl PanelContent {
    fn new(index: usize, photo: &PhotoRecord) -> Self {
        Self {
            index,
            identifier: photo.identifier.clone(),
            caption: photo.caption.clone(),
            date: photo.date.clone(),
            image_ref: photo.image_ref.clone(),
        }
    }
}

/// Zoom/opacity state of the single active-card overlay.
#[derive(Clone, Debug, Default)]
pub struct DetailPanel {
    zoom: f32,
    opacity: f32,
    content: Option<PanelContent>,
}

impl DetailPanel {
    /// Advance the overlay one tick.
    ///
    /// With nothing hovered and the previous overlay fully faded this is
    /// a no-op. On every content change the zoom snaps to
    /// [`PANEL_ZOOM_START`] and then grows toward 1; opacity fades
    /// independently and faster.
    pub fn update(&mut self, hovered: Option<usize>, photos: &[PhotoRecord], dt_sec: f32) {
        match hovered.and_then(|i| photos.get(i).map(|p| (i, p))) {
            Some((index, photo)) => {
                let changed = self
                    .content
                    .as_ref()
                    .map_or(true, |c| c.index != index || c.identifier != photo.identifier);
                if changed {
                    log::debug!("[panel] showing {} ({})", photo.identifier, index);
                    self.content = Some(PanelContent::new(index, photo));
                    self.zoom = PANEL_ZOOM_START;
                }
                self.zoom = damp(self.zoom, 1.0, PANEL_ZOOM_TAU_SEC, dt_sec);
                self.opacity = damp(self.opacity, 1.0, PANEL_OPACITY_TAU_SEC, dt_sec);
            }
            None => {
                if self.content.is_none() {
                    return;
                }
                self.opacity = damp(self.opacity, 0.0, PANEL_OPACITY_TAU_SEC, dt_sec);
                if self.opacity < PANEL_FADE_EPSILON {
                    self.opacity = 0.0;
                    self.zoom = 0.0;
                    self.content = None;
                }
            }
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// The record currently shown, if any. `None` means the renderer
    /// draws nothing at all.
    pub fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }
}
