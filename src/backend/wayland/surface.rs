//! Layer-surface bookkeeping and the shared memory pool behind it.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::{WaylandSurface, wlr_layer::LayerSurface},
    shm::{Shm, slot::SlotPool},
};

/// The sketchbook's layer surface with its size and buffer pool.
pub struct SurfaceState {
    layer_surface: Option<LayerSurface>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self {
            layer_surface: None,
            pool: None,
            width: 0,
            height: 0,
            configured: false,
            frame_callback_pending: false,
        }
    }

    pub fn set_layer_surface(&mut self, surface: LayerSurface) {
        self.layer_surface = Some(surface);
    }

    pub fn layer_surface(&self) -> Option<&LayerSurface> {
        self.layer_surface.as_ref()
    }

    /// Asks the compositor for a new surface size.
    ///
    /// The actual size arrives with the next configure event.
    pub fn request_size(&mut self, width: u32, height: u32) {
        if let Some(layer_surface) = self.layer_surface.as_ref() {
            info!("Requesting surface size {}x{}", width, height);
            layer_surface.set_size(width, height);
            layer_surface.commit();
        }
    }

    /// Records the configured size, returning `true` if it changed.
    ///
    /// A size change drops the buffer pool; the next render allocates one
    /// that fits.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        changed
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Returns the buffer pool, creating one sized for `buffer_count` frames.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let pool_size = (self.width as usize) * (self.height as usize) * 4 * buffer_count;
            info!(
                "Creating SlotPool for {}x{} ({} bytes, {} buffers)",
                self.width, self.height, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool.as_mut().context("Buffer pool missing after creation")
    }
}
