// Keeps the surface size in sync with layer-shell configure events.
use log::info;
use smithay_client_toolkit::shell::wlr_layer::{
    LayerShellHandler, LayerSurface, LayerSurfaceConfigure,
};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl LayerShellHandler for WaylandState {
    fn closed(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _layer: &LayerSurface) {
        info!("Layer surface closed by compositor");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _layer: &LayerSurface,
        configure: LayerSurfaceConfigure,
        _serial: u32,
    ) {
        let (mut width, mut height) = configure.new_size;
        info!("Layer surface configured: {}x{}", width, height);

        // Zero means the compositor leaves the size to us
        if width == 0 {
            width = self.layout.width;
        }
        if height == 0 {
            height = self.layout.height;
        }

        if self.surface.update_dimensions(width, height) {
            info!("Surface size changed to {}x{}", width, height);
        }

        self.surface.set_configured(true);
        self.input_state.needs_redraw = true;
    }
}
