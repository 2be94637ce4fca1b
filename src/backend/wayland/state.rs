// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; renders the window and routes pointer input and export requests.
use anyhow::{Context, Result};
use log::{debug, error, info};
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell}, shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    config::Config,
    draw::Color,
    export::{self, ExportSettings},
    input::{DrawingState, InputState, MouseButton},
    ui::{self, Layout},
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    pub(super) surface: SurfaceState,
    pub(super) config: Config,
    pub(super) input_state: InputState,
    /// Where the title, canvas and toolbar sit on the surface
    pub(super) layout: Layout,
    /// Canvas background, resolved once from the config
    pub(super) canvas_background: Color,
    pub(super) export_settings: ExportSettings,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
        export_settings: ExportSettings,
    ) -> Self {
        let layout = Layout::compute(
            config.canvas.width,
            config.canvas.height,
            &input_state.palette,
            &config.ui.toolbar_style,
        );

        let canvas_background = config.canvas.background.to_color();

        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            input_state,
            layout,
            canvas_background,
            export_settings,
        }
    }

    /// Routes a pointer press at surface coordinates.
    ///
    /// Left presses hit the toolbar first, then the canvas. Other buttons
    /// always reach the input state so right-click can cancel anywhere.
    pub(super) fn pointer_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            let (cx, cy) = self.layout.to_canvas(x, y);
            self.input_state.on_mouse_press(button, cx, cy);
            return;
        }

        if let Some(toolbar_button) = self.layout.hit_test(x, y) {
            if self.input_state.prompt_text().is_some() {
                debug!("Ignoring toolbar click while the stamp prompt is open");
                return;
            }
            debug!("Toolbar button {:?} clicked", toolbar_button);
            self.input_state.handle_action(toolbar_button.action());
        } else if let Some((cx, cy)) = self.layout.canvas_point(x, y) {
            self.input_state.on_mouse_press(button, cx, cy);
        }
    }

    /// Routes pointer motion; strokes keep recording outside the canvas.
    pub(super) fn pointer_motion(&mut self, x: f64, y: f64) {
        if matches!(self.input_state.state, DrawingState::Drawing { .. }) {
            let (cx, cy) = self.layout.to_canvas(x, y);
            self.input_state.on_mouse_motion(cx, cy);
        } else if let Some((cx, cy)) = self.layout.canvas_point(x, y) {
            self.input_state.on_mouse_motion(cx, cy);
        } else {
            self.input_state.clear_preview();
        }
    }

    pub(super) fn pointer_release(&mut self, button: MouseButton, x: f64, y: f64) {
        let (cx, cy) = self.layout.to_canvas(x, y);
        self.input_state.on_mouse_release(button, cx, cy);
    }

    /// Handles requests the input state leaves for the backend.
    pub(super) fn process_pending_requests(&mut self) {
        if self.input_state.take_pending_export() {
            self.export_sketch();
        }

        if self.input_state.take_layout_changed() {
            self.relayout();
        }
    }

    fn export_sketch(&self) {
        info!(
            "Exporting {} drawables at {}x scale",
            self.input_state.frame.shapes.len(),
            self.export_settings.scale
        );
        match export::export_png(
            &self.input_state.frame.shapes,
            self.config.canvas.width,
            self.config.canvas.height,
            &self.export_settings,
        ) {
            Ok(path) => info!("Sketch exported to {}", path.display()),
            Err(e) => error!("Export failed: {}", e),
        }
    }

    fn relayout(&mut self) {
        self.layout = Layout::compute(
            self.config.canvas.width,
            self.config.canvas.height,
            &self.input_state.palette,
            &self.config.ui.toolbar_style,
        );
        debug!(
            "Toolbar relaid out with {} buttons",
            self.layout.buttons.len()
        );
        if self.layout.width != self.surface.width() || self.layout.height != self.surface.height()
        {
            self.surface
                .request_size(self.layout.width, self.layout.height);
        }
        self.input_state.needs_redraw = true;
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: `canvas` is a SlotPool slice of exactly width * height * 4
        // bytes in ARGB32 layout with a stride of width * 4. The Cairo context
        // and surface are dropped before the buffer is attached, and nothing
        // else touches the slice meanwhile.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint().context("Failed to clear background")?;
        ctx.set_operator(cairo::Operator::Over);

        let style = &self.config.ui.toolbar_style;
        ui::render_window(&ctx, &self.layout, &self.config.ui.title, style);
        self.render_canvas_area(&ctx)?;
        ui::render_toolbar(&ctx, &self.layout, &self.input_state, style);

        if let Some(text) = self.input_state.prompt_text() {
            ui::render_stamp_prompt(&ctx, &self.layout, text, style);
        }

        if self.input_state.show_help {
            ui::render_help_overlay(&ctx, &self.config.ui.help_overlay_style, width, height);
        }

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }

    /// Paints the canvas background, drawables and preview clipped to the
    /// canvas rectangle, then its frame.
    fn render_canvas_area(&self, ctx: &cairo::Context) -> Result<()> {
        let canvas = self.layout.canvas;
        let (x, y) = (canvas.x as f64, canvas.y as f64);
        let (w, h) = (canvas.width as f64, canvas.height as f64);

        ctx.save().context("Failed to save Cairo state")?;
        ctx.rectangle(x, y, w, h);
        ctx.clip();
        ctx.translate(x, y);
        crate::draw::render_background(ctx, self.canvas_background);
        self.input_state.render_canvas(ctx);
        ctx.restore().context("Failed to restore Cairo state")?;

        ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
        ctx.set_line_width(1.0);
        ctx.rectangle(x - 0.5, y - 0.5, w + 1.0, h + 1.0);
        ctx.stroke().context("Failed to draw canvas frame")?;
        Ok(())
    }
}
