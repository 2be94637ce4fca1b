// Connects to the compositor, creates the sketchbook layer surface and drives
// the event loop while delegating rendering & protocol state to `WaylandState`.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use std::path::PathBuf;
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{
    config::Config,
    export::ExportSettings,
    input::{InputState, SketchSettings},
};

/// Consecutive failed renders tolerated before the loop gives up.
const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend state
pub struct WaylandBackend {
    config: Config,
    export_dir: Option<PathBuf>,
}

impl WaylandBackend {
    pub fn new(config: Config, export_dir: Option<PathBuf>) -> Self {
        Self { config, export_dir }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);
        debug!("Bound compositor, layer shell, shm, outputs and seats");

        let config = self.config.clone();
        debug!(
            "  Canvas: {}x{}",
            config.canvas.width, config.canvas.height
        );
        debug!(
            "  Pens: thin {:.0}px, thick {:.0}px",
            config.pen.thin_thickness, config.pen.thick_thickness
        );
        debug!("  Stamps: {}", config.stamps.palette.join(" "));
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);

        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)
            .context("Invalid keybindings")?;

        let input_state = InputState::new(
            SketchSettings::from(&config),
            action_map,
            fastrand::Rng::new(),
        );
        let export_settings = ExportSettings::from_config(&config, self.export_dir.clone());
        info!(
            "PNG exports go to {}",
            export_settings.save_directory.display()
        );

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            config,
            input_state,
            export_settings,
        );

        info!("Creating layer shell surface");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Top,
            Some("sketchbook"),
            None,
        );

        // No anchor: the compositor centers the window on the output
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::OnDemand);
        layer_surface.set_size(state.layout.width, state.layout.height);
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        info!(
            "Layer shell surface created ({}x{})",
            state.layout.width, state.layout.height
        );

        let mut consecutive_render_failures = 0u32;

        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            if state.input_state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            if let Err(e) = event_queue.blocking_dispatch(&mut state) {
                warn!("Event queue error: {}", e);
                loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                break;
            }

            if state.input_state.should_exit {
                info!("Exit requested after dispatch, breaking event loop");
                break;
            }

            state.process_pending_requests();

            // Frame callbacks throttle rendering to the display refresh when vsync is on
            let can_render = state.surface.is_configured()
                && state.input_state.needs_redraw
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if can_render {
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.input_state.needs_redraw = false;
                        if state.config.performance.enable_vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        state.input_state.needs_redraw = false;
                    }
                }
            } else if state.input_state.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Skipping render - frame callback already pending");
            }
        }

        info!("Wayland backend exiting");

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
