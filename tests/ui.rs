use cairo::{Context, ImageSurface};
use sketchbook::config::{Config, HelpOverlayStyle, ToolbarStyle};
use sketchbook::input::{InputState, MouseButton, SketchSettings, Tool};
use sketchbook::ui::{Layout, ToolbarButton};

fn make_input_state() -> InputState {
    let config = Config::default();
    let action_map = config.keybindings.build_action_map().unwrap();
    InputState::new(
        SketchSettings::from(&config),
        action_map,
        fastrand::Rng::with_seed(11),
    )
}

fn layout_for(input: &InputState) -> Layout {
    Layout::compute(256, 256, &input.palette, &ToolbarStyle::default())
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// Red channel of the pixel at `(x, y)`.
fn red_at(surface: &mut ImageSurface, x: i32, y: i32) -> u8 {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    data[y as usize * stride + x as usize * 4 + 2]
}

fn button_rect(layout: &Layout, button: ToolbarButton) -> sketchbook::util::Rect {
    layout
        .buttons
        .iter()
        .find(|(b, _)| *b == button)
        .map(|(_, rect)| *rect)
        .unwrap()
}

#[test]
fn toolbar_lists_buttons_in_order() {
    let input = make_input_state();
    let layout = layout_for(&input);
    let labels: Vec<String> = layout
        .buttons
        .iter()
        .map(|(button, _)| button.label(&input.palette))
        .collect();

    assert_eq!(labels.first().map(String::as_str), Some("Thin Pen"));
    assert_eq!(labels.get(1).map(String::as_str), Some("Thick Pen"));
    assert_eq!(labels.last().map(String::as_str), Some("Clear"));
    let create = labels.iter().position(|l| l == "Create Custom Stamp").unwrap();
    assert_eq!(create, 2 + input.palette.len());
}

#[test]
fn clicking_a_stamp_button_then_the_canvas_places_it() {
    let mut input = make_input_state();
    let layout = layout_for(&input);

    let stamp = button_rect(&layout, ToolbarButton::Stamp(0));
    let hit = layout
        .hit_test(
            (stamp.x + stamp.width / 2) as f64,
            (stamp.y + stamp.height / 2) as f64,
        )
        .unwrap();
    input.handle_action(hit.action());
    assert!(matches!(input.tool, Tool::Stamp { .. }));

    let canvas = layout.canvas;
    let (cx, cy) = layout
        .canvas_point((canvas.x + 40) as f64, (canvas.y + 60) as f64)
        .unwrap();
    assert_eq!((cx, cy), (40, 60));

    input.on_mouse_press(MouseButton::Left, cx, cy);
    input.on_mouse_release(MouseButton::Left, cx, cy);
    assert_eq!(input.frame.shapes.len(), 1);
    assert_eq!(input.tool, Tool::Pen);
}

#[test]
fn active_pen_button_is_highlighted() {
    let mut input = make_input_state();
    let layout = layout_for(&input);
    let style = ToolbarStyle::default();

    let (mut surface, ctx) = surface_with_context(layout.width as i32, layout.height as i32);
    sketchbook::ui::render_toolbar(&ctx, &layout, &input, &style);
    drop(ctx);

    let thin = button_rect(&layout, ToolbarButton::ThinPen);
    let thick = button_rect(&layout, ToolbarButton::ThickPen);
    let thin_red = red_at(&mut surface, thin.x + 3, thin.y + thin.height / 2);
    let thick_red = red_at(&mut surface, thick.x + 3, thick.y + thick.height / 2);
    assert!(thin_red < 220, "thin pen should use the active color");
    assert_eq!(thick_red, 255);

    input.handle_action(ToolbarButton::ThickPen.action());
    let (mut surface, ctx) = surface_with_context(layout.width as i32, layout.height as i32);
    sketchbook::ui::render_toolbar(&ctx, &layout, &input, &style);
    drop(ctx);
    assert_eq!(red_at(&mut surface, thin.x + 3, thin.y + thin.height / 2), 255);
    assert!(red_at(&mut surface, thick.x + 3, thick.y + thick.height / 2) < 220);
}

#[test]
fn custom_stamp_grows_the_toolbar() {
    let mut input = make_input_state();
    let before = layout_for(&input).buttons.len();

    input.add_custom_stamp("🦄");
    assert!(input.take_layout_changed());
    let layout = layout_for(&input);
    assert_eq!(layout.buttons.len(), before + 1);
    assert!(layout.buttons.iter().all(|(_, rect)| rect.x + rect.width <= layout.width as i32));
}

#[test]
fn render_help_overlay_draws_content() {
    let style = HelpOverlayStyle::default();
    let (mut surface, ctx) = surface_with_context(800, 600);
    sketchbook::ui::render_help_overlay(&ctx, &style, 800, 600);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn render_window_paints_the_background() {
    let input = make_input_state();
    let layout = layout_for(&input);
    let (mut surface, ctx) = surface_with_context(layout.width as i32, layout.height as i32);
    sketchbook::ui::render_window(&ctx, &layout, "Fun Sketchbook", &ToolbarStyle::default());
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}
