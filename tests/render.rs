use cairo::{Context, ImageSurface};
use sketchpad::draw::{
    BLUE, CairoSurface, Color, CursorPreview, FontDescriptor, FreehandStroke, HistoryStack, Mark,
    RED, Repaint, SceneRenderer, SceneView, StickerMark, TRANSPARENT, ToolCursorPreview,
};
use sketchpad::export::{ExportOptions, render_export};

fn renderer_for(image: &ImageSurface, background: Color) -> SceneRenderer<CairoSurface> {
    let ctx = Context::new(image).unwrap();
    SceneRenderer::new(CairoSurface::new(ctx, background, FontDescriptor::default()))
}

fn paint_once(width: i32, height: i32, scene: SceneView<'_>) -> ImageSurface {
    let image = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let mut renderer = renderer_for(&image, TRANSPARENT);
    renderer.repaint(Repaint::SceneChanged, scene);
    drop(renderer);
    image
}

/// Premultiplied ARGB32 pixel as `[b, g, r, a]` (little-endian byte order).
fn pixel(image: &mut ImageSurface, x: i32, y: i32) -> [u8; 4] {
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
}

fn surface_has_pixels(image: &mut ImageSurface) -> bool {
    image
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn line(from: (f64, f64), to: (f64, f64), thickness: f64, color: Color) -> FreehandStroke {
    let mut stroke = FreehandStroke::begin(from.0, from.1, thickness, color);
    stroke.extend(to.0, to.1);
    stroke
}

#[test]
fn single_point_stroke_draws_nothing() {
    let mut history = HistoryStack::new();
    history.commit(FreehandStroke::begin(16.0, 16.0, 10.0, RED).into());

    let mut image = paint_once(32, 32, SceneView::history_only(&history));
    assert!(!surface_has_pixels(&mut image));
}

#[test]
fn later_marks_paint_on_top() {
    let mut history = HistoryStack::new();
    history.commit(line((0.0, 32.0), (64.0, 32.0), 8.0, RED).into());
    history.commit(line((32.0, 0.0), (32.0, 64.0), 8.0, BLUE).into());

    let mut image = paint_once(64, 64, SceneView::history_only(&history));
    assert_eq!(pixel(&mut image, 32, 32), [255, 0, 0, 255]);
    assert_eq!(pixel(&mut image, 8, 32), [0, 0, 255, 255]);

    history.undo();
    let mut image = paint_once(64, 64, SceneView::history_only(&history));
    assert_eq!(pixel(&mut image, 32, 32), [0, 0, 255, 255]);
}

#[test]
fn repaint_clears_previous_frame() {
    let image = ImageSurface::create(cairo::Format::ARgb32, 32, 32).unwrap();
    let mut renderer = renderer_for(&image, TRANSPARENT);

    let mut history = HistoryStack::new();
    history.commit(line((0.0, 16.0), (32.0, 16.0), 6.0, RED).into());
    renderer.repaint(Repaint::SceneChanged, SceneView::history_only(&history));

    history.clear();
    renderer.repaint(Repaint::SceneChanged, SceneView::history_only(&history));
    drop(renderer);

    let mut image = image;
    assert!(!surface_has_pixels(&mut image));
}

#[test]
fn in_progress_mark_paints_above_history() {
    let mut history = HistoryStack::new();
    history.commit(line((0.0, 16.0), (32.0, 16.0), 8.0, RED).into());
    let pending: Mark = line((16.0, 0.0), (16.0, 32.0), 8.0, BLUE).into();

    let mut image = paint_once(
        32,
        32,
        SceneView {
            history: &history,
            in_progress: Some(&pending),
            preview: None,
        },
    );
    assert_eq!(pixel(&mut image, 16, 16), [255, 0, 0, 255]);
}

#[test]
fn sticker_renders_glyph() {
    let mut history = HistoryStack::new();
    history.commit(StickerMark::place("W", 32.0, 32.0, 30.0, 32.0).into());

    let mut image = paint_once(64, 64, SceneView::history_only(&history));
    assert!(surface_has_pixels(&mut image));
}

#[test]
fn preview_is_shown_on_screen_but_not_exported() {
    let history = HistoryStack::new();
    let preview = CursorPreview::Marker(ToolCursorPreview::new((32.0, 32.0).into(), 20.0, RED));
    let scene = SceneView {
        history: &history,
        in_progress: None,
        preview: Some(&preview),
    };

    let mut screen = paint_once(64, 64, scene);
    assert!(surface_has_pixels(&mut screen));

    let options = ExportOptions {
        width: 64,
        height: 64,
        scale: 1.0,
        background: TRANSPARENT,
        font: FontDescriptor::default(),
    };
    let mut exported = render_export(scene, &options).unwrap();
    assert!(!surface_has_pixels(&mut exported));
}

#[test]
fn export_is_upscaled() {
    let mut history = HistoryStack::new();
    history.commit(line((0.0, 16.0), (64.0, 16.0), 4.0, RED).into());

    let options = ExportOptions {
        width: 64,
        height: 32,
        scale: 4.0,
        background: TRANSPARENT,
        font: FontDescriptor::default(),
    };
    let mut image = render_export(SceneView::history_only(&history), &options).unwrap();

    assert_eq!((image.width(), image.height()), (256, 128));
    assert_eq!(pixel(&mut image, 128, 64), [0, 0, 255, 255]);
    assert_eq!(pixel(&mut image, 128, 4), [0, 0, 0, 0]);
}
