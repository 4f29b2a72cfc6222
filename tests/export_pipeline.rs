use egui::Pos2;
use sketchpad::{Drawable, ExportError, Exporter, Renderer, SketchConfig, SketchEvent, Sketchpad};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn drawn_pad() -> Sketchpad {
    let mut pad = Sketchpad::new(&SketchConfig::default());
    pad.handle(SketchEvent::PointerDown(Pos2::new(10.0, 128.0)));
    pad.handle(SketchEvent::PointerMove(Pos2::new(246.0, 128.0)));
    pad.handle(SketchEvent::PointerUp(Pos2::new(246.0, 128.0)));
    pad
}

#[test]
fn test_export_is_four_times_canvas() {
    let pad = drawn_pad();
    let exporter = Exporter::from_config(&SketchConfig::default());

    assert_eq!(exporter.scale(), 4.0);
    assert_eq!(exporter.file_name(), "sketchpad.png");

    let exported = pad.export(&exporter).unwrap();
    assert_eq!((exported.width, exported.height), (1024, 1024));
    assert_eq!(exported.file_name, exporter.file_name());
    assert_eq!(&exported.png[..8], &PNG_SIGNATURE);
}

#[test]
fn test_export_scales_geometry() {
    let pad = drawn_pad();
    let exporter = Exporter::from_config(&SketchConfig::default());
    let image = exporter
        .render(pad.history().committed(), 256, 256)
        .unwrap();

    // the stroke at y=128 lands on y=512 in the 4x image
    assert_eq!(image.get_pixel(512, 512).0, [0, 0, 0, 255]);
    assert_eq!(image.get_pixel(512, 100).0, [255, 255, 255, 255]);
}

#[test]
fn test_export_has_no_preview() {
    let mut pad = Sketchpad::new(&SketchConfig::default());
    // hovering shows a preview dot on the live canvas only
    pad.handle(SketchEvent::PointerEnter(Pos2::new(128.0, 128.0)));

    let exporter = Exporter::from_config(&SketchConfig::default());
    let image = exporter.render(pad.history().committed(), 256, 256).unwrap();
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_export_leaves_history_untouched() {
    let mut pad = drawn_pad();
    pad.undo();
    let committed = pad.history().committed().to_vec();
    let redo = pad.history().redo_stack().to_vec();

    let exporter = Exporter::from_config(&SketchConfig::default());
    pad.export(&exporter).unwrap();

    assert_eq!(pad.history().committed(), committed.as_slice());
    assert_eq!(pad.history().redo_stack(), redo.as_slice());
}

#[test]
fn test_export_of_empty_canvas_fails() {
    let exporter = Exporter::new(Renderer::default(), 4.0, "empty.png");
    let stroke = Drawable::new_stroke(1, vec![Pos2::ZERO, Pos2::new(1.0, 1.0)]);
    let err = exporter.export(&[stroke], 0, 16).unwrap_err();
    assert!(matches!(err, ExportError::EmptyCanvas { .. }));
}

#[test]
fn test_save_writes_file() {
    let pad = drawn_pad();
    let exporter = Exporter::from_config(&SketchConfig::default());
    let exported = pad.export(&exporter).unwrap();

    let dir = std::env::temp_dir().join(format!("sketchpad-export-{}", std::process::id()));
    let path = exported.save_to(&dir).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, exported.png);
    std::fs::remove_dir_all(&dir).ok();
}
