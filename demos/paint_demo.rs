//! Paint demo: Drive a full editing session from the command line.
//!
//! Simulates a short stroke, an eraser pass, and a flood fill, then
//! writes the exported PNG next to the working directory.

use pixelgrid::{export, project, EditorSession, GridSize, PointerEvent, Rgb, Tool};

fn main() -> pixelgrid::Result<()> {
    println!("Pixelgrid Paint Demo");
    println!("====================");
    println!();

    let mut session = EditorSession::new(GridSize::Size16);
    session.update_viewport(360, 330);
    let layout = *session.layout().expect("viewport was just reported");
    println!("Layout: {layout:?}");

    // Drag a short diagonal stroke with the brush.
    session.set_color(Rgb::PALETTE[2]);
    let (ox, oy) = layout.origin();
    let cell = layout.cell_px();
    session.handle_pointer(PointerEvent::Down { x: ox, y: oy });
    for step in 1..6 {
        session.handle_pointer(PointerEvent::Move {
            x: ox + step * cell,
            y: oy + step * cell,
        });
    }
    session.handle_pointer(PointerEvent::Up);

    // Erase the first cell of the stroke.
    session.set_tool(Tool::Eraser);
    session.handle_pointer(PointerEvent::Down { x: ox, y: oy });
    session.handle_pointer(PointerEvent::Up);

    // Fill the background region.
    session.set_tool(Tool::Fill);
    session.set_color(Rgb::DEFAULT_PAINT);
    session.handle_pointer(PointerEvent::Down { x: ox, y: oy });
    session.handle_pointer(PointerEvent::Up);

    println!("Buffer: {:?}", session.buffer());

    // Round-trip through a project record.
    let record = project::encode(session.buffer(), "demo", 1_700_000_000)?;
    println!(
        "Record: {} pixels, colors {:?}, thumbnail {} bytes (base64)",
        record.pixels.len(),
        record.used_colors,
        record.thumbnail.len()
    );

    // Export the art.
    let png = export::export_png(session.buffer())?;
    let filename = export::export_filename(session.buffer().size(), record.timestamp);
    std::fs::write(&filename, &png).expect("write demo output");
    println!("Wrote {filename} ({} bytes)", png.len());

    Ok(())
}
