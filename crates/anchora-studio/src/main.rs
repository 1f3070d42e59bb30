use anyhow::{Context, Result};

use anchora_core::coords::{ScaleContext, UnitVector, Units, Viewport};
use anchora_core::logging::{init_logging, LoggingConfig};
use anchora_core::transform::{Rect, Referencial, UnitBased};

/// Headless walk-through of the geometry core, the way a HUD layer drives it.
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    ScaleContext::default()
        .with_viewport(Viewport::new(1280.0, 720.0))
        .install()
        .context("installing startup scale context")?;

    // ── minimap pinned to the bottom-right corner of the view ─────────────
    let margin = 0.02;
    let corner = UnitVector::new(1.0, 1.0, Units::ViewPercentage).add_xy(-margin, -margin);
    let mut minimap = Rect::from_xywh(0.0, 0.0, 0.3, 0.3, Units::WorldUnits);
    minimap.set_position(corner, Referencial::BottomRight);
    report("minimap", &minimap);

    minimap.set_size(UnitVector::new(0.4, 0.25, Units::WorldUnits), Referencial::BottomRight);
    report("minimap grown", &minimap);

    // ── window resize: context swapped whole, anchors re-resolved ─────────
    ScaleContext::resize_viewport(Viewport::new(1920.0, 1080.0))
        .context("resizing viewport")?;
    // World-space anchors do not move on resize; only view-relative ones need re-pinning.
    if corner.unit.is_view_relative() {
        minimap.set_position(corner, Referencial::BottomRight);
    }
    report("minimap after resize", &minimap);

    // ── drag a panel edge while the opposite edge stays put ───────────────
    let mut panel = Rect::from_xywh(100.0, 100.0, 400.0, 300.0, Units::WorldPixels);
    panel
        .set_anchor_point_position(UnitVector::new(620.0, 0.0, Units::WorldPixels), Referencial::Right)
        .context("dragging panel edge")?;
    report("panel dragged", &panel);

    if let Err(err) = panel.set_anchor_point_position(
        UnitVector::new(0.0, 0.0, Units::WorldPixels),
        Referencial::Center,
    ) {
        log::warn!("rejected: {err}");
    }

    panel.set_working_unit(Units::ViewPercentage);
    report("panel as view percentage", &panel);

    log::info!(
        "minimap overlaps panel: {}",
        minimap.intersects(&panel)
    );

    Ok(())
}

fn report(label: &str, rect: &Rect) {
    let quad = rect.to_pixel_quad();
    let unit = rect.working_unit();
    let top_left = rect.position(Referencial::TopLeft);
    log::info!(
        "{label}: top-left ({:.3}, {:.3}) size ({:.3}, {:.3}) {unit} | screen origin {:?} size {:?}",
        top_left.x,
        top_left.y,
        rect.width(),
        rect.height(),
        quad.origin,
        quad.size,
    );
}
