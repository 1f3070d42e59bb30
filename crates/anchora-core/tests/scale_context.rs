use anchora_core::coords::{ScaleContext, UnitVector, Units, Viewport};
use anchora_core::transform::Rect;

// One test per file: the process-wide context is shared by every test in a
// binary, so the whole lifecycle runs in order here.
#[test]
fn conversions_follow_install_and_resize() {
    // ── before install ────────────────────────────────────────────────────
    assert_eq!(ScaleContext::current(), ScaleContext::default());

    // ── first install ─────────────────────────────────────────────────────
    let startup = ScaleContext::default()
        .with_reference(Viewport::new(1920.0, 1080.0))
        .with_viewport(Viewport::new(960.0, 540.0));
    startup.install().unwrap();
    assert_eq!(ScaleContext::current(), startup);

    let v = UnitVector::new(100.0, 100.0, Units::WorldPixels);
    assert_eq!(v.to(Units::ViewPixels), UnitVector::new(50.0, 50.0, Units::ViewPixels));

    // ── resize ────────────────────────────────────────────────────────────
    ScaleContext::resize_viewport(Viewport::new(3840.0, 2160.0)).unwrap();
    assert_eq!(ScaleContext::current(), startup.with_viewport(Viewport::new(3840.0, 2160.0)));
    assert_eq!(v.to(Units::ViewPixels), UnitVector::new(200.0, 200.0, Units::ViewPixels));

    let quad = Rect::new(v, v).to_pixel_quad();
    assert_eq!(quad.origin, [200.0, 200.0]);
    assert_eq!(quad.size, [200.0, 200.0]);

    // ── invalid resize is rejected whole ──────────────────────────────────
    let before = ScaleContext::current();
    assert!(ScaleContext::resize_viewport(Viewport::new(0.0, 2160.0)).is_err());
    assert_eq!(ScaleContext::current(), before);

    // ── second install replaces ───────────────────────────────────────────
    let replacement = before.with_world_scale(10.0);
    replacement.install().unwrap();
    assert_eq!(ScaleContext::current(), replacement);
    assert_eq!(
        UnitVector::new(1.0, 2.0, Units::WorldUnits).to(Units::WorldPixels),
        UnitVector::new(10.0, 20.0, Units::WorldPixels)
    );

    assert!(replacement.with_world_scale(-1.0).install().is_err());
    assert_eq!(ScaleContext::current(), replacement);
}
