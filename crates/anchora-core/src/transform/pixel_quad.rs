use bytemuck::{Pod, Zeroable};

/// Rectangle resolved into display pixels, ready for an instance buffer.
///
/// `origin` is the top-left corner. `size` keeps its sign, so a mirrored
/// rectangle stays mirrored for the renderer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PixelQuad {
    pub origin: [f32; 2],
    pub size: [f32; 2],
}

impl PixelQuad {
    #[inline]
    pub const fn new(origin: [f32; 2], size: [f32; 2]) -> Self {
        Self { origin, size }
    }
}
