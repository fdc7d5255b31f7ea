use glam::Vec2;
use web_sys as web;

/// Latest pointer position in normalized device coordinates.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    pub fn set(&mut self, ndc: Vec2) {
        if ndc.is_finite() {
            self.ndc = ndc;
        }
    }
}

/// Map a client-space point onto `[-1, 1]` NDC of `rect` (+y up).
///
/// Points outside the rectangle map outside that range. A degenerate
/// rectangle maps everything to the centre.
#[inline]
pub fn client_to_ndc(client: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let uv = (client - origin) / size;
    Vec2::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0)
}

// ---------------- Event helpers ----------------
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}
