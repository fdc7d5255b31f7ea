//! Hero text drawn as DOM lines projected from the 3D layout.

use crate::dom;
use folio_core::hero::{HeroText, GLYPH_SIZE};
use folio_core::Camera;
use glam::{Vec2, Vec3};
use web_sys as web;

const LINE_STYLE: &str = "position:absolute;left:0;top:0;margin:0;color:white;\
font-weight:900;line-height:1;white-space:nowrap;transform-origin:0 100%;\
will-change:transform;text-shadow:0 2px 0 rgba(0,0,0,0.35)";

pub struct HeroOverlay {
    text: HeroText,
    elements: Vec<web::HtmlElement>,
}

/// NDC (+y up) to CSS pixels (+y down) inside a `size` box.
#[inline]
fn ndc_to_css(ndc: Vec2, size: Vec2) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * size.x, (1.0 - ndc.y) * 0.5 * size.y)
}

impl HeroOverlay {
    pub fn mount(layer: &web::HtmlElement, text: HeroText) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let mut elements = Vec::with_capacity(text.lines.len());
        for line in &text.lines {
            let el = dom::element(&document, "div", LINE_STYLE, Some(line.text))?;
            dom::append(layer, &el)?;
            elements.push(el);
        }
        Ok(Self { text, elements })
    }

    /// Place every line for the current camera and time.
    pub fn update(&self, camera: &Camera, elapsed: f32, css_size: Vec2) {
        for (line, el) in self.text.lines.iter().zip(&self.elements) {
            let (origin, rot) = line.pose(elapsed);
            let (Some(base), Some(top)) = (
                camera.project(origin),
                camera.project(origin + Vec3::Y * GLYPH_SIZE),
            ) else {
                continue;
            };
            let base_px = ndc_to_css(base, css_size);
            let em_px = (base_px.y - ndc_to_css(top, css_size).y).abs();
            let style = el.style();
            _ = style.set_property("font-size", &format!("{em_px:.2}px"));
            // screen y points down, so x and z tilts flip sign
            _ = style.set_property(
                "transform",
                &format!(
                    "translate({:.2}px,{:.2}px) translateY(-100%) rotateX({:.4}rad) rotateY({:.4}rad) rotateZ({:.4}rad)",
                    base_px.x, base_px.y, -rot.x, rot.y, -rot.z
                ),
            );
        }
    }
}
