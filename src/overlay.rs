//! Page chrome around the canvas.
//!
//! Everything is built with inline styles so the page needs no stylesheet
//! beyond the bounce keyframes injected here. None of the layers above the
//! canvas take pointer events.

use crate::constants::*;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const KEYFRAMES: &str = "@keyframes folio-bounce {\
0%,100%{transform:translateY(-25%) rotate(45deg);animation-timing-function:cubic-bezier(0.8,0,1,1)}\
50%{transform:translateY(0) rotate(45deg);animation-timing-function:cubic-bezier(0,0,0.2,1)}}";

/// Handles to the parts of the shell the rest of the app drives.
pub struct PageShell {
    pub canvas: web::HtmlCanvasElement,
    pub hero_layer: web::HtmlElement,
}

fn layer(document: &web::Document, z: i32, extra: &str) -> anyhow::Result<web::HtmlElement> {
    dom::element(
        document,
        "div",
        &format!("position:absolute;inset:0;z-index:{z};pointer-events:none;{extra}"),
        None,
    )
}

fn navbar(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let nav = dom::element(
        document,
        "nav",
        "position:fixed;top:0;left:0;width:100%;display:flex;justify-content:space-between;\
         align-items:center;padding:24px 32px;box-sizing:border-box;z-index:50",
        None,
    )?;
    let logo = dom::element(
        document,
        "div",
        "color:white;font-size:30px;font-weight:800;letter-spacing:0.1em",
        Some(LOGO_TEXT),
    )?;
    let mark = dom::element(
        document,
        "span",
        &format!("color:{LOGO_MARK_COLOR}"),
        Some("*"),
    )?;
    dom::append(&logo, &mark)?;
    dom::append(&nav, &logo)?;

    let list = dom::element(
        document,
        "ul",
        &format!(
            "display:flex;gap:32px;margin:0;padding:0;list-style:none;color:{MUTED_TEXT};\
             text-transform:uppercase;font-size:14px;font-weight:500;letter-spacing:0.1em"
        ),
        None,
    )?;
    for (label, href) in NAV_LINKS {
        let li = dom::element(document, "li", "", None)?;
        let a = dom::element(document, "a", "color:inherit;text-decoration:none", Some(label))?;
        _ = a.set_attribute("href", href);
        dom::append(&li, &a)?;
        dom::append(&list, &li)?;
    }
    dom::append(&nav, &list)?;
    Ok(nav)
}

fn scroll_indicator(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let wrap = dom::element(
        document,
        "div",
        &format!(
            "position:absolute;bottom:40px;left:50%;transform:translateX(-50%);\
             color:{MUTED_TEXT};font-size:14px;z-index:{Z_CHROME};pointer-events:none;\
             display:flex;flex-direction:column;align-items:center"
        ),
        None,
    )?;
    let label = dom::element(
        document,
        "p",
        "letter-spacing:0.1em;margin:0 0 16px 0",
        Some("SCROLL"),
    )?;
    let chevron = dom::element(
        document,
        "div",
        &format!(
            "width:16px;height:16px;border-bottom:2px solid {MUTED_TEXT};\
             border-right:2px solid {MUTED_TEXT};animation:folio-bounce 1s infinite"
        ),
        None,
    )?;
    dom::append(&wrap, &label)?;
    dom::append(&wrap, &chevron)?;
    Ok(wrap)
}

fn footer(
    document: &web::Document,
    side: &str,
    lines: &[(&str, &str)],
) -> anyhow::Result<web::HtmlElement> {
    let block = dom::element(
        document,
        "div",
        &format!(
            "position:absolute;bottom:32px;{side}:32px;color:{MUTED_TEXT};font-size:12px;\
             z-index:{Z_CHROME};pointer-events:none;text-align:{side}"
        ),
        None,
    )?;
    for (text, style) in lines {
        let p = dom::element(document, "p", &format!("margin:0;{style}"), Some(*text))?;
        dom::append(&block, &p)?;
    }
    Ok(block)
}

/// Build the hero section and attach it to `<body>`.
pub fn mount(document: &web::Document) -> anyhow::Result<PageShell> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    _ = body.set_attribute("style", "margin:0;background:black;font-family:system-ui,sans-serif");

    let style = dom::element(document, "style", "", Some(KEYFRAMES))?;
    dom::append(&body, &style)?;

    let root = dom::element(
        document,
        "section",
        "position:relative;width:100%;height:100vh;background:black;color:white;overflow:hidden",
        None,
    )?;
    root.set_id(ROOT_ID);

    let canvas_wrap = dom::element(
        document,
        "div",
        &format!("position:absolute;inset:0;z-index:{Z_CANVAS}"),
        None,
    )?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("style", "width:100%;height:100%;display:block;touch-action:none");
    dom::append(&canvas_wrap, &canvas)?;
    dom::append(&root, &canvas_wrap)?;

    let hero_layer = layer(document, Z_HERO_TEXT, "overflow:hidden")?;
    hero_layer.set_id(HERO_TEXT_ID);
    dom::append(&root, &hero_layer)?;

    let gradient = layer(
        document,
        Z_GRADIENT,
        "background:linear-gradient(to bottom,rgba(0,0,0,0.7),rgba(0,0,0,0.4))",
    )?;
    dom::append(&root, &gradient)?;

    let chrome = dom::element(
        document,
        "div",
        &format!("position:relative;z-index:{Z_CHROME};pointer-events:none"),
        None,
    )?;
    dom::append(&chrome, &navbar(document)?)?;
    dom::append(&root, &chrome)?;

    dom::append(&root, &scroll_indicator(document)?)?;
    let left: Vec<(&str, &str)> = FOOTER_LEFT.iter().map(|l| (*l, "")).collect();
    dom::append(&root, &footer(document, "left", &left)?)?;
    let status = format!("color:{STATUS_COLOR};text-transform:uppercase;font-weight:600");
    dom::append(
        &root,
        &footer(
            document,
            "right",
            &[(FOOTER_RIGHT_TITLE, ""), (FOOTER_RIGHT_STATUS, status.as_str())],
        )?,
    )?;

    dom::append(&body, &root)?;
    log::info!("[scene] page shell mounted");
    Ok(PageShell {
        canvas,
        hero_layer,
    })
}
