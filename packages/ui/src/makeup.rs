//! Virtual makeup: upload a photo, detect faces, paint lips, eye shadow and
//! blush on a canvas. Every apply redraws from the original photo.

use dioxus::prelude::*;
use store::makeup::{MakeupPalette, Rgba};

use crate::{notify, use_notices, NoticeLevel};

const INPUT_ID: &str = "makeup-upload";
const IMAGE_ID: &str = "makeup-source";
const CANVAS_ID: &str = "makeup-canvas";
/// Widest the canvas is drawn, in CSS pixels.
#[cfg(target_arch = "wasm32")]
const MAX_CANVAS_WIDTH: f64 = 640.0;

#[component]
pub fn VirtualMakeup() -> Element {
    let mut notices = use_notices();
    let mut palette = use_signal(MakeupPalette::default);
    #[allow(unused_mut)]
    let mut image_src = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut faces_found = use_signal(|| Option::<usize>::None);

    let on_file = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            match canvas::object_url_from_input(INPUT_ID) {
                Ok(Some(url)) => {
                    if let Some(old) = image_src.peek().clone() {
                        canvas::revoke(&old);
                    }
                    faces_found.set(None);
                    image_src.set(Some(url));
                }
                Ok(None) => {}
                Err(e) => notify(&mut notices, NoticeLevel::Error, &e),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            notify(&mut notices, NoticeLevel::Info, "Virtual makeup needs a web browser");
        }
    };

    let on_image_loaded = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(e) = canvas::draw_source(IMAGE_ID, CANVAS_ID) {
                notify(&mut notices, NoticeLevel::Error, &e);
            }
        }
    };

    let apply = move |_| async move {
        busy.set(true);
        #[cfg(target_arch = "wasm32")]
        {
            let models_url = crate::app_config().ui.face_models_url.clone();
            let current = *palette.peek();
            match canvas::apply(IMAGE_ID, CANVAS_ID, &models_url, &current).await {
                Ok(0) => {
                    faces_found.set(Some(0));
                    notify(&mut notices, NoticeLevel::Info, "No face found. Try a clearer, front-facing photo");
                }
                Ok(count) => {
                    tracing::info!("makeup applied to {count} face(s)");
                    faces_found.set(Some(count));
                }
                Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Could not apply makeup: {e}")),
            }
        }
        busy.set(false);
    };

    let reset = move |_| {
        faces_found.set(None);
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(e) = canvas::draw_source(IMAGE_ID, CANVAS_ID) {
                notify(&mut notices, NoticeLevel::Error, &e);
            }
        }
    };

    let current = palette();
    let opacity = (current.opacity * 100.0).round() as u32;
    let has_image = image_src().is_some();

    rsx! {
        div {
            class: "virtual-makeup",
            div {
                class: "makeup-controls",
                label {
                    class: "upload",
                    "Upload a photo"
                    input {
                        id: INPUT_ID,
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_file,
                    }
                }
                ColorInput {
                    label: "Lips",
                    color: current.lips,
                    on_change: move |c| palette.write().lips = c,
                }
                ColorInput {
                    label: "Eye shadow",
                    color: current.eyeshadow,
                    on_change: move |c| palette.write().eyeshadow = c,
                }
                ColorInput {
                    label: "Blush",
                    color: current.blush,
                    on_change: move |c| palette.write().blush = c,
                }
                label {
                    "Intensity {opacity}%"
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{opacity}",
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse::<f32>() {
                                palette.write().opacity = (v / 100.0).clamp(0.0, 1.0);
                            }
                        },
                    }
                }
                div {
                    class: "makeup-actions",
                    button {
                        class: "btn-primary",
                        disabled: !has_image || busy(),
                        onclick: apply,
                        if busy() { "Detecting..." } else { "Apply makeup" }
                    }
                    button {
                        class: "btn-secondary",
                        disabled: !has_image || busy(),
                        onclick: reset,
                        "Reset"
                    }
                }
                if let Some(count) = faces_found() {
                    p { class: "makeup-status", "Faces found: {count}" }
                }
            }
            div {
                class: "makeup-stage",
                if let Some(src) = image_src() {
                    img {
                        id: IMAGE_ID,
                        class: "makeup-source",
                        src: "{src}",
                        alt: "",
                        onload: on_image_loaded,
                    }
                }
                canvas { id: CANVAS_ID, class: "makeup-canvas" }
                if !has_image {
                    p { class: "makeup-placeholder", "Your photo will appear here" }
                }
            }
        }
    }
}

#[component]
fn ColorInput(label: String, color: Rgba, on_change: EventHandler<Rgba>) -> Element {
    rsx! {
        label {
            class: "color-input",
            "{label}"
            input {
                r#type: "color",
                value: "{color.to_hex()}",
                oninput: move |evt| {
                    if let Some(c) = Rgba::parse_hex(&evt.value()) {
                        on_change.call(c);
                    }
                },
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod canvas {
    use store::makeup::{plan, MakeupPalette, Point, Scale, Shape};
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, CanvasWindingRule, HtmlCanvasElement, HtmlImageElement, HtmlInputElement};

    use super::MAX_CANVAS_WIDTH;

    fn element<T: JsCast>(id: &str) -> Result<T, String> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|e| e.dyn_into::<T>().ok())
            .ok_or_else(|| format!("#{id} is missing"))
    }

    fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
        canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| "Canvas is not supported".to_string())
    }

    /// A blob url for the file picked in `input_id`, if any.
    pub fn object_url_from_input(input_id: &str) -> Result<Option<String>, String> {
        let input: HtmlInputElement = element(input_id)?;
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return Ok(None);
        };
        if !file.type_().starts_with("image/") {
            return Err("Please choose an image file".to_string());
        }
        web_sys::Url::create_object_url_with_blob(&file)
            .map(Some)
            .map_err(|_| "Could not read the photo".to_string())
    }

    pub fn revoke(url: &str) {
        let _ = web_sys::Url::revoke_object_url(url);
    }

    /// Size the canvas to the photo (capped in width) and draw it. Returns the
    /// detector-to-canvas mapping.
    pub fn draw_source(image_id: &str, canvas_id: &str) -> Result<Scale, String> {
        let image: HtmlImageElement = element(image_id)?;
        let canvas: HtmlCanvasElement = element(canvas_id)?;
        let natural = (f64::from(image.natural_width()), f64::from(image.natural_height()));
        if natural.0 <= 0.0 || natural.1 <= 0.0 {
            return Err("The photo has not loaded yet".to_string());
        }
        let shrink = (MAX_CANVAS_WIDTH / natural.0).min(1.0);
        let size = ((natural.0 * shrink).round(), (natural.1 * shrink).round());
        canvas.set_width(size.0 as u32);
        canvas.set_height(size.1 as u32);

        let ctx = context(&canvas)?;
        ctx.clear_rect(0.0, 0.0, size.0, size.1);
        ctx.draw_image_with_html_image_element_and_dw_and_dh(&image, 0.0, 0.0, size.0, size.1)
            .map_err(|_| "Could not draw the photo".to_string())?;
        Ok(Scale::between(natural, size))
    }

    /// Redraw the photo, detect faces and paint the plan. Returns the number of faces.
    pub async fn apply(
        image_id: &str,
        canvas_id: &str,
        models_url: &str,
        palette: &MakeupPalette,
    ) -> Result<usize, String> {
        let scale = draw_source(image_id, canvas_id)?;
        let image: HtmlImageElement = element(image_id)?;
        let faces = crate::interop::detect_faces(models_url, &image).await?;

        let canvas: HtmlCanvasElement = element(canvas_id)?;
        let ctx = context(&canvas)?;
        for shape in plan(&faces, palette, scale) {
            paint(&ctx, &shape)?;
        }
        Ok(faces.len())
    }

    fn trace(ctx: &CanvasRenderingContext2d, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
        ctx.close_path();
    }

    fn paint(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), String> {
        ctx.begin_path();
        match shape {
            Shape::Polygon { outer, hole, fill } => {
                trace(ctx, outer);
                if let Some(hole) = hole {
                    trace(ctx, hole);
                }
                ctx.set_fill_style_str(&fill.css());
                ctx.fill_with_canvas_winding_rule(CanvasWindingRule::Evenodd);
            }
            Shape::Circle { center, radius, fill } => {
                ctx.arc(center.x, center.y, *radius, 0.0, std::f64::consts::TAU)
                    .map_err(|_| "Could not draw blush".to_string())?;
                ctx.set_fill_style_str(&fill.css());
                ctx.fill();
            }
        }
        Ok(())
    }
}
