use yew::prelude::*;
use web_sys::{HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use shared::constants::CANVAS_SIZE;
use shared::shared_prize_wheel::{RenderSurface, Sector, TextAlign, WheelPainter};

/// `RenderSurface` backed by a browser 2D context.
pub struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> Self {
        Self { context }
    }
}

impl RenderSurface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        let _ = self.context.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.context.rotate(angle);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        let _ = self.context.arc(x, y, radius, start_angle, end_angle);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn fill(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.fill();
    }

    fn stroke(&mut self, color: &str, line_width: f64) {
        self.context.set_stroke_style_str(color);
        self.context.set_line_width(line_width);
        self.context.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, align: TextAlign, color: &str) {
        self.context.set_font(font);
        self.context.set_text_align(align.as_css());
        self.context.set_text_baseline("middle");
        self.context.set_fill_style_str(color);
        let _ = self.context.fill_text(text, x, y);
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub sectors: Vec<Sector>,
    pub pointer_angle: f64,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(
            (props.rotation, props.sectors.clone(), props.pointer_angle),
            move |(rotation, sectors, pointer_angle)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());

                    match context {
                        Some(context) => {
                            let painter = WheelPainter::new(
                                canvas.width() as f64,
                                canvas.height() as f64,
                                *pointer_angle,
                            );
                            painter.paint(&mut CanvasSurface::new(&context), sectors, *rotation);
                        }
                        None => log::error!("Canvas 2D context unavailable"),
                    }
                }
                || ()
            }
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg"
                style="filter: drop-shadow(0px 5px 15px rgba(0, 191, 255, 0.25));"
            />
        </div>
    }
}
