use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::geometry::index_to_coord;
use crate::sandbox::{SandboxAction, SandboxState};

const DEAD_COLOR: &str = "#393e46";
const LIVE_COLOR: &str = "#00adb5";
const PREVIEW_COLOR: &str = "rgba(238, 238, 238, 0.3)";
/// Preview cells sitting on the last committed footprint.
const BLOCKED_COLOR: &str = "rgb(200, 87, 125)";

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub state: UseReducerHandle<SandboxState>,
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (800.0, 600.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (width.max(0.0), height.max(0.0))
}

fn draw_board(canvas: &HtmlCanvasElement, s: &SandboxState) {
    if !canvas.is_connected() {
        return;
    }
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        None => return,
    };
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    if s.simulation.board.is_empty() {
        return;
    }
    let cfg = s.config;
    let cols = s.size().width;
    let preview = s.preview.board.cells();
    for (i, cell) in s.simulation.board.cells().iter().enumerate() {
        let c = index_to_coord(i, cols);
        let (px, py) = cfg.cell_origin(c.x, c.y);
        ctx.set_fill_style_str(if cell.is_alive() { LIVE_COLOR } else { DEAD_COLOR });
        ctx.fill_rect(px, py, cfg.cell_size, cfg.cell_size);
        if preview.get(i).is_some_and(|p| p.is_alive()) {
            let color = if s.gesture.last_painted.contains(&i) {
                BLOCKED_COLOR
            } else {
                PREVIEW_COLOR
            };
            ctx.set_fill_style_str(color);
            ctx.fill_rect(px, py, cfg.cell_size, cfg.cell_size);
        }
    }
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let state_ref = use_mut_ref(|| props.state.clone());
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Effect: pick up the latest handle on every version, then redraw
    {
        let state_ref = state_ref.clone();
        let draw_ref = draw_ref.clone();
        let handle = props.state.clone();
        use_effect_with(props.state.version, move |_| {
            *state_ref.borrow_mut() = handle;
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }

    // Main mount effect (listeners)
    {
        let canvas_ref = canvas_ref.clone();
        let dispatcher = props.state.dispatcher();
        let draw_ref_setup = draw_ref.clone();
        let state_ref = state_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");
            let config = state_ref.borrow().config;

            let fit_canvas = {
                let canvas = canvas.clone();
                let dispatcher = dispatcher.clone();
                move || {
                    let (width, height) = viewport_size();
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                    dispatcher.dispatch(SandboxAction::Resize { width, height });
                }
            };
            fit_canvas();

            let draw: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let state_ref = state_ref.clone();
                Rc::new(move || {
                    let handle = state_ref.borrow();
                    draw_board(&canvas, &handle);
                })
            };
            draw();
            *draw_ref_setup.borrow_mut() = Some(draw);

            let resize_cb = {
                let fit_canvas = fit_canvas.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    fit_canvas();
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();

            let mousemove_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let coord = config.pixel_to_coord(e.offset_x() as f64, e.offset_y() as f64);
                    // primary button alone, or primary + secondary
                    if e.buttons() == 1 || e.buttons() == 3 {
                        dispatcher.dispatch(SandboxAction::Drag { coord });
                    } else {
                        dispatcher.dispatch(SandboxAction::Hover { coord });
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .ok();

            let click_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let coord = config.pixel_to_coord(e.offset_x() as f64, e.offset_y() as f64);
                    dispatcher.dispatch(SandboxAction::Click { coord });
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                .ok();

            let mouseleave_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    dispatcher.dispatch(SandboxAction::HoverClear);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mouseleave", mouseleave_cb.as_ref().unchecked_ref())
                .ok();

            let touch_move_cb = {
                let canvas_tc = canvas.clone();
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        let rect = canvas_tc.get_bounding_client_rect();
                        let cx = t0.client_x() as f64 - rect.left();
                        let cy = t0.client_y() as f64 - rect.top();
                        let coord = config.pixel_to_coord(cx, cy);
                        dispatcher.dispatch(SandboxAction::TouchMove { coord });
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref())
                .ok();

            let touch_end_cb = {
                let canvas_tc = canvas.clone();
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.changed_touches().item(0) {
                        let rect = canvas_tc.get_bounding_client_rect();
                        let cx = t0.client_x() as f64 - rect.left();
                        let cy = t0.client_y() as f64 - rect.top();
                        let coord = config.pixel_to_coord(cx, cy);
                        dispatcher.dispatch(SandboxAction::TouchEnd { coord });
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();

            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = window_clone
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas
                    .remove_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (
                    &resize_cb,
                    &mousemove_cb,
                    &click_cb,
                    &mouseleave_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                );
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} id="life-canvas" style="display:block; touch-action:none;"></canvas>
    }
}
