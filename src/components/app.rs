use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::{
    board_view::{BoardView, viewport_size},
    brush_panel::{BrushPanel, brush_or_default},
    context_menu::ContextMenu,
    controls_panel::ControlsPanel,
};
use crate::brush::catalog;
use crate::config::{GridConfig, Settings};
use crate::sandbox::{SandboxAction, SandboxState};
use crate::state::ContextMenuState;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(Settings::load);
    let brushes = use_memo((), |_| catalog());
    let sandbox = {
        let initial_brush = settings.brush.clone();
        use_reducer(move || {
            let (width, height) = viewport_size();
            SandboxState::new(GridConfig::default(), width, height, brush_or_default(&initial_brush))
        })
    };
    let menu = use_state(ContextMenuState::default);
    let menu_ref = use_node_ref();

    // Persist settings
    {
        use_effect_with((*settings).clone(), move |s| {
            s.save();
            || ()
        });
    }

    // Keyboard: Space toggles the simulation, R rotates the brush
    {
        let dispatcher = sandbox.dispatcher();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                match e.code().as_str() {
                    "Space" => {
                        e.prevent_default();
                        dispatcher.dispatch(SandboxAction::ToggleRunning);
                    }
                    "KeyR" => dispatcher.dispatch(SandboxAction::RotateBrush),
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .ok();
            move || {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
            }
        });
    }

    // Sim interval, live only while running; cleared on pause or speed change
    {
        let dispatcher = sandbox.dispatcher();
        let running = sandbox.running();
        use_effect_with((running, settings.tick_ms), move |&(running, tick_ms)| {
            let window = web_sys::window().expect("no global `window` exists");
            let sim_tick = Closure::wrap(Box::new(move || {
                dispatcher.dispatch(SandboxAction::Tick);
            }) as Box<dyn FnMut()>);
            let sim_tick_id = if running {
                window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        sim_tick.as_ref().unchecked_ref(),
                        tick_ms as i32,
                    )
                    .ok()
            } else {
                None
            };
            move || {
                if let Some(id) = sim_tick_id {
                    window.clear_interval_with_handle(id);
                }
                drop(sim_tick);
            }
        });
    }

    let select_brush: Callback<String> = {
        let dispatcher = sandbox.dispatcher();
        let settings = settings.clone();
        Callback::from(move |name: String| {
            dispatcher.dispatch(SandboxAction::SelectBrush(brush_or_default(&name)));
            settings.set(Settings { brush: name, ..(*settings).clone() });
        })
    };
    let set_speed: Callback<u32> = {
        let settings = settings.clone();
        Callback::from(move |tick_ms: u32| {
            settings.set(Settings { tick_ms, ..(*settings).clone() });
        })
    };
    let dispatch_cb = |action: SandboxAction| {
        let dispatcher = sandbox.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(action.clone()))
    };

    let open_menu = {
        let menu = menu.clone();
        let menu_ref = menu_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let (w, h) = menu_ref
                .cast::<HtmlElement>()
                .map(|el| {
                    let rect = el.get_bounding_client_rect();
                    (rect.width(), rect.height())
                })
                .unwrap_or((0.0, 0.0));
            let mut next = (*menu).clone();
            if next.open_at(e.client_x() as f64, e.client_y() as f64, (w, h), viewport_size()) {
                menu.set(next);
            }
        })
    };
    let note_touch = {
        let menu = menu.clone();
        Callback::from(move |_: TouchEvent| {
            if !menu.uses_touch {
                menu.set(ContextMenuState { uses_touch: true, ..(*menu).clone() });
            }
        })
    };
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |()| {
            let mut next = (*menu).clone();
            next.close();
            menu.set(next);
        })
    };

    let selected = AttrValue::from(sandbox.brush.name);
    let brush_list = Rc::clone(&brushes);

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#222831;"
        oncontextmenu={open_menu} ontouchstart={note_touch}>
        <BoardView state={sandbox.clone()} />
        <ControlsPanel
            running={sandbox.running()}
            generation={sandbox.simulation.generation}
            alive={sandbox.simulation.board.alive_count()}
            tick_ms={settings.tick_ms}
            on_toggle_run={dispatch_cb(SandboxAction::ToggleRunning)}
            on_step={dispatch_cb(SandboxAction::Step)}
            on_clear={dispatch_cb(SandboxAction::Clear)}
            on_rotate={dispatch_cb(SandboxAction::RotateBrush)}
            on_speed={set_speed}>
            <BrushPanel brushes={brush_list.clone()} selected={selected.clone()} on_select={select_brush.clone()} />
        </ControlsPanel>
        <ContextMenu menu={(*menu).clone()} menu_ref={menu_ref} on_close={close_menu}>
            <BrushPanel brushes={brush_list} selected={selected} on_select={select_brush} />
        </ContextMenu>
    </div>}
}
