use yew::prelude::*;

use crate::config::SPEED_PRESETS;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub running: bool,
    pub generation: u64,
    pub alive: usize,
    pub tick_ms: u32,
    pub on_toggle_run: Callback<()>,
    pub on_step: Callback<()>,
    pub on_clear: Callback<()>,
    pub on_rotate: Callback<()>,
    pub on_speed: Callback<u32>,
    pub children: Children,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let run_cb = {
        let cb = props.on_toggle_run.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let step_cb = {
        let cb = props.on_step.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rotate_cb = {
        let cb = props.on_rotate.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let run_label = if props.running { "Pause (Space)" } else { "Run (Space)" };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px; color:#eeeeee;">
        <div style="font-size:13px;">{ format!("Generation {} · {} alive", props.generation, props.alive) }</div>
        <button onclick={run_cb}>{ run_label }</button>
        <button onclick={step_cb} disabled={props.running}>{"Step"}</button>
        <button onclick={clear_cb}>{"Clear"}</button>
        <button onclick={rotate_cb}>{"Rotate brush (R)"}</button>
        <div style="display:flex; gap:4px;">
            { for SPEED_PRESETS.iter().map(|&(label, ms)| {
                let cb = props.on_speed.clone();
                let style = if ms == props.tick_ms { "flex:1; border:1px solid #00adb5;" } else { "flex:1;" };
                html!{ <button key={label} style={style} onclick={Callback::from(move |_| cb.emit(ms))}>{ label }</button> }
            }) }
        </div>
        { for props.children.iter() }
        <div style="font-size:11px; opacity:0.7;">{"Right-click the board for the brush menu"}</div>
    </div>}
}
