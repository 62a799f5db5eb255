use yew::prelude::*;

use crate::state::ContextMenuState;

#[derive(Properties, PartialEq, Clone)]
pub struct ContextMenuProps {
    pub menu: ContextMenuState,
    pub menu_ref: NodeRef,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Backdrop plus a floating panel anchored at the right-click point.
/// Rendered hidden while closed so its size can be measured before opening.
#[function_component]
pub fn ContextMenu(props: &ContextMenuProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let m = &props.menu;
    let backdrop = if m.open {
        "position:fixed; inset:0; z-index:40;"
    } else {
        "position:fixed; inset:0; z-index:40; visibility:hidden; pointer-events:none;"
    };
    let panel = format!(
        "position:absolute; left:{}px; top:{}px; transform:{}; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:8px; color:#eeeeee;",
        m.x,
        m.y,
        m.transform()
    );
    html! {<div style={backdrop} onclick={close_cb}>
        <div ref={props.menu_ref.clone()} style={panel}>
            { for props.children.iter() }
        </div>
    </div>}
}
