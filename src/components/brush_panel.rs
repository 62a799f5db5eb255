use std::rc::Rc;
use yew::prelude::*;

use crate::brush::{Brush, DEFAULT_BRUSH, default_brush, find_brush};
use crate::util::cwarn;

/// Looks `name` up in the catalog, falling back to the default brush with a warning.
pub fn brush_or_default(name: &str) -> Brush {
    match find_brush(name) {
        Ok(brush) => brush,
        Err(e) => {
            cwarn(&format!("{}; using `{}`", e, DEFAULT_BRUSH));
            default_brush()
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BrushPanelProps {
    pub brushes: Rc<Vec<Brush>>,
    pub selected: AttrValue,
    pub on_select: Callback<String>,
}

#[function_component]
pub fn BrushPanel(props: &BrushPanelProps) -> Html {
    html! {<div style="display:flex; flex-direction:column; gap:4px;">
        <div style="font-weight:600; margin-bottom:2px;">{"Brushes"}</div>
        { for props.brushes.iter().map(|b| {
            let selected = props.selected.as_str() == b.name;
            let style = if selected {
                "text-align:left; background:#00adb5; color:#0e1116; border:1px solid #00adb5;"
            } else {
                "text-align:left;"
            };
            let size = b.size();
            let cb = {
                let cb = props.on_select.clone();
                let name = b.name.to_string();
                Callback::from(move |_| cb.emit(name.clone()))
            };
            html!{ <button key={b.name} style={style} onclick={cb}>
                { b.display_name }
                <span style="font-size:11px; opacity:0.7;">{ format!(" {}x{}, {} cells", size.width, size.height, b.template().alive_count()) }</span>
            </button> }
        }) }
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_default() {
        assert_eq!(brush_or_default("gospergun").name, "gospergun");
        assert_eq!(brush_or_default("nope").name, DEFAULT_BRUSH);
    }
}
