mod brush;
mod components;
mod config;
mod error;
mod geometry;
mod life;
mod model;
mod paint;
mod sandbox;
mod state;
mod util;

fn main() {
    yew::Renderer::<components::app::App>::new().render();
}
