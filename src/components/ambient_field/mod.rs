mod component;
mod frame_loop;
pub mod presets;
mod render;
mod state;
mod types;

pub use component::AmbientCanvas;
