pub mod font;
pub mod layout;
pub mod renderer;
