mod widget;

pub use widget::{SelectMenu, SelectMenuItem};
