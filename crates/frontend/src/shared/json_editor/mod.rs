mod widget;

pub use widget::{EditorChange, JsonEditor, JsonEditorHandle};
