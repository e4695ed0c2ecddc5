mod scrollbar;
mod theme;
mod view;

pub use theme::EditorTheme;
pub use view::{EditorState, EditorView, EDITOR_TEXT_ID};
