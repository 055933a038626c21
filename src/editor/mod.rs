//! Editing: the layer store and the session that wraps it.

mod session;
mod store;

pub use session::{ClipboardSink, EditorSession, LoadTicket};
pub use store::{Change, LayerStore};
