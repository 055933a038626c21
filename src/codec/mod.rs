//! Project encodings.
//!
//! - `project` - The JSON project document (export and import)
//! - `c_array` - Generated C header with one static array per layer

pub mod c_array;
pub mod project;

pub use c_array::{array_name, render as render_c_array, ARRAY_BASE_NAME};
pub use project::{
    decode, decode_str, encode, DecodedProject, ProjectDocument, DOCUMENT_VERSION,
};
