pub mod array;
pub mod errors;
pub mod json;
pub mod key;
pub mod value;

pub use array::{
    call_array_method, ArrayCursor, CursorKind, IterStep, JsArray, Slot, StorageMode,
    StoragePolicy,
};
pub use errors::ArrayError;
pub use key::PropertyKey;
pub use value::{ArrayRef, Value};
