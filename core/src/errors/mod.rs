mod array_error;

pub use array_error::ArrayError;
