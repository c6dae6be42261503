mod reader;
mod tokenizer;

pub use reader::{EditorInput, LineSource, ReadOutcome, StreamInput};
pub use tokenizer::{tokenize, DELIMITERS};
