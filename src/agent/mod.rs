pub mod classifier;
pub mod input_types;
pub mod output_types;
pub mod responder;
pub mod templates;

pub use input_types::*;
pub use output_types::*;
pub use responder::generate_response;
