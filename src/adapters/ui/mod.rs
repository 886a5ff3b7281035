//! Console adapter. Reads the request from CLI arguments and renders the outcome.

pub mod console;

pub use console::{
    ConsoleRunner, EXAMPLE_INPUT, NOT_AN_EVENT_MESSAGE, input_from_args, render_outcome,
};
