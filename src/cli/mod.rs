pub mod args;

pub use args::{default_output_path, Args, FontChoice, Orientation, PageSize};
