pub mod input;
pub mod render;
pub mod vm;

pub use input::{Command, InputError, parse_command};
pub use render::{render_instructions, render_page, render_results};
