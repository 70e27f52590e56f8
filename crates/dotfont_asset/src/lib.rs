pub mod chars;
pub mod loader;

pub use chars::CharList;
pub use loader::{Asset, Loader};
