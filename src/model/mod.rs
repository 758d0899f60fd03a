pub mod geometry;
pub mod page;

pub use geometry::{Margins, PageGeometry};
pub use page::PageText;
