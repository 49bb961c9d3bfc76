pub mod format;
pub mod generate;
pub mod routing;
