pub mod canvas;
pub mod draw;
pub mod font;
pub mod raster;
