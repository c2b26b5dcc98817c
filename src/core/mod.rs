pub mod ballistics;
pub mod geometry;
pub mod plot;
pub mod scene;
pub mod window;
