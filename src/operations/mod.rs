mod fillet_corner;
mod hole_placer;
mod trace;

pub use fillet_corner::FilletCorner;
pub use hole_placer::HolePlacer;
pub use trace::ContourTracer;
