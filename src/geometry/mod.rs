pub mod contour;
pub mod primitive;
pub mod ray;

pub use contour::Contour;
pub use primitive::Primitive;
pub use ray::{Direction, Handle, Heading, Ray};
