mod shape;
mod circle;
mod oriented_box;
mod edge;

pub use self::shape::Shape;
pub use self::circle::Circle;
pub use self::oriented_box::OrientedBox;
pub use self::edge::Edge;
