pub mod grid;
pub mod integrate;
pub mod noise;
pub mod path;
pub mod pointer;
pub mod scene;

pub use self::grid::*;
pub use self::noise::*;
pub use self::pointer::*;
pub use self::scene::*;
