pub use self::{classification::*, item::*, point::*, relationship::*, stage::*};

pub(crate) mod classification;
pub(crate) mod item;
pub(crate) mod point;
pub(crate) mod relationship;
pub(crate) mod stage;
