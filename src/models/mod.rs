pub mod health;
pub mod ready;
pub mod item;
pub mod item_list;
pub mod item_search;
pub mod item_change;
pub mod error;

pub use health::*;
pub use ready::*;
pub use item::*;
pub use item_list::*;
pub use item_search::*;
pub use item_change::*;
pub use error::*;
