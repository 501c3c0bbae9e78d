pub mod health;
pub mod item_list;
pub mod item_get;
pub mod item_search;
pub mod item_add;
pub mod item_update;
pub mod item_delete;

pub use health::*;
pub use item_list::*;
pub use item_get::*;
pub use item_search::*;
pub use item_add::*;
pub use item_update::*;
pub use item_delete::*;
