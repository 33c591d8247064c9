pub use self::{
    path::get_path,
    types::{DataBase, PoolOption, PoolType},
};

mod asset_snapshot;
mod path;
mod types;
