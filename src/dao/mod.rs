pub use postgre::{get_path, DataBase, PoolOption, PoolType};

mod postgre;
