pub mod dev;
pub mod inst;
pub mod limits;
pub mod reg;
