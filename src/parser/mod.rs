pub mod number_list;

pub use number_list::{NumberListParser, Parser};
