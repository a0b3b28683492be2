mod categories;
mod common;
mod risk;
