mod common;
mod risk;
