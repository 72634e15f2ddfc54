pub mod catalog;
pub mod history;
pub mod lookup;
pub mod scan;
pub mod score;
