pub mod petition;
