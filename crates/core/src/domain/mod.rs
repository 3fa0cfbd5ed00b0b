pub mod laptop;
