pub mod trending;
