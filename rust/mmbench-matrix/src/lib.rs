pub mod matrix;
pub mod ops;

#[cfg(test)]
mod tests;
