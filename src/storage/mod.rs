pub mod interface;
pub mod locations;
#[cfg(test)]
mod tests;
