pub mod health;
pub mod recipe;
pub mod saved_recipe;
pub mod server;

#[cfg(test)]
pub mod test;
