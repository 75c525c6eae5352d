pub mod health;
pub mod skills;
