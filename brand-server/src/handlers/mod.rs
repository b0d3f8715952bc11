pub mod brand;
pub mod dev_override;
pub mod health;
pub mod theme;
