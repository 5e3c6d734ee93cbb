pub mod config;
pub mod database;
pub mod entity;
pub mod tmdb;
