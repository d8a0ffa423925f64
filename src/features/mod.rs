//! Page Features

pub mod pages;
