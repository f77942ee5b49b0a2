// lib.rs - Library root for the jotter notepad

pub mod buffer;
pub mod cli;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod cursor;
pub mod dialog;
pub mod editor;
pub mod history;
pub mod keymap;
pub mod menu;
pub mod mode;
pub mod motion;
pub mod ui;
pub mod view;
pub mod viewport;
