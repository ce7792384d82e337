pub mod config;
pub mod content;
pub mod signals;

// Core state machines
pub mod field;
pub mod carousel;

// Rendering-layer helpers
pub mod motion;
pub mod cursor;

// Contact form & notifications
pub mod contact;
pub mod notify;

// Cover images
pub mod net;
