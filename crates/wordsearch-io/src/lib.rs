pub mod audio;
pub mod stdin;
