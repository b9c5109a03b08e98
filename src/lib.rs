//! escon: an interactive console for operating a search cluster through its
//! `_cat` text API. The library half holds the parsing, snapshot, and HTTP
//! client layers; the binary wires them into a terminal UI.

pub mod cat;
pub mod client;
pub mod console;
pub mod snapshot;
