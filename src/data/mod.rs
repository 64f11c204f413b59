//! Repositories persisting guild mirrors.

pub mod game_server;

#[cfg(test)]
mod test;
