pub mod caa;

pub use caa::ResolveCaaUseCase;
