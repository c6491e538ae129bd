mod resolve_caa;

pub use resolve_caa::ResolveCaaUseCase;
