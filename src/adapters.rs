// Adapters - EnvClient の標準実装

pub mod in_memory_env;
pub mod system_env;

pub use in_memory_env::InMemoryEnv;
pub use system_env::SystemEnv;
