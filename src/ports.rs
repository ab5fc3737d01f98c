// Ports - 環境変数の読み取り口 (required: EnvClient) と、ライブラリが返すもの (provided: Lookup, EnvError)

pub mod provided;
pub mod required;

pub use provided::*;
pub use required::*;
