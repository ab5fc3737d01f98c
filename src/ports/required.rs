// Required Ports - アプリケーションが実装すべきインターフェース
use std::collections::HashMap;

/// ENVクライアント
/// 環境変数取得
///
/// Read-only by contract: the library never writes to the environment.
///
/// # Examples
///
/// ```
/// use envcast::EnvClient;
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("PORT".to_string(), "8080".to_string());
///
/// assert_eq!(vars.var("PORT"), Some("8080".to_string()));
/// assert_eq!(vars.var("HOST"), None);
/// ```
pub trait EnvClient {
    /// 環境変数を取得
    fn var(&self, key: &str) -> Option<String>;
}

impl<C: EnvClient + ?Sized> EnvClient for &C {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<C: EnvClient + ?Sized> EnvClient for Box<C> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl EnvClient for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
