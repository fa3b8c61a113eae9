//! Greeting banner loader.

use std::path::Path;

use super::error::ServerError;

/// Read the greeting banner once, at startup.
pub async fn load_banner(path: &Path) -> Result<String, ServerError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ServerError::Banner {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_banner_success() {
        // テスト項目: バナーファイルの内容がそのまま読み込まれる
        // given (前提条件):
        let path = std::env::temp_dir().join(format!("irori-banner-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "Welcome to TCP-Chat!\n").unwrap();

        // when (操作):
        let result = load_banner(&path).await;

        // then (期待する結果):
        assert_eq!(result.unwrap(), "Welcome to TCP-Chat!\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_load_banner_missing_file() {
        // テスト項目: 存在しないファイルの場合はパス付きのエラーになる
        // given (前提条件):
        let path = Path::new("/nonexistent/irori/welcome.txt");

        // when (操作):
        let result = load_banner(path).await;

        // then (期待する結果):
        match result {
            Err(ServerError::Banner { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected banner error, got {:?}", other),
        }
    }
}
