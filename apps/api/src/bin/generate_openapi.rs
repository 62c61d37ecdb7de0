//! # OpenAPI YAML 生成ツール
//!
//! Rust 型から生成した OpenAPI 仕様を YAML 形式で標準出力に出力する。
//!
//! ```bash
//! cargo run --bin generate-openapi -p nova-api > openapi/openapi.yaml
//! ```

use nova_api::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let yaml = ApiDoc::openapi().to_yaml()?;
    print!("{yaml}");
    Ok(())
}
