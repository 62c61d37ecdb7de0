//! # NOVA Automations API サーバー
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p nova-api
//!
//! # 本番環境（環境変数を直接指定）
//! API_PORT=8000 DATABASE_URL=postgres://... cargo run -p nova-api --release
//! ```
//!
//! 環境変数の一覧は [`nova_api::config`] を参照。

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use nova_api::{
    app_builder::{AppDependencies, build_app},
    config::ApiConfig,
};
use nova_infra::{
    db,
    notification::NoopNotificationSender,
    repository::{DocumentStore, PostgresDocumentStore, UnavailableDocumentStore},
};
use nova_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ドキュメントストアの準備
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("api"));
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    let document_store = create_document_store(&config).await?;

    let app = build_app(
        &config,
        AppDependencies {
            document_store,
            notification_sender: Arc::new(NoopNotificationSender),
        },
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// 設定に応じたドキュメントストアを作成する
///
/// DB に到達できなくても起動は継続し、疎通プローブで `db: false` を返す。
/// マイグレーションは DB の復旧後、最初のアクセス時に適用される。
async fn create_document_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL が未設定のため、DB なしで起動します");
        return Ok(Arc::new(UnavailableDocumentStore));
    };

    let pool = db::create_lazy_pool(database_url).context("DATABASE_URL が不正です")?;
    let store = PostgresDocumentStore::new(pool);

    match store.ensure_schema().await {
        Ok(()) => tracing::info!("データベースに接続しました"),
        Err(e) => tracing::warn!(
            error = %e,
            "マイグレーションを適用できませんでした（初回アクセス時に再試行します）"
        ),
    }

    Ok(Arc::new(store))
}
