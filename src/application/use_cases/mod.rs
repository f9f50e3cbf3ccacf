//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **PublishArtifactsUseCase**: ビルド成果物を1つのメッセージとして送信

pub mod publish_artifacts;
