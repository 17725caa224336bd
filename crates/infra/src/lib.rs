// crates/infra/src/lib.rs
//! ファイル読み取りアダプタ層
//!
//! 分類エンジンへバイト列を供給する3つの戦略（全読み込み・バッファ
//! 読み込み・メモリマップ）を提供します。戦略は性能上の選択にすぎず、
//! 同一入力に対して必ず同一の計数結果を返します。

pub mod error;
pub mod strategies;

pub use error::{Result, ScanError};
pub use strategies::{IoStrategy, scan_file};
