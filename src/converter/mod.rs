//! # 图标转换模块（converter）
//!
//! ## 设计思路
//!
//! 该模块把 “路径校验 → 读取 → 解码 → RGBA 归一化 → 缩放 → ICO 编码写入”
//! 按职责拆分为多个子模块，与宿主节点层完全解耦，可独立调用与测试。
//!
//! - `handler`：编排整条处理流水线（含阶段耗时日志）
//! - `loader`：路径校验、输出路径推导、文件读取与格式提示
//! - `pipeline`：解码、色彩模式归一化、缩放
//! - `encoder`：ICO 编码与写入
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! 节点 invoke（node::PngToIcoNode）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（路径校验 + 输出路径 + 格式提示）
//!    ├─ pipeline.rs（解码 + RGBA + 缩放）
//!    └─ encoder.rs（ICO 编码 + 写入）
//!    ↓
//! 返回 ConvertError 给节点层
//! ```

mod config;
mod encoder;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;

pub use config::{ConverterConfig, ResizeQuality};
pub use encoder::ICO_MAX_DIMENSION;
pub use error::{ConfigError, ConvertError};
pub use handler::IconConverter;
pub use source::{ConversionOutcome, ConversionRequest};
