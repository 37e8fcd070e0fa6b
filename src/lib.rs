//! # PNG → ICO 节点插件：库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │               宿主（节点图执行引擎 + UI）                 │
//! │   启动时创建 NodeRegistry → register_builtin_nodes        │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ invoke(name, inputs) -> Result<outputs, NodeError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────── NodeError（统一错误类型）                │
//! │  ├─ node ─────── PluginNode 契约 + schema + 注册表         │
//! │  │   └─ PngToIcoNode  入参解析与 schema 校验              │
//! │  ├─ converter ── 路径校验·解码·RGBA·缩放·ICO 编码         │
//! │  └─ logging ──── env_logger 初始化                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `NodeError`，节点调用的返回错误 |
//! | [`node`] | 插件契约 `PluginNode`、字段 schema、`NodeRegistry`、PNG → ICO 节点 |
//! | [`converter`] | 单次 PNG → ICO 转换，可脱离宿主独立使用 |
//! | [`logging`] | 宿主启动时安装日志 |

pub mod converter;
pub mod error;
pub mod logging;
pub mod node;

pub use converter::{ConvertError, ConverterConfig, IconConverter};
pub use error::NodeError;
pub use node::{register_builtin_nodes, NodeRegistry, PluginNode, PngToIcoNode};
