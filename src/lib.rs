//! 课程仪表盘后端服务
//!
//! 基于 Actix Web 构建，负责截止日期分类、成绩统计与评分界面。
//!
//! # 架构
//! - `calc`: 纯计算逻辑（截止日期、统计、分布）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `grading`: 评分界面状态与自动保存
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（内存）
//! - `utils`: 工具函数

pub mod calc;
pub mod config;
pub mod errors;
pub mod grading;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
