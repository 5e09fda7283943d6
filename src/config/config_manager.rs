// ==========================================
// 运输费率系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: JSON 对象文件（扁平 key-value）
// 优先级: 命令行 > 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::rate_config_trait::RateConfigReader;
use crate::repository::DEFAULT_TOP_N;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// 默认工作表名
pub const DEFAULT_SHEET_NAME: &str = "JAIDURGA LOGISTIC";

/// 配置文件默认位置: <config_dir>/transport-rates/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("transport-rates").join("config.json"))
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn is_false(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "n" | "off"
    )
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 创建空配置（全部取默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有 key-value 创建
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// 从 JSON 文件加载
    ///
    /// # 格式
    /// ```json
    /// { "workbook_path": "rates.xlsx", "sheet_name": "JAIDURGA LOGISTIC", "top_n": 3 }
    /// ```
    /// 非字符串值按 JSON 文本保存,未知键忽略
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let parsed: HashMap<String, Value> =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let values = parsed
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();

        tracing::debug!(path = %path.display(), "配置文件加载完成");
        Ok(Self { values })
    }

    /// 从默认位置加载（文件不存在时返回空配置）
    pub fn load_default() -> ConfigResult<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::new()),
        }
    }

    /// 应用环境变量覆写
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// 应用覆写（lookup: 环境变量名 → 值）
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for &(env_name, key) in env_overrides::MAPPING {
            if let Some(value) = lookup(env_name).filter(|v| !v.trim().is_empty()) {
                tracing::debug!(env = env_name, key = key, "环境变量覆写配置");
                self.values.insert(key.to_string(), value);
            }
        }
        self
    }

    /// 写入单项配置（命令行覆写）
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key).unwrap_or(default).trim().to_string()
    }

    fn get_usize_or_default(&self, key: &str, default: usize) -> usize {
        let value = self.get_config_or_default(key, &default.to_string());
        value.parse::<usize>().unwrap_or_else(|_| {
            tracing::warn!(config_key = key, raw_value = %value, "配置值格式错误，使用默认值");
            default
        })
    }

    /// 获取所有配置的快照（JSON格式,按键排序）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let sorted: BTreeMap<&String, &String> = self.values.iter().collect();
        Ok(serde_json::to_string(&json!(sorted))?)
    }
}

// ==========================================
// RateConfigReader Trait 实现
// ==========================================
impl RateConfigReader for ConfigManager {
    fn get_workbook_path(&self) -> ConfigResult<PathBuf> {
        self.get_config_value(config_keys::WORKBOOK_PATH)
            .map(|v| PathBuf::from(v.trim()))
            .ok_or_else(|| ConfigError::MissingValue {
                key: config_keys::WORKBOOK_PATH.to_string(),
            })
    }

    fn get_sheet_name(&self) -> ConfigResult<String> {
        Ok(self.get_config_or_default(config_keys::SHEET_NAME, DEFAULT_SHEET_NAME))
    }

    fn get_label_column(&self) -> ConfigResult<usize> {
        Ok(self.get_usize_or_default(config_keys::LABEL_COLUMN, 1))
    }

    fn get_title_case_transporters(&self) -> ConfigResult<bool> {
        let value = self.get_config_or_default(config_keys::TITLE_CASE_TRANSPORTERS, "true");
        if is_true(&value) {
            Ok(true)
        } else if is_false(&value) {
            Ok(false)
        } else {
            tracing::warn!(
                config_key = config_keys::TITLE_CASE_TRANSPORTERS,
                raw_value = %value,
                "配置值格式错误，使用默认值"
            );
            Ok(true)
        }
    }

    fn get_top_n(&self) -> ConfigResult<usize> {
        Ok(self.get_usize_or_default(config_keys::TOP_N, DEFAULT_TOP_N))
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 数据源
    pub const WORKBOOK_PATH: &str = "workbook_path";
    pub const SHEET_NAME: &str = "sheet_name";

    // 解析
    pub const LABEL_COLUMN: &str = "label_column";
    pub const TITLE_CASE_TRANSPORTERS: &str = "title_case_transporters";

    // 查询
    pub const TOP_N: &str = "top_n";
}

// ==========================================
// 环境变量覆写
// ==========================================
pub mod env_overrides {
    use super::config_keys;

    pub const WORKBOOK: &str = "TRANSPORT_RATES_WORKBOOK";
    pub const SHEET: &str = "TRANSPORT_RATES_SHEET";

    pub const MAPPING: &[(&str, &str)] = &[
        (WORKBOOK, config_keys::WORKBOOK_PATH),
        (SHEET, config_keys::SHEET_NAME),
    ];
}
