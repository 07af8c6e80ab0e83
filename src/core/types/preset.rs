//! 页面预设：权限定义与接口定义

use serde::{Deserialize, Serialize};

use crate::core::error::{LimitError, LimitResult};
use crate::core::table::OrderedTable;

/// 节点上的单个权限定义
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LimitDef {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// 同一权限表中依赖的其他 key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs: Option<Vec<String>>,
}

impl LimitDef {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_needs<I, S>(mut self, needs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.needs = Some(needs.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// 声明的依赖，缺省为空
    pub fn needs(&self) -> &[String] {
        self.needs.as_deref().unwrap_or(&[])
    }
}

/// 单个节点的权限表：limit key -> 定义
pub type LimitTable = OrderedTable<LimitDef>;

/// 接口所需权限，既可以是单个 key 也可以是 key 列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiLimits {
    One(String),
    Many(Vec<String>),
}

impl ApiLimits {
    /// 统一成有序列表
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ApiLimits::One(key) => vec![key.clone()],
            ApiLimits::Many(keys) => keys.clone(),
        }
    }
}

/// 页面上声明的接口
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiDef {
    /// 鉴权 key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ApiLimits>,
}

impl ApiDef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_limits(mut self, limits: ApiLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// 接口声明的权限 key 列表，未声明时为空
    pub fn preset_needs(&self) -> Vec<String> {
        self.limits.as_ref().map(ApiLimits::to_vec).unwrap_or_default()
    }
}

/// 单个节点的接口表：api key -> 定义
pub type ApiTable = OrderedTable<ApiDef>;

/// 页面预设
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PagePreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<LimitTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apis: Option<ApiTable>,
}

impl PagePreset {
    pub fn with_limits(mut self, limits: LimitTable) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_apis(mut self, apis: ApiTable) -> Self {
        self.apis = Some(apis);
        self
    }

    pub fn from_json(json: &str) -> LimitResult<Self> {
        serde_json::from_str(json).map_err(|e| LimitError::invalid_preset(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_limits_single_and_list() {
        let preset = PagePreset::from_json(
            r#"{
                "apis": {
                    "list": { "url": "GET /users", "limits": "$page" },
                    "remove": { "url": "DELETE /users/$id", "key": "users.remove", "limits": ["edit", "del"] },
                    "ping": { "url": "GET /ping" }
                }
            }"#,
        )
        .expect("预设解析应该成功");

        let apis = preset.apis.expect("应该包含 apis");
        assert_eq!(apis.get("list").map(ApiDef::preset_needs), Some(vec!["$page".to_string()]));
        assert_eq!(
            apis.get("remove").map(ApiDef::preset_needs),
            Some(vec!["edit".to_string(), "del".to_string()])
        );
        assert_eq!(apis.get("remove").and_then(|a| a.key.clone()), Some("users.remove".to_string()));
        assert!(apis.get("ping").map(ApiDef::preset_needs).unwrap_or_default().is_empty());
    }

    #[test]
    fn test_malformed_api_limits_rejected() {
        let err = PagePreset::from_json(r#"{"apis": {"list": {"url": "/x", "limits": 42}}}"#)
            .unwrap_err();
        assert!(matches!(err, LimitError::InvalidPreset(_)));
    }

    #[test]
    fn test_limit_def_needs_default_empty() {
        let def: LimitDef = serde_json::from_str(r#"{"label": "查看"}"#).expect("解析应该成功");
        assert!(def.needs().is_empty());
        assert!(def.needs.is_none());
    }
}
