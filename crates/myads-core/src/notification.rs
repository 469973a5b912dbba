//! Notification setup records
//!
//! A myADS notification is either a saved search (wrapping a stored query
//! by qid) or one of four curated templates. Template kinds imply their
//! cadence and whether runs track already-seen results; only arXiv digests
//! let the user pick daily or weekly delivery.

use serde::{Deserialize, Serialize};

use crate::config::MyadsConfig;
use crate::error::ConfigError;
use crate::name::{default_template_name, is_autogenerated_name};

/// Saved search vs curated template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Query,
    Template,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Query => "query",
            NotificationType::Template => "template",
        }
    }
}

/// Curated notification templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Arxiv,
    Citations,
    Authors,
    Keyword,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Arxiv => "arxiv",
            TemplateKind::Citations => "citations",
            TemplateKind::Authors => "authors",
            TemplateKind::Keyword => "keyword",
        }
    }

    /// Cadence implied by the template kind
    pub fn default_frequency(&self) -> Frequency {
        match self {
            TemplateKind::Arxiv => Frequency::Daily,
            _ => Frequency::Weekly,
        }
    }

    /// Whether runs of this template track already-delivered results
    pub fn default_stateful(&self) -> bool {
        matches!(self, TemplateKind::Citations | TemplateKind::Authors)
    }
}

/// Delivery cadence of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        }
    }
}

/// A stored myADS notification setup.
///
/// `qid` links saved-search rows to the stored query they wrap; template
/// rows carry their own `data` and, for arXiv digests, `classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: Option<i64>,
    pub user_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
    pub frequency: Frequency,
    pub stateful: bool,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qid: Option<String>,
}

/// Fields a client may change on an existing notification.
///
/// Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationUpdate {
    pub name: Option<String>,
    pub data: Option<String>,
    pub classes: Option<Vec<String>>,
    pub frequency: Option<Frequency>,
    pub active: Option<bool>,
}

impl NotificationRecord {
    /// Create a template notification, deriving name, cadence, and
    /// statefulness from the kind.
    ///
    /// A `frequency` is honored for arXiv digests only; the other templates
    /// run weekly. Empty `data` behaves like no data at all.
    pub fn from_template(
        user_id: i64,
        template: TemplateKind,
        data: Option<String>,
        classes: Option<Vec<String>>,
        frequency: Option<Frequency>,
        config: &MyadsConfig,
    ) -> Result<Self, ConfigError> {
        let data = data.filter(|d| !d.trim().is_empty());
        validate_template_fields(template, data.as_deref(), classes.as_deref(), config)?;

        let frequency = match (template, frequency) {
            (TemplateKind::Arxiv, Some(chosen)) => chosen,
            _ => template.default_frequency(),
        };

        Ok(Self {
            id: None,
            user_id,
            name: default_template_name(template, data.as_deref()),
            kind: NotificationType::Template,
            template: Some(template),
            data,
            classes,
            frequency,
            stateful: template.default_stateful(),
            active: true,
            qid: None,
        })
    }

    /// Create a saved-search notification wrapping a stored query.
    pub fn from_stored_query(
        user_id: i64,
        qid: impl Into<String>,
        name: impl Into<String>,
        frequency: Frequency,
        stateful: bool,
    ) -> Self {
        Self {
            id: None,
            user_id,
            name: name.into(),
            kind: NotificationType::Query,
            template: None,
            data: None,
            classes: None,
            frequency,
            stateful,
            active: true,
            qid: Some(qid.into()),
        }
    }

    /// Apply a partial update. A failed update leaves the record untouched.
    ///
    /// Names follow the data: a name that still matches the auto-generated
    /// name for the old data is refreshed from the new data, while a
    /// user-chosen name stays frozen. Cadence changes only apply to saved
    /// searches and arXiv digests.
    pub fn apply_update(
        &mut self,
        update: NotificationUpdate,
        config: &MyadsConfig,
    ) -> Result<(), ConfigError> {
        let mut next = self.clone();

        if let Some(active) = update.active {
            next.active = active;
        }

        if let Some(frequency) = update.frequency {
            let adjustable = next.kind == NotificationType::Query
                || matches!(next.template, Some(TemplateKind::Arxiv));
            if adjustable {
                next.frequency = frequency;
            }
        }

        if let Some(data) = update.data {
            next.data = Some(data).filter(|d| !d.trim().is_empty());
        }

        if let Some(classes) = update.classes {
            next.classes = Some(classes);
        }

        match next.template {
            Some(template) => {
                validate_template_fields(
                    template,
                    next.data.as_deref(),
                    next.classes.as_deref(),
                    config,
                )?;
                let effective = update.name.unwrap_or_else(|| next.name.clone());
                next.name = if is_autogenerated_name(&effective, template, self.data.as_deref()) {
                    default_template_name(template, next.data.as_deref())
                } else {
                    effective
                };
            }
            None => {
                if let Some(name) = update.name {
                    next.name = name;
                }
            }
        }

        *self = next;
        Ok(())
    }
}

/// A planned notification produced by the Classic profile import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSeed {
    pub template: TemplateKind,
    pub name: String,
    pub data: Option<String>,
    pub classes: Option<Vec<String>>,
    pub frequency: Frequency,
    pub stateful: bool,
    pub active: bool,
}

fn validate_template_fields(
    template: TemplateKind,
    data: Option<&str>,
    classes: Option<&[String]>,
    config: &MyadsConfig,
) -> Result<(), ConfigError> {
    match template {
        TemplateKind::Arxiv => {
            let classes = classes.ok_or(ConfigError::MissingClasses)?;
            if classes.is_empty() {
                return Err(ConfigError::MissingClasses);
            }
            for class in classes {
                if !config.is_allowed_class(class) {
                    return Err(ConfigError::UnknownClass(class.clone()));
                }
            }
        }
        _ => {
            if let Some(classes) = classes {
                if !classes.is_empty() {
                    return Err(ConfigError::UnexpectedClasses);
                }
            }
            if data.is_none() {
                return Err(ConfigError::MissingData(template.as_str().to_string()));
            }
        }
    }
    Ok(())
}
