//! Notification query construction
//!
//! Expands a notification setup into the ready-to-execute query/sort pairs
//! a notification run sends to the search engine. Each template kind has a
//! fixed shape:
//!
//! - arXiv digests filter on `arxiv_class`, optionally split into a
//!   keyword-matched query and a daily "everything else" query
//! - citations queries wrap the author data in `citations()` and carry no
//!   date window, since the digest is cumulative
//! - authors and keyword queries append the windowed date filter; keyword
//!   setups add undated `trending()` and `useful()` companions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::MyadsConfig;
use crate::error::ConfigError;
use crate::notification::{Frequency, NotificationRecord, TemplateKind};
use crate::schedule::DateWindow;

/// One executable search: query string plus sort order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPair {
    pub q: String,
    pub sort: String,
}

impl QueryPair {
    pub fn new(q: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            sort: sort.into(),
        }
    }
}

/// Build the executable queries for a template notification.
///
/// `resume` marks the last delivered run; see [`DateWindow`] for how it
/// affects the window. Citations setups ignore both `resume` and the
/// window entirely.
pub fn build_notification_query(
    template: TemplateKind,
    frequency: Frequency,
    data: Option<&str>,
    classes: Option<&[String]>,
    resume: Option<NaiveDate>,
    now: NaiveDate,
    config: &MyadsConfig,
) -> Result<Vec<QueryPair>, ConfigError> {
    match template {
        TemplateKind::Arxiv => {
            let classes = classes
                .filter(|c| !c.is_empty())
                .ok_or(ConfigError::MissingClasses)?;
            let class_filter = arxiv_class_filter(classes);
            let window = DateWindow::for_frequency(frequency, resume, now, config);
            let date_filter = window.filter();

            match data.filter(|d| !d.trim().is_empty()) {
                Some(keywords) => {
                    let mut queries = vec![QueryPair::new(
                        format!("{} ({}) {}", class_filter, keywords, date_filter),
                        "score desc, date desc",
                    )];
                    if frequency == Frequency::Daily {
                        // the daily digest also carries the unmatched rest
                        queries.push(QueryPair::new(
                            format!("{} NOT ({}) {}", class_filter, keywords, date_filter),
                            "date desc",
                        ));
                    }
                    Ok(queries)
                }
                None => Ok(vec![QueryPair::new(
                    format!("bibstem:arxiv {} {}", class_filter, date_filter),
                    "date desc",
                )]),
            }
        }
        TemplateKind::Citations => {
            let data = require_data(template, data)?;
            Ok(vec![QueryPair::new(
                format!("citations({})", data),
                "entry_date desc, date desc",
            )])
        }
        TemplateKind::Authors => {
            let data = require_data(template, data)?;
            let window = DateWindow::for_frequency(Frequency::Weekly, resume, now, config);
            Ok(vec![QueryPair::new(
                format!("{} {}", data, window.filter()),
                "score desc, date desc",
            )])
        }
        TemplateKind::Keyword => {
            let data = require_data(template, data)?;
            let window = DateWindow::for_frequency(Frequency::Weekly, resume, now, config);
            Ok(vec![
                QueryPair::new(
                    format!("{} {}", data, window.filter()),
                    "entry_date desc, date desc",
                ),
                QueryPair::new(format!("trending({})", data), "score desc, date desc"),
                QueryPair::new(format!("useful({})", data), "score desc, date desc"),
            ])
        }
    }
}

impl NotificationRecord {
    /// Executable queries for a template notification record.
    ///
    /// Saved-search records are expanded through their stored query
    /// parameters instead; see [`crate::stored::build_stored_query`].
    pub fn queries(
        &self,
        resume: Option<NaiveDate>,
        now: NaiveDate,
        config: &MyadsConfig,
    ) -> Result<Vec<QueryPair>, ConfigError> {
        let template = self.template.ok_or(ConfigError::NotATemplate)?;
        build_notification_query(
            template,
            self.frequency,
            self.data.as_deref(),
            self.classes.as_deref(),
            resume,
            now,
            config,
        )
    }
}

/// Render the arxiv_class filter. Parent archives get a wildcard; dotted
/// sub-categories are used verbatim.
fn arxiv_class_filter(classes: &[String]) -> String {
    let rendered: Vec<String> = classes
        .iter()
        .map(|class| {
            if class.contains('.') {
                class.clone()
            } else {
                format!("{}.*", class)
            }
        })
        .collect();
    format!("arxiv_class:({})", rendered.join(" OR "))
}

fn require_data<'a>(template: TemplateKind, data: Option<&'a str>) -> Result<&'a str, ConfigError> {
    data.filter(|d| !d.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingData(template.as_str().to_string()))
}
