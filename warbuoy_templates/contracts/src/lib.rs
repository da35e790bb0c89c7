use serde::Serialize;

/// Renders HTML email bodies.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T>(mut self, template: T, html: impl Into<String>) -> Self
    where
        T: Template + Send + PartialEq + std::fmt::Debug + 'static,
    {
        let html = html.into();
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(move |_| Ok(html));
        self
    }
}

/// A serializable context bound to one template source.
pub trait Template: Serialize {
    const NAME: &'static str;
    const SOURCE: &'static str;
}

/// Layout every template extends as `"layout.html"`.
pub const LAYOUT: (&str, &str) = ("layout.html", include_str!("../templates/base.html"));

/// All templates in registration order, layout first.
pub const TEMPLATES: &[(&str, &str)] = &[
    LAYOUT,
    (LeadNotificationTemplate::NAME, LeadNotificationTemplate::SOURCE),
];

/// Notification sent to the agency for every new lead.
///
/// Fields hold raw values. Template names end in `.html`, so the renderer
/// escapes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadNotificationTemplate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub budget: Option<String>,
    pub services: Option<String>,
    pub message: String,
}

impl Template for LeadNotificationTemplate {
    const NAME: &'static str = "lead_notification.html";
    const SOURCE: &'static str = include_str!("../templates/lead_notification.html");
}
