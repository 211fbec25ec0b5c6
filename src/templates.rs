use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::Value;

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true); // fail if a variable is missing

    hb.register_partial("layout", include_str!("templates/layout.hbs"))
        .expect("layout partial failed to parse");

    for (name, source) in [
        ("login", include_str!("templates/login.hbs")),
        ("dashboard", include_str!("templates/dashboard.hbs")),
        ("admin", include_str!("templates/admin.hbs")),
    ] {
        hb.register_template_string(name, source)
            .unwrap_or_else(|e| panic!("template '{name}' failed to parse: {e}"));
    }

    hb
});

/// Render a page by name.
///
/// Usage:
///     render("login", &json!({"error": null}))
///
pub fn render(name: &str, ctx: &Value) -> anyhow::Result<String> {
    TEMPLATES
        .render(name, ctx)
        .map_err(|e| anyhow::anyhow!("rendering page '{name}' failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_template_renders_error_banner() {
        let html = render("login", &json!({"error": "Enter both email and password"})).unwrap();
        assert!(html.contains("Enter both email and password"));
        assert!(html.contains("Sign In"));
    }

    #[test]
    fn login_template_without_error() {
        let html = render("login", &json!({"error": null})).unwrap();
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert!(render("payroll", &json!({})).is_err());
    }
}
