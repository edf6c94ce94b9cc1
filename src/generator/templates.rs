use minijinja::{context, Environment};

use super::routes::RouteEntry;

const ROUTES_TEMPLATE: &str = r#"// @generated by chainroute-gen. Do not edit by hand.

/// One route binding: URL pattern plus its source module and methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteBinding {
    pub pattern: &'static str,
    pub source: &'static str,
    pub params: &'static [&'static str],
    pub methods: &'static [&'static str],
}

/// Every route discovered under the routes directory, in path order.
pub static ROUTES: &[RouteBinding] = &[
{%- for route in routes %}
    RouteBinding {
        pattern: "{{ route.pattern }}",
        source: "{{ route.source }}",
        params: &[{% for p in route.params %}"{{ p }}"{% if not loop.last %}, {% endif %}{% endfor %}],
        methods: &[{% for m in route.methods %}"{{ m }}"{% if not loop.last %}, {% endif %}{% endfor %}],
    },
{%- endfor %}
];
"#;

/// Render the manifest module for a set of scanned routes.
pub fn render_routes_module(routes: &[RouteEntry]) -> anyhow::Result<String> {
    let mut env = Environment::new();
    env.add_template("routes", ROUTES_TEMPLATE)
        .map_err(|err| anyhow::anyhow!("routes template is invalid: {err}"))?;
    let rendered = env
        .get_template("routes")
        .and_then(|tmpl| tmpl.render(context! { routes => routes }))
        .map_err(|err| anyhow::anyhow!("failed to render routes manifest: {err}"))?;
    Ok(rendered)
}
