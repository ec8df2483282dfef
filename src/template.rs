/// Render a template by substituting `{name}` placeholders
///
/// Placeholders without a matching entry in `vars` are left as literal text,
/// so a custom template with an unrecognized placeholder degrades gracefully
/// instead of failing.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in vars {
        rendered = rendered.replace(&format!("{{{}}}", name), value);
    }
    rendered
}
