//! Textual template rendering with Tera.
//!
//! Install files classified as text are rendered one at a time against the
//! substitution context built from the session's answers. Tera reports a
//! reference to a key absent from the context as an error, which the
//! materializer surfaces with the offending source path attached.

use tera::{Context, Tera};

/// Render a single template string against a substitution context.
///
/// Non-placeholder content passes through unchanged; every `{{ key }}`
/// placeholder is replaced with the context value for `key`. Rendering the
/// output again with the same context is the identity as long as the
/// substituted values contain no placeholder syntax themselves.
pub fn render_str(input: &str, ctx: &Context) -> Result<String, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template("install_file", input)?;
    tera.render("install_file", ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        let mut ctx = Context::new();
        ctx.insert("name", "demo-app");
        ctx.insert("title", "Demo App");
        ctx
    }

    #[test]
    fn test_substitutes_known_keys() {
        let out = render_str("# {{ title }}\npackage: {{ name }}\n", &ctx()).unwrap();
        assert_eq!(out, "# Demo App\npackage: demo-app\n");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let input = "no placeholders here, just braces: { } and }}\n";
        assert_eq!(render_str(input, &ctx()).unwrap(), input);
    }

    #[test]
    fn test_undefined_key_is_an_error() {
        let err = render_str("{{ title }} by {{ author }}", &ctx()).unwrap_err();
        assert!(err.to_string().to_lowercase().contains("author") || format!("{:?}", err).contains("author"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let once = render_str("{{ name }} ({{ title }})", &ctx()).unwrap();
        let twice = render_str(&once, &ctx()).unwrap();
        assert_eq!(once, twice);
    }
}
