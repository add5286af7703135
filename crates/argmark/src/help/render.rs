//! Help rendering functions.

use minijinja::{Environment, Value};

use crate::error::Result;
use crate::output::OutputMode;
use crate::schema::Schema;

use super::config::{default_help_theme, HelpConfig, HelpTheme};
use super::data::extract_help_data;

const DEFAULT_TEMPLATE: &str = include_str!("template.txt");

/// Registers the `style` filter backed by `theme`.
fn register_filters(env: &mut Environment<'static>, theme: HelpTheme, mode: OutputMode) {
    let is_debug = mode.is_debug();
    let use_color = mode.should_use_color();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if is_debug {
            theme.apply_debug(&name, &text)
        } else {
            theme.apply_with_color(&name, &text, use_color)
        }
    });
}

/// Renders the help text for a schema.
///
/// The layout is a usage line, an optional about paragraph, an `Arguments:`
/// section listing the positional arguments (shown only when one of them is
/// required) and an `Options:` section for flags,
/// including `--version` and `-h, --help` when enabled. Trailing whitespace
/// is removed from every line.
///
/// # Errors
///
/// Returns [`ArgError::InvalidSchema`](crate::ArgError::InvalidSchema) if the
/// schema has no program name, and [`ArgError::Render`](crate::ArgError::Render)
/// if a custom template fails.
///
/// # Example
///
/// ```
/// use argmark::help::{render_help, HelpConfig};
/// use argmark::{ArgumentDeclaration, OutputMode, Schema, ValueType};
///
/// let schema = Schema::builder()
///     .name("mytool")
///     .help()
///     .arg(ArgumentDeclaration::new("name", ValueType::String).short('n').description("User name"))
///     .build()
///     .unwrap();
///
/// let config = HelpConfig {
///     output_mode: Some(OutputMode::Text),
///     ..Default::default()
/// };
/// let help = render_help(&schema, &config).unwrap();
/// assert!(help.starts_with("Usage: mytool [OPTIONS]"));
/// assert!(help.contains("  -n [NAME]   User name"));
/// ```
pub fn render_help(schema: &Schema, config: &HelpConfig) -> Result<String> {
    let template = config.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    let theme = config.theme.clone().unwrap_or_else(default_help_theme);
    let mode = config.output_mode.unwrap_or_default();

    let data = extract_help_data(schema)?;

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    register_filters(&mut env, theme, mode);

    let rendered = env.render_str(template, &data)?;
    let lines: Vec<&str> = rendered.lines().map(str::trim_end).collect();
    Ok(lines.join("\n").trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ArgumentDeclaration;
    use crate::value::ValueType;

    fn text_config() -> HelpConfig {
        HelpConfig {
            output_mode: Some(OutputMode::Text),
            ..Default::default()
        }
    }

    fn readme_schema() -> Schema {
        Schema::builder()
            .name("mytool")
            .version("1.2.3")
            .help()
            .arg(
                ArgumentDeclaration::new("name", ValueType::String)
                    .short('n')
                    .long("name")
                    .description("User name"),
            )
            .arg(
                ArgumentDeclaration::new("age", ValueType::String)
                    .auto_short()
                    .auto_long()
                    .description("Age of the user"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_options_only() {
        let help = render_help(&readme_schema(), &text_config()).unwrap();
        let expected = "\
Usage: mytool [OPTIONS]

Options:
  -n, --name [NAME]  User name
  -a, --age [AGE]    Age of the user
  --version          Show version information
  -h, --help         Show this help message";
        assert_eq!(help, expected);
    }

    #[test]
    fn test_render_arguments_section() {
        let schema = Schema::builder()
            .name("copy")
            .arg(
                ArgumentDeclaration::new("source", ValueType::String)
                    .required()
                    .description("File to copy"),
            )
            .arg(
                ArgumentDeclaration::new("dest", ValueType::String)
                    .required()
                    .description("Destination"),
            )
            .build()
            .unwrap();

        let help = render_help(&schema, &text_config()).unwrap();
        let expected = "\
Usage: copy [SOURCE] [DEST]

Arguments:
  [SOURCE]  File to copy
  [DEST]    Destination";
        assert_eq!(help, expected);
    }

    #[test]
    fn test_render_about_and_empty_description() {
        let schema = Schema::builder()
            .name("tool")
            .about("Does things.")
            .arg(ArgumentDeclaration::new("input", ValueType::String).required())
            .build()
            .unwrap();

        let help = render_help(&schema, &text_config()).unwrap();
        assert_eq!(help, "Usage: tool [INPUT]\n\nDoes things.\n\nArguments:\n  [INPUT]");
    }

    #[test]
    fn test_render_optional_positionals_have_no_section() {
        let schema = Schema::builder()
            .name("tool")
            .arg(ArgumentDeclaration::new("input", ValueType::String))
            .build()
            .unwrap();

        let help = render_help(&schema, &text_config()).unwrap();
        assert_eq!(help, "Usage: tool");
    }

    #[test]
    fn test_render_debug_mode_tags() {
        let config = HelpConfig {
            output_mode: Some(OutputMode::TermDebug),
            ..Default::default()
        };
        let help = render_help(&readme_schema(), &config).unwrap();
        assert!(help.starts_with("[header]Usage:[/header] [name]mytool[/name]"));
        assert!(help.contains("[header]Options:[/header]"));
    }

    #[test]
    fn test_render_term_mode_styles_headers() {
        let config = HelpConfig {
            output_mode: Some(OutputMode::Term),
            ..Default::default()
        };
        let help = render_help(&readme_schema(), &config).unwrap();
        assert!(help.contains("\u{1b}["));
    }

    #[test]
    fn test_custom_template() {
        let config = HelpConfig {
            template: Some("{{ name }}:{% for row in options %} {{ row.label }}{% endfor %}".into()),
            output_mode: Some(OutputMode::Text),
            ..Default::default()
        };
        let help = render_help(&readme_schema(), &config).unwrap();
        assert_eq!(
            help,
            "mytool: -n, --name [NAME] -a, --age [AGE] --version -h, --help"
        );
    }

    #[test]
    fn test_broken_template_is_render_error() {
        let config = HelpConfig {
            template: Some("{% if %}".into()),
            ..Default::default()
        };
        let err = render_help(&readme_schema(), &config).unwrap_err();
        assert!(matches!(err, crate::ArgError::Render(_)));
    }
}
