//! Tailwind `content` globs for the new app directory

use regex::Regex;
use std::sync::OnceLock;

pub const APP_CONTENT_GLOB: &str = "./src/app/**/*.{js,ts,jsx,tsx,mdx}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TailwindEdit {
    /// Glob inserted; carries the new text
    Updated(String),
    /// The config already scans `./src/app/`
    AlreadyPresent,
    /// No `content: [` array to insert into
    NoContentArray,
}

fn content_array_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"content\s*:\s*\[").expect("valid regex"))
}

/// Insert [`APP_CONTENT_GLOB`] as the first entry of the first
/// `content: [` array outside comments
pub fn add_app_content_glob(config: &str) -> TailwindEdit {
    if config.contains("./src/app/") {
        return TailwindEdit::AlreadyPresent;
    }

    let Some(found) = content_array_regex()
        .find_iter(config)
        .find(|m| !in_comment(config, m.start()))
    else {
        return TailwindEdit::NoContentArray;
    };

    let indent = line_indent(config, found.start());
    let mut out = String::with_capacity(config.len() + APP_CONTENT_GLOB.len() + 16);
    out.push_str(&config[..found.end()]);
    out.push('\n');
    out.push_str(&indent);
    out.push_str("  \"");
    out.push_str(APP_CONTENT_GLOB);
    out.push_str("\",");

    let rest = &config[found.end()..];
    if !rest.trim_start_matches([' ', '\t']).starts_with('\n') {
        out.push('\n');
        out.push_str(&indent);
        out.push_str("  ");
        out.push_str(rest.trim_start_matches([' ', '\t']));
    } else {
        out.push_str(rest);
    }

    TailwindEdit::Updated(out)
}

/// Whether `offset` falls inside a `//` or `/* */` comment. String
/// literals are skipped so `"//"` inside a glob does not count.
fn in_comment(text: &str, offset: usize) -> bool {
    let mut chars = text[..offset].chars().peekable();
    let mut quote: Option<char> = None;
    let mut line_comment = false;
    let mut block_comment = false;

    while let Some(c) = chars.next() {
        if line_comment {
            line_comment = c != '\n';
        } else if block_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                block_comment = false;
            }
        } else if let Some(q) = quote {
            if c == '\\' {
                chars.next();
            } else if c == q {
                quote = None;
            }
        } else {
            match c {
                '"' | '\'' | '`' => quote = Some(c),
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    line_comment = true;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    block_comment = true;
                }
                _ => {}
            }
        }
    }

    line_comment || block_comment
}

fn line_indent(text: &str, offset: usize) -> String {
    let line_start = text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    text[line_start..offset]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_content_array() {
        let config = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: { extend: {} },
}
"#;
        let TailwindEdit::Updated(updated) = add_app_content_glob(config) else {
            panic!("expected update");
        };
        assert!(updated.contains(
            "  content: [\n    \"./src/app/**/*.{js,ts,jsx,tsx,mdx}\",\n    \"./index.html\","
        ));
        assert!(updated.contains("theme: { extend: {} }"));
    }

    #[test]
    fn test_inline_content_array() {
        let config = "module.exports = {\n  content: ['./src/**/*.tsx'],\n}\n";
        let TailwindEdit::Updated(updated) = add_app_content_glob(config) else {
            panic!("expected update");
        };
        assert_eq!(
            updated,
            "module.exports = {\n  content: [\n    \"./src/app/**/*.{js,ts,jsx,tsx,mdx}\",\n    './src/**/*.tsx'],\n}\n"
        );
    }

    #[test]
    fn test_commented_content_array_ignored() {
        let config = "// content: [ is documented below\n/* content: [] */\nexport default {\n  content: ['./src/**/*.tsx'],\n}\n";
        let TailwindEdit::Updated(updated) = add_app_content_glob(config) else {
            panic!("expected update");
        };
        assert_eq!(
            updated,
            "// content: [ is documented below\n/* content: [] */\nexport default {\n  content: [\n    \"./src/app/**/*.{js,ts,jsx,tsx,mdx}\",\n    './src/**/*.tsx'],\n}\n"
        );
    }

    #[test]
    fn test_only_commented_content_array() {
        let config = "export default {\n  // content: ['./src/**/*.tsx'],\n  presets: [],\n}\n";
        assert_eq!(add_app_content_glob(config), TailwindEdit::NoContentArray);
    }

    #[test]
    fn test_already_present() {
        let config = "export default { content: ['./src/app/**/*.tsx'] }";
        assert_eq!(add_app_content_glob(config), TailwindEdit::AlreadyPresent);
    }

    #[test]
    fn test_no_content_array() {
        let config = "export default { presets: [require('./preset')] }";
        assert_eq!(add_app_content_glob(config), TailwindEdit::NoContentArray);
    }

    #[test]
    fn test_second_application_is_noop() {
        let config = "export default {\n  content: ['./src/**/*.tsx'],\n}\n";
        let TailwindEdit::Updated(updated) = add_app_content_glob(config) else {
            panic!("expected update");
        };
        assert_eq!(add_app_content_glob(&updated), TailwindEdit::AlreadyPresent);
    }
}
