//! Recognizer for single-line Gradle dependency declarations.
//!
//! This is a narrow, non-general grammar: exactly one declaration shape on
//! exactly one line. Multi-line declarations, nested interpolation, project
//! references, and unknown configuration keywords all fall through unmatched
//! and are preserved verbatim by the rewriter.

use regex::Regex;
use std::sync::OnceLock;

/// Matches, anchored on the whole line:
/// `<indent><config>[( ]['"]?(platform()?['"]<notation>['"])?)?`
/// covering Groovy (`implementation 'g:a:v'`), Kotlin DSL
/// (`implementation("g:a:v")`) and platform-wrapped forms of either.
static DEPENDENCY_LINE: OnceLock<Regex> = OnceLock::new();

fn dependency_line_re() -> &'static Regex {
    DEPENDENCY_LINE.get_or_init(|| {
        Regex::new(
            r#"^(?P<indent>\s+)(?P<config>annotationProcessor|api|implementation|compileOnly|testImplementation|testCompileOnly|testAnnotationProcessor|kaptTest|kapt)\s?\(?['"]?(?P<platform>platform\()?['"](?P<notation>[\w.:${}-]+)['"]\)?\)?\s*$"#,
        )
        .unwrap()
    })
}

/// A matched dependency declaration, borrowed from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyLine<'a> {
    pub indent: &'a str,
    pub configuration: &'a str,
    /// Whether the coordinate was wrapped in `platform(...)`.
    pub platform: bool,
    /// The raw `group:artifact[:version]` string between the quotes.
    pub notation: &'a str,
}

/// Full-line match only: a line that merely mentions a configuration keyword
/// in a comment or a larger expression never matches.
pub fn match_dependency_line(line: &str) -> Option<DependencyLine<'_>> {
    let caps = dependency_line_re().captures(line)?;
    Some(DependencyLine {
        indent: caps.name("indent").map_or("", |m| m.as_str()),
        configuration: caps.name("config").map_or("", |m| m.as_str()),
        platform: caps.name("platform").is_some(),
        notation: caps.name("notation").map_or("", |m| m.as_str()),
    })
}
