//! Project name validation following the npm rules for new packages.

use log::warn;
use regex::Regex;

/// Matches `name` or `@scope/name`.
const SCOPED_PACKAGE_PATTERN: &str = r"^(?:@([^/]+?)[/])?([^/]+?)$";

const MAX_NAME_LENGTH: usize = 214;

const BLACKLISTED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

const CORE_MODULE_NAMES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Outcome of checking a name against the package naming rules.
///
/// Errors make a name unusable for any package, warnings only for new ones.
/// A project name must have neither.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PackageNameReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl PackageNameReport {
    pub fn valid_for_new_packages(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// The message shown to the user for an invalid name.
    pub fn reason(&self) -> String {
        self.errors
            .first()
            .or_else(|| self.warnings.first())
            .cloned()
            .unwrap_or_else(|| "Invalid project name".to_string())
    }
}

/// Returns `Ok(())` for a usable project name or a human-readable reason.
pub fn validate_project_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Project name is required".to_string());
    }

    let report = check_package_name(name);
    if report.valid_for_new_packages() {
        Ok(())
    } else {
        Err(report.reason())
    }
}

/// Checks a name against every package naming rule.
pub fn check_package_name(name: &str) -> PackageNameReport {
    let mut report = PackageNameReport::default();
    let lowercase = name.to_lowercase();

    if name.is_empty() {
        report.errors.push("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        report.errors.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        report.errors.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        report.errors.push("name cannot contain leading or trailing spaces".to_string());
    }
    for blacklisted in BLACKLISTED_NAMES {
        if lowercase == *blacklisted {
            report.errors.push(format!("{blacklisted} is a blacklisted name"));
        }
    }

    for core_module in CORE_MODULE_NAMES {
        if lowercase == *core_module {
            report.warnings.push(format!("{core_module} is a core module name"));
        }
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        report.warnings.push(format!(
            "name can no longer contain more than {MAX_NAME_LENGTH} characters"
        ));
    }
    if lowercase != name {
        report.warnings.push("name can no longer contain capital letters".to_string());
    }
    let last_segment = name.rsplit('/').next().unwrap_or(name);
    if last_segment.contains(['~', '\'', '!', '(', ')', '*']) {
        report.warnings.push(
            "name can no longer contain special characters (\"~'!()*\")".to_string(),
        );
    }

    if !is_url_safe(name) {
        match split_scoped_name(name) {
            Some((scope, package)) => {
                if package.starts_with('.') {
                    report.errors.push("name cannot start with a period".to_string());
                }
                let scope_is_safe = scope.map(is_url_safe).unwrap_or(true);
                if !(scope_is_safe && is_url_safe(package)) {
                    report
                        .errors
                        .push("name can only contain URL-friendly characters".to_string());
                }
            }
            None => report
                .errors
                .push("name can only contain URL-friendly characters".to_string()),
        }
    }

    report
}

/// Characters that survive URI component encoding unchanged.
fn is_url_safe(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}

/// Splits `@scope/name` into its parts; a bare name has no scope.
fn split_scoped_name(name: &str) -> Option<(Option<&str>, &str)> {
    let pattern = match Regex::new(SCOPED_PACKAGE_PATTERN) {
        Ok(re) => re,
        Err(err) => {
            warn!("Invalid regex '{SCOPED_PACKAGE_PATTERN}': {err}");
            return None;
        }
    };
    let captures = pattern.captures(name)?;
    let scope = captures.get(1).map(|m| m.as_str());
    let package = captures.get(2)?.as_str();
    Some((scope, package))
}
